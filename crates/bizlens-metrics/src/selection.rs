//! Brand and location selection.

use std::collections::BTreeSet;

use bizlens_core::Location;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown brand '{0}'")]
    UnknownBrand(String),

    #[error("unknown location '{location}'{}", brand_suffix(.brand.as_deref()))]
    UnknownLocation {
        location: String,
        brand: Option<String>,
    },
}

fn brand_suffix(brand: Option<&str>) -> String {
    brand.map(|b| format!(" for brand '{b}'")).unwrap_or_default()
}

/// Distinct brands, sorted.
#[must_use]
pub fn brands(locations: &[Location]) -> Vec<String> {
    locations
        .iter()
        .map(|l| l.brand.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Brand then location narrowing; `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    pub brand: Option<String>,
    pub location: Option<String>,
}

impl LocationFilter {
    /// `true` when a single location is selected.
    #[must_use]
    pub fn is_single_location(&self) -> bool {
        self.location.is_some()
    }

    /// Apply the filter, preserving source order.
    ///
    /// Brand and location names match case-insensitively. The location must
    /// belong to the selected brand when both are given.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if the brand or location is unknown.
    pub fn apply<'a>(&self, locations: &'a [Location]) -> Result<Vec<&'a Location>, SelectionError> {
        let by_brand: Vec<&Location> = match &self.brand {
            Some(brand) => {
                let matched: Vec<&Location> = locations
                    .iter()
                    .filter(|l| l.brand.eq_ignore_ascii_case(brand))
                    .collect();
                if matched.is_empty() {
                    return Err(SelectionError::UnknownBrand(brand.clone()));
                }
                matched
            }
            None => locations.iter().collect(),
        };

        match &self.location {
            Some(name) => by_brand
                .into_iter()
                .find(|l| l.name.eq_ignore_ascii_case(name))
                .map(|l| vec![l])
                .ok_or_else(|| SelectionError::UnknownLocation {
                    location: name.clone(),
                    brand: self.brand.clone(),
                }),
            None => Ok(by_brand),
        }
    }
}
