//! Session-scoped choice between demo data and the live APIs.

use bizlens_core::{AppConfig, DateRange, InsightRow, Location, Review, SessionContext, SessionMode};

use crate::client::BusinessProfileClient;
use crate::demo::DemoSource;
use crate::error::SourceError;

/// Where a session's locations, insights, and reviews come from.
#[derive(Debug)]
pub enum Source {
    Demo(DemoSource),
    Live {
        client: BusinessProfileClient,
        account_id: String,
    },
}

impl Source {
    /// Pick the source matching the session mode.
    ///
    /// # Errors
    ///
    /// - [`SourceError::MissingAccountId`] for an authenticated session without
    ///   `BIZLENS_ACCOUNT_ID`.
    /// - [`SourceError::Config`] if the demo locations file is invalid.
    /// - [`SourceError::Http`] / [`SourceError::InvalidBaseUrl`] if the API
    ///   client cannot be built.
    pub fn for_session(session: &SessionContext, config: &AppConfig) -> Result<Self, SourceError> {
        match session.mode() {
            SessionMode::Demo => Ok(Source::Demo(DemoSource::from_config(config)?)),
            SessionMode::Authenticated { access_token } => {
                let account_id = config
                    .account_id
                    .clone()
                    .ok_or(SourceError::MissingAccountId)?;
                let client = BusinessProfileClient::with_base_url(
                    access_token,
                    config.request_timeout_secs,
                    &config.api_base_url,
                    &config.performance_base_url,
                )?;
                Ok(Source::Live { client, account_id })
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`SourceError`] if the live API call fails.
    pub async fn list_locations(&self) -> Result<Vec<Location>, SourceError> {
        match self {
            Source::Demo(demo) => Ok(demo.locations().to_vec()),
            Source::Live { client, account_id } => client.list_locations(account_id).await,
        }
    }

    /// # Errors
    ///
    /// Returns [`SourceError`] if the live API call fails.
    pub async fn fetch_insights(
        &self,
        location: &Location,
        range: &DateRange,
    ) -> Result<Vec<InsightRow>, SourceError> {
        match self {
            Source::Demo(demo) => Ok(demo.insights(location, range)),
            Source::Live { client, .. } => client.fetch_insights(location, range).await,
        }
    }

    /// Every returned review has passed [`Review::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the live API call fails, or
    /// [`SourceError::Core`] if a review breaks a record invariant.
    pub async fn fetch_reviews(&self, location: &Location) -> Result<Vec<Review>, SourceError> {
        let reviews = match self {
            Source::Demo(demo) => demo.reviews(location),
            Source::Live { client, account_id } => {
                client.fetch_reviews(account_id, location).await?
            }
        };
        validated(reviews)
    }
}

fn validated(reviews: Vec<Review>) -> Result<Vec<Review>, SourceError> {
    for review in &reviews {
        review.validate()?;
    }
    Ok(reviews)
}
