use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::types::Location;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub struct LocationsFile {
    pub locations: Vec<Location>,
}

/// Load and validate a locations YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_locations(path: &Path) -> Result<LocationsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_locations(&content)
}

/// Parse and validate locations YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML cannot be parsed or fails validation.
pub fn parse_locations(content: &str) -> Result<LocationsFile, ConfigError> {
    let file: LocationsFile =
        serde_yaml::from_str(content).map_err(ConfigError::LocationsFileParse)?;
    validate_locations(&file)?;
    Ok(file)
}

fn validate_locations(file: &LocationsFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    for location in &file.locations {
        if location.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "location id must be non-empty".to_string(),
            ));
        }
        if location.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "location '{}' has an empty name",
                location.id
            )));
        }
        if location.brand.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "location '{}' has an empty brand",
                location.name
            )));
        }
        if !seen_ids.insert(location.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate location id: '{}'",
                location.id
            )));
        }
        // Locations are selected by name, so names must be unique too.
        if !seen_names.insert(location.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate location name: '{}'",
                location.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
locations:
  - id: loc_1
    name: Downtown Store
    brand: Brand A
    address: 1 Main St
    phone: "+1 555 0100"
  - id: loc_2
    name: Airport Store
    brand: Brand B
"#;

    #[test]
    fn parses_valid_file() {
        let file = parse_locations(VALID).unwrap();
        assert_eq!(file.locations.len(), 2);
        assert_eq!(file.locations[0].address.as_deref(), Some("1 Main St"));
        assert!(file.locations[1].phone.is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let yaml = r"
locations:
  - { id: loc_1, name: One, brand: A }
  - { id: loc_1, name: Two, brand: A }
";
        let err = parse_locations(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate location id"));
    }

    #[test]
    fn rejects_duplicate_names_case_insensitively() {
        let yaml = r"
locations:
  - { id: loc_1, name: Mall Location, brand: A }
  - { id: loc_2, name: mall location, brand: B }
";
        let err = parse_locations(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate location name"));
    }

    #[test]
    fn rejects_empty_brand() {
        let yaml = r#"
locations:
  - { id: loc_1, name: One, brand: "  " }
"#;
        let err = parse_locations(yaml).unwrap_err();
        assert!(err.to_string().contains("empty brand"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_locations(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileIo { .. }));
    }
}
