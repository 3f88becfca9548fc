//! OAuth2 client secrets as downloaded from the cloud console.

use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Client credentials used for the authorization-code exchange.
#[derive(Clone, Deserialize)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

impl std::fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("redirect_uris", &self.redirect_uris)
            .finish()
    }
}

fn default_auth_uri() -> String {
    DEFAULT_AUTH_URI.to_string()
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The console wraps the credentials in an `installed` or `web` key
/// depending on the client type.
#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum CredentialsEnvelope {
    Installed(OAuthCredentials),
    Web(OAuthCredentials),
}

impl OAuthCredentials {
    /// Read a client-secrets JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or is not a valid
    /// client-secrets document.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parse a client-secrets JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CredentialsParse` for malformed JSON and
    /// `ConfigError::Validation` for empty client ids or secrets.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let envelope: CredentialsEnvelope =
            serde_json::from_str(content).map_err(ConfigError::CredentialsParse)?;
        let creds = match envelope {
            CredentialsEnvelope::Installed(c) | CredentialsEnvelope::Web(c) => c,
        };
        if creds.client_id.trim().is_empty() || creds.client_secret.trim().is_empty() {
            return Err(ConfigError::Validation(
                "credentials file has an empty client_id or client_secret".to_string(),
            ));
        }
        Ok(creds)
    }

    /// Redirect URI registered for this client; the first one listed wins.
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        self.redirect_uris
            .first()
            .map_or("urn:ietf:wg:oauth:2.0:oob", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_installed_client() {
        let json = r#"{"installed":{"client_id":"abc.apps","client_secret":"s3cret",
            "redirect_uris":["http://localhost:8080"]}}"#;
        let creds = OAuthCredentials::from_json(json).unwrap();
        assert_eq!(creds.client_id, "abc.apps");
        assert_eq!(creds.token_uri, DEFAULT_TOKEN_URI);
        assert_eq!(creds.redirect_uri(), "http://localhost:8080");
    }

    #[test]
    fn parses_web_client_with_custom_uris() {
        let json = r#"{"web":{"client_id":"id","client_secret":"secret",
            "auth_uri":"https://auth.example/a","token_uri":"https://auth.example/t"}}"#;
        let creds = OAuthCredentials::from_json(json).unwrap();
        assert_eq!(creds.auth_uri, "https://auth.example/a");
        assert_eq!(creds.token_uri, "https://auth.example/t");
        assert_eq!(creds.redirect_uri(), "urn:ietf:wg:oauth:2.0:oob");
    }

    #[test]
    fn rejects_unknown_envelope() {
        let json = r#"{"service_account":{"client_id":"id","client_secret":"s"}}"#;
        assert!(matches!(
            OAuthCredentials::from_json(json),
            Err(ConfigError::CredentialsParse(_))
        ));
    }

    #[test]
    fn rejects_empty_secret() {
        let json = r#"{"installed":{"client_id":"id","client_secret":""}}"#;
        assert!(matches!(
            OAuthCredentials::from_json(json),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn debug_redacts_secret() {
        let json = r#"{"installed":{"client_id":"id","client_secret":"hunter2"}}"#;
        let creds = OAuthCredentials::from_json(json).unwrap();
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
