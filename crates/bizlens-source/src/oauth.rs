//! OAuth2 installed-app flow for the Business Profile APIs.

use bizlens_core::OAuthCredentials;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::client::http_client;
use crate::error::SourceError;

pub const BUSINESS_MANAGE_SCOPE: &str = "https://www.googleapis.com/auth/business.manage";

/// Token endpoint response for an authorization-code exchange.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[redacted]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[redacted]"),
            )
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Builds consent URLs and exchanges authorization codes for tokens.
pub struct OAuthClient {
    client: Client,
    credentials: OAuthCredentials,
}

impl OAuthClient {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the `reqwest::Client` cannot be built.
    pub fn from_credentials(
        credentials: &OAuthCredentials,
        timeout_secs: u64,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: http_client(timeout_secs)?,
            credentials: credentials.clone(),
        })
    }

    /// The consent page the user opens to grant `business.manage` access.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if the credentials' `auth_uri`
    /// does not parse.
    pub fn authorization_url(&self, state: &str) -> Result<Url, SourceError> {
        let mut url =
            Url::parse(&self.credentials.auth_uri).map_err(|e| SourceError::InvalidBaseUrl {
                url: self.credentials.auth_uri.clone(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("redirect_uri", self.credentials.redirect_uri())
            .append_pair("response_type", "code")
            .append_pair("scope", BUSINESS_MANAGE_SCOPE)
            .append_pair("access_type", "offline")
            .append_pair("prompt", "consent")
            .append_pair("state", state);
        Ok(url)
    }

    /// Exchange an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::Auth`] if the token endpoint rejects the code.
    /// - [`SourceError::Deserialize`] if the token response is malformed.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, SourceError> {
        let response = self
            .client
            .post(&self.credentials.token_uri)
            .form(&[
                ("code", code.trim()),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("redirect_uri", self.credentials.redirect_uri()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SourceError::Auth(format!(
                "token exchange failed with status {status}: {}",
                error_description(&body)
            )));
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
                context: "token exchange".to_string(),
                source: e,
            })?;

        tracing::info!(
            expires_in = token.expires_in,
            has_refresh_token = token.refresh_token.is_some(),
            "exchanged authorization code"
        );
        Ok(token)
    }
}

/// Pull `error_description` (or `error`) out of an OAuth error body.
fn error_description(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error_description")
                .or_else(|| v.get("error"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| "no error description".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> OAuthCredentials {
        OAuthCredentials::from_json(
            r#"{"installed": {
                "client_id": "cid.apps.googleusercontent.com",
                "client_secret": "shh",
                "redirect_uris": ["http://localhost"]
            }}"#,
        )
        .unwrap()
    }

    #[test]
    fn authorization_url_requests_offline_business_scope() {
        let client = OAuthClient::from_credentials(&credentials(), 5).unwrap();
        let url = client.authorization_url("xyz").unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert!(url.as_str().starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert_eq!(get("client_id"), Some("cid.apps.googleusercontent.com"));
        assert_eq!(get("redirect_uri"), Some("http://localhost"));
        assert_eq!(get("response_type"), Some("code"));
        assert_eq!(get("scope"), Some(BUSINESS_MANAGE_SCOPE));
        assert_eq!(get("access_type"), Some("offline"));
        assert_eq!(get("prompt"), Some("consent"));
        assert_eq!(get("state"), Some("xyz"));
    }

    #[test]
    fn error_description_prefers_description() {
        assert_eq!(
            error_description(r#"{"error":"invalid_grant","error_description":"Bad Request"}"#),
            "Bad Request"
        );
        assert_eq!(error_description(r#"{"error":"invalid_grant"}"#), "invalid_grant");
        assert_eq!(error_description("<html>"), "no error description");
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = TokenResponse {
            access_token: "ya29.secret".to_string(),
            refresh_token: Some("1//refresh".to_string()),
            expires_in: Some(3599),
            token_type: Some("Bearer".to_string()),
        };
        let out = format!("{token:?}");
        assert!(!out.contains("ya29.secret"));
        assert!(!out.contains("1//refresh"));
    }
}
