//! Opening the per-invocation session from flags and configuration.

use std::path::PathBuf;

use anyhow::Context;
use bizlens_core::{AppConfig, OAuthCredentials, SessionContext};
use bizlens_source::OAuthClient;

use crate::SessionArgs;

/// How the session will be opened, decided before any network call.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SessionPlan {
    Demo,
    Token(String),
    Exchange { credentials: PathBuf, code: String },
}

/// Pick the session kind. Precedence: `--demo` / `BIZLENS_DEMO_MODE`, then an
/// access token (`--access-token`, then `BIZLENS_ACCESS_TOKEN`), then a
/// `--credentials` + `--code` exchange.
pub(crate) fn plan_session(args: &SessionArgs, config: &AppConfig) -> anyhow::Result<SessionPlan> {
    if args.demo || config.demo_mode {
        return Ok(SessionPlan::Demo);
    }

    let token = args
        .access_token
        .clone()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| config.access_token.clone());
    if let Some(token) = token {
        return Ok(SessionPlan::Token(token));
    }

    match (&args.credentials, &args.code) {
        (Some(credentials), Some(code)) => Ok(SessionPlan::Exchange {
            credentials: credentials.clone(),
            code: code.clone(),
        }),
        (Some(_), None) => anyhow::bail!(
            "--credentials needs --code; run `bizlens auth-url --credentials <file>` to get one"
        ),
        (None, Some(_)) => anyhow::bail!("--code needs --credentials"),
        (None, None) => anyhow::bail!(
            "no data source: pass --demo, set BIZLENS_ACCESS_TOKEN, or use --credentials with --code"
        ),
    }
}

/// Open the session for this invocation.
///
/// # Errors
///
/// Returns an error if no data source is configured, the credentials file is
/// invalid, or the authorization code exchange fails.
pub(crate) async fn open_session(
    args: &SessionArgs,
    config: &AppConfig,
) -> anyhow::Result<SessionContext> {
    match plan_session(args, config)? {
        SessionPlan::Demo => Ok(SessionContext::demo()),
        SessionPlan::Token(token) => Ok(SessionContext::authenticated(token)),
        SessionPlan::Exchange { credentials, code } => {
            let creds = OAuthCredentials::load(&credentials)
                .with_context(|| format!("loading {}", credentials.display()))?;
            let client = OAuthClient::from_credentials(&creds, config.request_timeout_secs)?;
            let token = client
                .exchange_code(&code)
                .await
                .context("exchanging authorization code")?;
            Ok(SessionContext::authenticated(token.access_token))
        }
    }
}

/// Print the consent URL the user opens to obtain an authorization code.
///
/// # Errors
///
/// Returns an error if `--credentials` is missing or invalid.
pub(crate) fn run_auth_url(args: &SessionArgs, config: &AppConfig) -> anyhow::Result<()> {
    let path = args
        .credentials
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("auth-url needs --credentials <client-secrets.json>"))?;
    let creds = OAuthCredentials::load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let client = OAuthClient::from_credentials(&creds, config.request_timeout_secs)?;
    let state = uuid::Uuid::new_v4().simple().to_string();
    let url = client.authorization_url(&state)?;

    println!("Open this URL, grant access, then re-run with --credentials and --code:");
    println!();
    println!("{url}");
    Ok(())
}
