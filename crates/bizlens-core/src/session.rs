//! Explicit per-invocation session state.
//!
//! A [`SessionContext`] is opened once at the start of a user session, passed
//! by reference to every handler that needs credentials or the demo flag, and
//! consumed by [`SessionContext::end`] when the session finishes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// How the session obtains its data.
#[derive(Clone, PartialEq, Eq)]
pub enum SessionMode {
    /// Built-in sample data; no credentials involved.
    Demo,
    /// Live API access with a bearer token.
    Authenticated { access_token: String },
}

impl std::fmt::Debug for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionMode::Demo => write!(f, "Demo"),
            SessionMode::Authenticated { .. } => f
                .debug_struct("Authenticated")
                .field("access_token", &"[redacted]")
                .finish(),
        }
    }
}

#[derive(Debug)]
pub struct SessionContext {
    id: Uuid,
    mode: SessionMode,
    started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Open a demo session.
    #[must_use]
    pub fn demo() -> Self {
        Self::open(SessionMode::Demo)
    }

    /// Open a session backed by an OAuth access token.
    #[must_use]
    pub fn authenticated(access_token: impl Into<String>) -> Self {
        Self::open(SessionMode::Authenticated {
            access_token: access_token.into(),
        })
    }

    fn open(mode: SessionMode) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            mode,
            started_at: Utc::now(),
        };
        tracing::info!(
            session_id = %session.id,
            demo = session.is_demo(),
            "session started"
        );
        session
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    #[must_use]
    pub fn is_demo(&self) -> bool {
        matches!(self.mode, SessionMode::Demo)
    }

    /// The bearer token, if this is an authenticated session.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        match &self.mode {
            SessionMode::Demo => None,
            SessionMode::Authenticated { access_token } => Some(access_token),
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Close the session, dropping any credentials it held.
    ///
    /// Returns how long the session was open.
    pub fn end(self) -> chrono::Duration {
        let elapsed = Utc::now() - self.started_at;
        tracing::info!(
            session_id = %self.id,
            elapsed_ms = elapsed.num_milliseconds(),
            "session ended"
        );
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_session_has_no_token() {
        let session = SessionContext::demo();
        assert!(session.is_demo());
        assert!(session.access_token().is_none());
    }

    #[test]
    fn authenticated_session_exposes_token() {
        let session = SessionContext::authenticated("tok");
        assert!(!session.is_demo());
        assert_eq!(session.access_token(), Some("tok"));
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(SessionContext::demo().id(), SessionContext::demo().id());
    }

    #[test]
    fn debug_redacts_token() {
        let session = SessionContext::authenticated("very-secret");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("very-secret"));
    }

    #[test]
    fn end_reports_non_negative_duration() {
        let session = SessionContext::demo();
        assert!(session.end() >= chrono::Duration::zero());
    }
}
