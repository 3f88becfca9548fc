//! Location, insight, and review sources for bizlens.
//!
//! [`DemoSource`] serves deterministic sample data; [`BusinessProfileClient`]
//! talks to the Business Profile APIs with a bearer token obtained through
//! [`OAuthClient`]. [`Source`] picks one of the two for a session.

pub mod client;
pub mod demo;
pub mod error;
pub mod normalize;
pub mod oauth;
pub mod source;
pub mod types;

pub use client::BusinessProfileClient;
pub use demo::DemoSource;
pub use error::SourceError;
pub use oauth::{OAuthClient, TokenResponse};
pub use source::Source;
