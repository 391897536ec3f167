//! # Homologa Client
//!
//! Typed HTTP client for the homologation API.
//!
//! Every resource call flows through the same pipeline: transport →
//! normalized failure or raw JSON → schema validation → typed value. The
//! rest of the application only ever sees values proven to match a schema,
//! or a [`homologa_core::ApiError`].
//!
//! - [`http`]: the transport adapter over `reqwest`; the only module that
//!   touches the wire
//! - [`fetch`]: the typed request executor pairing a request with a schema
//!   and a fallback error message
//! - [`session`]: the explicit login/logout lifecycle and "who am I" state
//! - [`services`]: one module per resource (auth, students, users, plans)
//!
//! # Example
//!
//! ```ignore
//! use homologa_client::http::HttpClient;
//! use homologa_client::services::students::StudentService;
//! use homologa_config::ApiConfig;
//!
//! let http = HttpClient::new(&ApiConfig::from_env())?;
//! http.set_token(token);
//! let students = StudentService::list(&http).await?;
//! ```

pub mod fetch;
pub mod http;
pub mod services;
pub mod session;

// Re-export commonly used types at crate root
pub use fetch::fetch_and_validate;
pub use http::HttpClient;
pub use session::Session;
