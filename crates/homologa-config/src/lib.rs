//! # Homologa Config
//!
//! Configuration types for the homologa CLI.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`api`]: backend base URL and request timeout
//! - [`token`]: where the session token is persisted between invocations
//!
//! # Example
//!
//! ```ignore
//! use homologa_config::{ApiConfig, TokenConfig};
//!
//! let api_config = ApiConfig::from_env();
//! let token_config = TokenConfig::from_env();
//! ```

pub mod api;
pub mod token;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use token::TokenConfig;
