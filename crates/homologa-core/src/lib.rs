//! # Homologa Core
//!
//! Core types and utilities for the homologa client and CLI.
//!
//! This crate provides the foundational pieces shared across the workspace:
//!
//! - [`errors`]: the normalized error taxonomy every caller branches on, plus
//!   the transport error interface adapters must populate
//! - [`filter`]: case-insensitive substring filtering over in-memory rows
//! - [`pagination`]: page-slicing helpers for table output
//!
//! # Example
//!
//! ```ignore
//! use homologa_core::errors::{ApiError, TransportError};
//! use homologa_core::pagination::PageParams;
//!
//! // Normalize a transport failure
//! let err: ApiError = TransportError::status(500, None, anyhow::anyhow!("boom")).into();
//!
//! // Slice a page out of a result set
//! let params = PageParams::new(Some(2), Some(10));
//! let page = params.slice(&rows);
//! ```

pub mod errors;
pub mod filter;
pub mod pagination;

// Re-export commonly used types at crate root
pub use errors::{ApiError, TransportError};
pub use filter::matches_filter;
pub use pagination::{PageParams, PagedView};
