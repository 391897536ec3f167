//! Administrative CLI for the course homologation service.
//!
//! The binary is a thin consumer of `homologa-client`: every command maps to
//! one domain service call, tables are filtered and paginated client-side,
//! and any [`homologa_core::ApiError`] terminates the invocation with its
//! message on stderr and exit code 1.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod token_store;
