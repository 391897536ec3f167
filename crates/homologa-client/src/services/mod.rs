//! Domain service functions, one module per resource.
//!
//! Each function pairs one endpoint with one response schema and one
//! fallback error message, and nothing else: endpoint selection and payload
//! shaping live here, every other decision belongs to the backend.

pub mod auth;
pub mod plans;
pub mod students;
pub mod users;
