//! # Homologa Models
//!
//! Domain models and wire schemas for the homologation API.
//!
//! Every struct here describes a shape the backend sends or accepts. Incoming
//! shapes are only ever constructed by successful deserialization at the
//! trust boundary; after that they are plain immutable values. Outgoing DTOs
//! carry `validator` rules checked before the request is built.
//!
//! Wire field names are camelCase throughout.
//!
//! # Modules
//!
//! - [`auth`]: login payload and the authenticated user profile
//! - [`users`]: staff user accounts
//! - [`students`]: students, homologation results, and report shapes
//! - [`plans`]: the old/new academic plan overview

pub mod auth;
pub mod plans;
pub mod students;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginPayload, LoginResponse, UserProfile};

pub use plans::{Area, Plan, PlanSubject, PlanWithSubjects, PlansOverview};

pub use students::{
    ApprovedSubjectRef, CreateStudentDto, Gender, HomologationResult, Student, StudentData,
    StudentReport, Subject, UpdateStudentData, UpdateStudentDto,
};

pub use users::{CreateUserDto, UpdateUserDto, User, UserRole};
