//! Authentication models: login payload and the authenticated profile.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials sent to `POST /auth/login`.
#[derive(Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "userName es requerido"))]
    pub user_name: String,
    #[validate(length(min = 1, message = "password es requerido"))]
    pub password: String,
}

/// Successful login response. The token is an opaque bearer string.
#[derive(Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
}

/// The profile of the authenticated user, from `GET /auth/profile`.
///
/// `role` stays a free string here; the backend owns the role vocabulary
/// for profiles and the client only displays it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub user_name: String,
    pub role: String,
}
