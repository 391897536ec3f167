//! Staff user account models and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role of a staff account.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Normal,
}

/// A staff user account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// DTO for creating a staff user.
#[derive(Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100, message = "fullName es requerido"))]
    pub full_name: String,
    #[validate(length(min = 1, max = 50, message = "userName es requerido"))]
    pub user_name: String,
    #[validate(length(min = 8, message = "password debe tener al menos 8 caracteres"))]
    pub password: String,
    #[validate(email(message = "email no es válido"))]
    pub email: String,
    pub role: UserRole,
}

/// DTO for updating a staff user. Only provided fields are sent.
#[derive(Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}
