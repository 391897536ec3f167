//! Staff user endpoints.
//!
//! Create, update, and delete answer with plain-text confirmations, so only
//! the read endpoints carry a schema.

use homologa_core::ApiError;
use homologa_models::users::{CreateUserDto, UpdateUserDto, User};

use crate::fetch::fetch_and_validate;
use crate::http::HttpClient;

pub struct UserService;

impl UserService {
    /// `GET /user`.
    pub async fn list(http: &HttpClient) -> Result<Vec<User>, ApiError> {
        fetch_and_validate(
            || http.get("/user"),
            "Error al obtener la lista de usuarios",
        )
        .await
    }

    /// `GET /user/{id}`.
    pub async fn get(http: &HttpClient, id: &str) -> Result<User, ApiError> {
        let path = format!("/user/{id}");
        fetch_and_validate(|| http.get(&path), "Error al obtener el usuario").await
    }

    /// `POST /user`.
    pub async fn create(http: &HttpClient, dto: &CreateUserDto) -> Result<String, ApiError> {
        http.post_text("/user", dto).await.map_err(ApiError::from)
    }

    /// `PATCH /user/{id}`.
    pub async fn update(
        http: &HttpClient,
        id: &str,
        dto: &UpdateUserDto,
    ) -> Result<String, ApiError> {
        http.patch_text(&format!("/user/{id}"), dto)
            .await
            .map_err(ApiError::from)
    }

    /// `DELETE /user/{id}`.
    pub async fn delete(http: &HttpClient, id: &str) -> Result<String, ApiError> {
        http.delete_text(&format!("/user/{id}"))
            .await
            .map_err(ApiError::from)
    }
}
