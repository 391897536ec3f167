//! Authentication endpoints.

use homologa_core::ApiError;
use homologa_models::auth::{LoginPayload, LoginResponse, UserProfile};

use crate::fetch::fetch_and_validate;
use crate::http::HttpClient;

pub struct AuthService;

impl AuthService {
    /// `POST /auth/login`. Returns the opaque bearer token.
    pub async fn login(http: &HttpClient, payload: &LoginPayload) -> Result<String, ApiError> {
        let response: LoginResponse = fetch_and_validate(
            || http.post_public("/auth/login", payload),
            "Error al iniciar sesión",
        )
        .await?;
        Ok(response.token)
    }

    /// `GET /auth/profile`. Requires an installed token.
    pub async fn profile(http: &HttpClient) -> Result<UserProfile, ApiError> {
        fetch_and_validate(
            || http.get("/auth/profile"),
            "Error en obtener los datos del perfil",
        )
        .await
    }
}
