//! Explicit session lifecycle.
//!
//! A [`Session`] is the answer to "am I logged in, and as whom". It is
//! created by [`Session::establish`] (login + profile fetch) or rebuilt from
//! a persisted token with [`Session::resume`]. There is no global auth
//! state: whoever needs the session holds the value, and logging out is
//! just dropping it along with the stored token.

use homologa_core::ApiError;
use homologa_models::auth::{LoginPayload, UserProfile};
use tracing::info;

use crate::http::HttpClient;
use crate::services::auth::AuthService;

/// An authenticated session: the bearer token and the validated profile of
/// its owner.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    profile: UserProfile,
}

impl Session {
    /// Logs in and fetches the profile, installing the token on `http`.
    ///
    /// If the profile fetch fails the token is dropped again; a session
    /// either exists fully or not at all.
    pub async fn establish(http: &HttpClient, payload: &LoginPayload) -> Result<Self, ApiError> {
        let token = AuthService::login(http, payload).await?;
        http.set_token(token.clone());

        let profile = match AuthService::profile(http).await {
            Ok(profile) => profile,
            Err(err) => {
                http.clear_token();
                return Err(err);
            }
        };

        info!(user = %profile.user_name, "session established");
        Ok(Self { token, profile })
    }

    /// Rebuilds a session from a previously persisted token by installing it
    /// and fetching the profile it belongs to.
    pub async fn resume(http: &HttpClient, token: String) -> Result<Self, ApiError> {
        http.set_token(token.clone());

        let profile = match AuthService::profile(http).await {
            Ok(profile) => profile,
            Err(err) => {
                http.clear_token();
                return Err(err);
            }
        };

        Ok(Self { token, profile })
    }

    /// The bearer token, for persistence between invocations.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Who the session belongs to.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
