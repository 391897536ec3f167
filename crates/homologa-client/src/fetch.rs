//! Typed request executor.
//!
//! Pairs one request action with one expected response shape and one
//! fallback error message. The caller either gets a value already proven to
//! match the shape, or an [`ApiError`]. Transport failures are normalized,
//! never swallowed; a body that fails validation surfaces only the fallback
//! message, with the field-level diagnostics going to the debug log.
//!
//! This layer performs exactly one attempt per call: no retries, no caching,
//! no deduplication. Executing twice performs two network calls.

use std::future::Future;

use homologa_core::{ApiError, TransportError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Runs `request`, validates the raw body against `T`, and returns the typed
/// value or a normalized error.
pub async fn fetch_and_validate<T, F, Fut>(request: F, fallback: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Value, TransportError>>,
{
    let body = request().await.map_err(ApiError::from)?;
    validate(body, fallback)
}

/// Validates an already-received body against `T`.
///
/// Split out from [`fetch_and_validate`] for the endpoints that reshape the
/// body after validation.
pub fn validate<T>(body: Value, fallback: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(body).map_err(|err| {
        debug!(error = %err, "response body failed schema validation");
        ApiError::validation(fallback)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use homologa_core::errors::{MSG_SERVER, MSG_UNKNOWN};
    use serde::Deserialize;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Deserialize, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Profile {
        id: String,
        full_name: String,
        user_name: String,
        role: String,
    }

    #[tokio::test]
    async fn test_valid_body_round_trips() {
        let body = json!({
            "id": "1",
            "fullName": "Ana Ruiz",
            "userName": "aruiz",
            "role": "admin"
        });
        let profile: Profile =
            fetch_and_validate(|| async { Ok(body) }, "Error en obtener los datos del perfil")
                .await
                .unwrap();
        assert_eq!(
            profile,
            Profile {
                id: "1".to_string(),
                full_name: "Ana Ruiz".to_string(),
                user_name: "aruiz".to_string(),
                role: "admin".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_fields_yield_exact_fallback_message() {
        let body = json!({ "id": "1" });
        let result: Result<Profile, ApiError> =
            fetch_and_validate(|| async { Ok(body) }, "Error en obtener los datos del perfil")
                .await;
        assert_eq!(
            result.unwrap_err(),
            ApiError::validation("Error en obtener los datos del perfil")
        );
    }

    #[tokio::test]
    async fn test_wrong_typed_field_yields_fallback_not_serde_detail() {
        let body = json!({
            "id": 1,
            "fullName": "Ana Ruiz",
            "userName": "aruiz",
            "role": "admin"
        });
        let result: Result<Profile, ApiError> =
            fetch_and_validate(|| async { Ok(body) }, "fallback").await;
        let err = result.unwrap_err();
        assert_eq!(err.message(), "fallback");
        // serde's own wording never leaks into the message
        assert!(!err.message().contains("invalid type"));
    }

    #[tokio::test]
    async fn test_transport_400_normalized_with_server_message() {
        let result: Result<Profile, ApiError> = fetch_and_validate(
            || async {
                Err(TransportError::status(
                    400,
                    Some("userName ya existe".to_string()),
                    anyhow!("bad request"),
                ))
            },
            "fallback",
        )
        .await;
        assert_eq!(
            result.unwrap_err(),
            ApiError::Client {
                status: 400,
                message: "userName ya existe".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_transport_500_without_body_normalized() {
        let result: Result<Profile, ApiError> = fetch_and_validate(
            || async { Err(TransportError::status(500, None, anyhow!("internal"))) },
            "fallback",
        )
        .await;
        assert_eq!(
            result.unwrap_err(),
            ApiError::Server {
                status: Some(500),
                message: MSG_SERVER.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_timeout_without_response_normalized_as_server() {
        let result: Result<Profile, ApiError> = fetch_and_validate(
            || async { Err(TransportError::network(anyhow!("timed out"))) },
            "fallback",
        )
        .await;
        assert_eq!(
            result.unwrap_err(),
            ApiError::Server {
                status: None,
                message: MSG_SERVER.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_non_http_failure_normalized_as_unknown() {
        let result: Result<Profile, ApiError> = fetch_and_validate(
            || async { Err(TransportError::other(anyhow!("poisoned lock"))) },
            "fallback",
        )
        .await;
        assert_eq!(result.unwrap_err().message(), MSG_UNKNOWN);
    }

    #[tokio::test]
    async fn test_two_calls_issue_two_requests() {
        let calls = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let calls = Rc::clone(&calls);
            let profile: Profile = fetch_and_validate(
                move || async move {
                    calls.set(calls.get() + 1);
                    Ok(json!({
                        "id": "1",
                        "fullName": "Ana Ruiz",
                        "userName": "aruiz",
                        "role": "admin"
                    }))
                },
                "fallback",
            )
            .await
            .unwrap();
            assert_eq!(profile.id, "1");
        }

        // No memoization at this layer: each execution hits the transport.
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_validate_is_pure() {
        let body = json!({
            "id": "1",
            "fullName": "Ana Ruiz",
            "userName": "aruiz",
            "role": "admin"
        });
        let first: Profile = validate(body.clone(), "fallback").unwrap();
        let second: Profile = validate(body, "fallback").unwrap();
        assert_eq!(first, second);
    }
}
