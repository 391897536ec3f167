//! Command implementations, one module per resource.

use anyhow::Context;
use homologa_client::HttpClient;
use homologa_config::TokenConfig;
use homologa_core::ApiError;
use validator::ValidationErrors;

use crate::token_store;

pub mod auth;
pub mod plans;
pub mod students;
pub mod users;

/// Installs the persisted token on the transport, failing if no session
/// has been started.
pub(crate) fn attach_token(http: &HttpClient, tokens: &TokenConfig) -> anyhow::Result<()> {
    let token = token_store::load(tokens)?
        .context("No hay una sesión activa. Ejecuta `homologa login`.")?;
    http.set_token(token);
    Ok(())
}

/// Drops the persisted token when the backend rejected it with a 401.
///
/// The transport already forgot the token in memory, but this process is
/// about to exit; without removing the file every later invocation would
/// reload the same dead token and fail the same way.
pub(crate) fn discard_rejected_token(tokens: &TokenConfig, err: &anyhow::Error) {
    if let Some(ApiError::Server {
        status: Some(401), ..
    }) = err.downcast_ref::<ApiError>()
    {
        match token_store::clear(tokens) {
            Ok(()) => tracing::warn!("token rechazado, sesión local eliminada"),
            Err(err) => tracing::warn!(error = %err, "no se pudo borrar el token rechazado"),
        }
    }
}

/// Joins DTO validation messages into one line, falling back to the field
/// name when a rule has no message.
pub(crate) fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} no es válido", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use validator::Validate;

    fn temp_token_config(name: &str) -> TokenConfig {
        let mut path = env::temp_dir();
        path.push(format!("homologa-cmd-test-{}-{}", std::process::id(), name));
        path.push("token");
        TokenConfig { path }
    }

    fn wrapped(err: ApiError) -> anyhow::Error {
        anyhow::Error::new(err)
    }

    #[test]
    fn test_rejected_token_is_discarded_on_401() {
        let tokens = temp_token_config("discard-401");
        token_store::save(&tokens, "expirado").unwrap();

        let err = wrapped(ApiError::Server {
            status: Some(401),
            message: "Unauthorized".to_string(),
        });
        discard_rejected_token(&tokens, &err);

        assert_eq!(token_store::load(&tokens).unwrap(), None);
    }

    #[test]
    fn test_token_survives_500() {
        let tokens = temp_token_config("keep-500");
        token_store::save(&tokens, "vigente").unwrap();

        let err = wrapped(ApiError::Server {
            status: Some(500),
            message: "Error del servidor".to_string(),
        });
        discard_rejected_token(&tokens, &err);

        assert_eq!(
            token_store::load(&tokens).unwrap(),
            Some("vigente".to_string())
        );
        token_store::clear(&tokens).unwrap();
    }

    #[test]
    fn test_token_survives_network_failure() {
        // A failure without a status is not a rejection of the token.
        let tokens = temp_token_config("keep-network");
        token_store::save(&tokens, "vigente").unwrap();

        let err = wrapped(ApiError::Server {
            status: None,
            message: "Error del servidor".to_string(),
        });
        discard_rejected_token(&tokens, &err);

        assert_eq!(
            token_store::load(&tokens).unwrap(),
            Some("vigente".to_string())
        );
        token_store::clear(&tokens).unwrap();
    }

    #[test]
    fn test_token_survives_validation_failure() {
        let tokens = temp_token_config("keep-validation");
        token_store::save(&tokens, "vigente").unwrap();

        let err = wrapped(ApiError::validation("Error al obtener el estudiante"));
        discard_rejected_token(&tokens, &err);

        assert_eq!(
            token_store::load(&tokens).unwrap(),
            Some("vigente".to_string())
        );
        token_store::clear(&tokens).unwrap();
    }

    #[test]
    fn test_non_api_error_is_ignored() {
        let tokens = temp_token_config("keep-other");
        token_store::save(&tokens, "vigente").unwrap();

        discard_rejected_token(&tokens, &anyhow::anyhow!("fallo local"));

        assert_eq!(
            token_store::load(&tokens).unwrap(),
            Some("vigente".to_string())
        );
        token_store::clear(&tokens).unwrap();
    }

    #[derive(Validate)]
    struct Dto {
        #[validate(length(min = 1, message = "names es requerido"))]
        names: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_format_validation_errors_uses_rule_message() {
        let dto = Dto {
            names: "".to_string(),
            email: "ok@uni.edu".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(format_validation_errors(&errors), "names es requerido");
    }

    #[test]
    fn test_format_validation_errors_falls_back_to_field_name() {
        let dto = Dto {
            names: "Juan".to_string(),
            email: "no-es-email".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(format_validation_errors(&errors), "email no es válido");
    }
}
