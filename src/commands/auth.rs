//! Session commands: login, logout, profile.

use anyhow::anyhow;
use dialoguer::{Input, Password};
use homologa_client::{HttpClient, Session};
use homologa_config::TokenConfig;
use homologa_models::auth::LoginPayload;
use validator::Validate;

use crate::commands::format_validation_errors;
use crate::token_store;

pub async fn login(
    http: &HttpClient,
    tokens: &TokenConfig,
    user_name: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let user_name = match user_name {
        Some(value) => value,
        None => Input::new().with_prompt("Usuario").interact_text()?,
    };
    let password = match password {
        Some(value) => value,
        None => Password::new().with_prompt("Contraseña").interact()?,
    };

    let payload = LoginPayload {
        user_name,
        password,
    };
    payload
        .validate()
        .map_err(|errors| anyhow!(format_validation_errors(&errors)))?;

    let session = Session::establish(http, &payload).await?;
    token_store::save(tokens, session.token())?;

    let profile = session.profile();
    println!(
        "Sesión iniciada como {} ({})",
        profile.full_name, profile.role
    );
    Ok(())
}

/// Cierra la sesión sin tocar la red: el backend no mantiene estado de
/// sesión, así que basta con descartar el token local.
pub fn logout(http: &HttpClient, tokens: &TokenConfig) -> anyhow::Result<()> {
    http.clear_token();
    token_store::clear(tokens)?;
    println!("Sesión cerrada");
    Ok(())
}

pub async fn profile(http: &HttpClient, tokens: &TokenConfig) -> anyhow::Result<()> {
    let token = token_store::load(tokens)?
        .ok_or_else(|| anyhow!("No hay sesión activa. Inicie sesión primero."))?;
    let session = Session::resume(http, token).await?;
    let profile = session.profile();

    println!("id:      {}", profile.id);
    println!("nombre:  {}", profile.full_name);
    println!("usuario: {}", profile.user_name);
    println!("rol:     {}", profile.role);
    Ok(())
}
