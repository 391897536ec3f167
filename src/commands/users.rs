//! Staff user commands.

use anyhow::anyhow;
use dialoguer::Password;
use homologa_client::HttpClient;
use homologa_client::services::users::UserService;
use homologa_config::TokenConfig;
use homologa_core::filter::apply_filter;
use homologa_core::pagination::PageParams;
use homologa_models::users::{CreateUserDto, UpdateUserDto, User, UserRole};
use validator::Validate;

use crate::cli::{ListArgs, UserCommands};
use crate::commands::{attach_token, format_validation_errors};
use crate::output::{print_page_footer, print_table};

pub async fn run(
    http: &HttpClient,
    tokens: &TokenConfig,
    command: UserCommands,
) -> anyhow::Result<()> {
    attach_token(http, tokens)?;

    match command {
        UserCommands::List(args) => list(http, args).await,
        UserCommands::Show { id } => show(http, &id).await,
        UserCommands::Create {
            full_name,
            user_name,
            email,
            role,
            password,
        } => create(http, full_name, user_name, email, role, password).await,
        UserCommands::Update {
            id,
            full_name,
            user_name,
            email,
            role,
        } => update(http, &id, full_name, user_name, email, role).await,
        UserCommands::Delete { id } => delete(http, &id).await,
    }
}

async fn list(http: &HttpClient, args: ListArgs) -> anyhow::Result<()> {
    let users = UserService::list(http).await?;

    let needle = args.filter.unwrap_or_default();
    let visible = apply_filter(&users, &needle, |user: &User| {
        vec![
            user.full_name.clone(),
            user.user_name.clone(),
            user.email.clone(),
        ]
    });

    let rows: Vec<Vec<String>> = visible
        .iter()
        .map(|user| {
            vec![
                user.id.clone(),
                user.full_name.clone(),
                user.user_name.clone(),
                user.email.clone(),
                role_label(user.role).to_string(),
                active_label(user.is_active).to_string(),
            ]
        })
        .collect();

    let view = PageParams::new(args.page, args.limit).slice(&rows);
    print_table(
        &["id", "nombre", "usuario", "email", "rol", "activo"],
        &view.items,
    );
    print_page_footer(&view);
    Ok(())
}

async fn show(http: &HttpClient, id: &str) -> anyhow::Result<()> {
    let user = UserService::get(http, id).await?;

    println!("id:      {}", user.id);
    println!("nombre:  {}", user.full_name);
    println!("usuario: {}", user.user_name);
    println!("email:   {}", user.email);
    println!("rol:     {}", role_label(user.role));
    println!("activo:  {}", active_label(user.is_active));
    println!("creado:  {}", user.created_at);
    Ok(())
}

async fn create(
    http: &HttpClient,
    full_name: String,
    user_name: String,
    email: String,
    role: UserRole,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = match password {
        Some(value) => value,
        None => Password::new()
            .with_prompt("Contraseña")
            .with_confirmation("Confirmar contraseña", "Las contraseñas no coinciden")
            .interact()?,
    };

    let dto = CreateUserDto {
        full_name,
        user_name,
        password,
        email,
        role,
    };
    dto.validate()
        .map_err(|errors| anyhow!(format_validation_errors(&errors)))?;

    let message = UserService::create(http, &dto).await?;
    println!("{message}");
    Ok(())
}

async fn update(
    http: &HttpClient,
    id: &str,
    full_name: Option<String>,
    user_name: Option<String>,
    email: Option<String>,
    role: Option<UserRole>,
) -> anyhow::Result<()> {
    let dto = UpdateUserDto {
        full_name,
        user_name,
        email,
        role,
    };
    dto.validate()
        .map_err(|errors| anyhow!(format_validation_errors(&errors)))?;

    let message = UserService::update(http, id, &dto).await?;
    println!("{message}");
    Ok(())
}

async fn delete(http: &HttpClient, id: &str) -> anyhow::Result<()> {
    let message = UserService::delete(http, id).await?;
    println!("{message}");
    Ok(())
}

fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Normal => "normal",
    }
}

fn active_label(is_active: bool) -> &'static str {
    if is_active { "sí" } else { "no" }
}
