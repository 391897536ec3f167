//! Command-line surface of the homologa tool.

use clap::{Args, Parser, Subcommand};
use homologa_client::HttpClient;
use homologa_config::{ApiConfig, TokenConfig};
use homologa_models::students::Gender;
use homologa_models::users::UserRole;

use crate::commands;

#[derive(Parser)]
#[command(name = "homologa")]
#[command(about = "Herramientas administrativas del simulador de homologación", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Iniciar sesión y guardar el token
    Login {
        /// Nombre de usuario
        #[arg(short = 'u', long)]
        user_name: Option<String>,

        /// Contraseña (se pedirá de forma segura si no se indica)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Cerrar la sesión y borrar el token guardado
    Logout,
    /// Mostrar el perfil de la sesión actual
    Profile,
    /// Gestión de estudiantes
    #[command(subcommand)]
    Student(StudentCommands),
    /// Gestión de usuarios del sistema
    #[command(subcommand)]
    User(UserCommands),
    /// Planes académicos
    #[command(subcommand)]
    Plan(PlanCommands),
    /// Generar un reporte de homologación sin cuenta (endpoint público)
    Report(StudentInput),
}

/// Filtering and pagination over an in-memory listing.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Filtro por subcadena, sin distinguir mayúsculas
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Página (empezando en 1)
    #[arg(long)]
    pub page: Option<usize>,

    /// Filas por página (1-100)
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Personal data plus approved subjects, as required by the registration
/// and public-report endpoints.
#[derive(Args, Debug, Clone)]
pub struct StudentInput {
    /// Documento de identidad
    #[arg(long)]
    pub identification: String,

    /// Correo electrónico
    #[arg(long)]
    pub email: String,

    /// Nombres
    #[arg(long)]
    pub names: String,

    /// Apellidos
    #[arg(long)]
    pub last_names: String,

    /// Semestre actual (1-12)
    #[arg(long)]
    pub semester: i64,

    /// Ciudad de residencia
    #[arg(long)]
    pub city: String,

    /// Género: Masculino, Femenino u Otro
    #[arg(long, value_parser = parse_gender)]
    pub gender: Gender,

    /// Id de versión de materia aprobada (repetible)
    #[arg(long = "subject")]
    pub subjects: Vec<i64>,
}

#[derive(Subcommand)]
pub enum StudentCommands {
    /// Listar estudiantes
    List(ListArgs),
    /// Mostrar un estudiante con sus materias
    Show { id: String },
    /// Registrar un estudiante y calcular su homologación
    Create(StudentInput),
    /// Actualizar un estudiante y recalcular su homologación
    Update {
        id: String,

        #[arg(long)]
        identification: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        names: Option<String>,

        #[arg(long)]
        last_names: Option<String>,

        #[arg(long)]
        semester: Option<i64>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        telephone: Option<String>,

        #[arg(long, value_parser = parse_gender)]
        gender: Option<Gender>,

        /// Reemplaza la lista de materias aprobadas (repetible)
        #[arg(long = "subject")]
        subjects: Option<Vec<i64>>,
    },
    /// Eliminar un estudiante
    Delete { id: String },
    /// Obtener el reporte de homologación de un estudiante
    Report { id: String },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Listar usuarios
    List(ListArgs),
    /// Mostrar un usuario
    Show { id: String },
    /// Crear un usuario
    Create {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        user_name: String,

        #[arg(long)]
        email: String,

        /// Rol: admin o normal
        #[arg(long, value_parser = parse_role)]
        role: UserRole,

        /// Contraseña (se pedirá de forma segura si no se indica)
        #[arg(long)]
        password: Option<String>,
    },
    /// Actualizar un usuario
    Update {
        id: String,

        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        user_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, value_parser = parse_role)]
        role: Option<UserRole>,
    },
    /// Eliminar un usuario
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Mostrar el plan antiguo y el nuevo con sus materias
    List,
}

pub fn parse_gender(s: &str) -> Result<Gender, String> {
    match s {
        "Masculino" => Ok(Gender::Masculino),
        "Femenino" => Ok(Gender::Femenino),
        "Otro" => Ok(Gender::Otro),
        _ => Err(format!(
            "género inválido '{s}' (valores: Masculino, Femenino, Otro)"
        )),
    }
}

pub fn parse_role(s: &str) -> Result<UserRole, String> {
    match s {
        "admin" => Ok(UserRole::Admin),
        "normal" => Ok(UserRole::Normal),
        _ => Err(format!("rol inválido '{s}' (valores: admin, normal)")),
    }
}

/// Builds the shared transport and dispatches one command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let api_config = ApiConfig::from_env();
    let token_config = TokenConfig::from_env();
    tracing::debug!(base_url = %api_config.base_url, "configuración cargada");
    let http = HttpClient::new(&api_config)?;

    let result = match cli.command {
        Commands::Login {
            user_name,
            password,
        } => commands::auth::login(&http, &token_config, user_name, password).await,
        Commands::Logout => commands::auth::logout(&http, &token_config),
        Commands::Profile => commands::auth::profile(&http, &token_config).await,
        Commands::Student(command) => commands::students::run(&http, &token_config, command).await,
        Commands::User(command) => commands::users::run(&http, &token_config, command).await,
        Commands::Plan(command) => commands::plans::run(&http, &token_config, command).await,
        Commands::Report(input) => commands::students::public_report(&http, input).await,
    };

    if let Err(err) = &result {
        commands::discard_rejected_token(&token_config, err);
    }
    result
}
