//! Academic plan commands.

use homologa_client::HttpClient;
use homologa_client::services::plans::PlanService;
use homologa_config::TokenConfig;
use homologa_models::plans::PlanWithSubjects;

use crate::cli::PlanCommands;
use crate::commands::attach_token;
use crate::output::print_table;

pub async fn run(
    http: &HttpClient,
    tokens: &TokenConfig,
    command: PlanCommands,
) -> anyhow::Result<()> {
    attach_token(http, tokens)?;

    match command {
        PlanCommands::List => list(http).await,
    }
}

async fn list(http: &HttpClient) -> anyhow::Result<()> {
    let overview = PlanService::list(http).await?;

    println!("Plan antiguo");
    print_plan(&overview.old_plan);
    println!("\nPlan nuevo");
    print_plan(&overview.new_plan);
    Ok(())
}

fn print_plan(plan: &PlanWithSubjects) {
    let end_date = plan.plan.end_date.as_deref().unwrap_or("vigente");
    println!(
        "{} ({} - {}), {} materias",
        plan.plan.name, plan.plan.start_date, end_date, plan.quantity
    );

    let rows: Vec<Vec<String>> = plan
        .subjects
        .iter()
        .map(|subject| {
            vec![
                subject.code.clone(),
                subject.name.clone(),
                subject.semester.to_string(),
                subject.credits.to_string(),
                subject.area.name.clone(),
            ]
        })
        .collect();
    print_table(&["código", "materia", "semestre", "créditos", "área"], &rows);
}
