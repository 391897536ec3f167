//! Student commands.

use anyhow::anyhow;
use homologa_client::HttpClient;
use homologa_client::services::students::StudentService;
use homologa_config::TokenConfig;
use homologa_core::filter::apply_filter;
use homologa_core::pagination::PageParams;
use homologa_models::students::{
    ApprovedSubjectRef, CreateStudentDto, Gender, HomologationResult, Student, StudentData,
    Subject, UpdateStudentData, UpdateStudentDto,
};
use validator::Validate;

use crate::cli::{ListArgs, StudentCommands, StudentInput};
use crate::commands::{attach_token, format_validation_errors};
use crate::output::{print_page_footer, print_table};

pub async fn run(
    http: &HttpClient,
    tokens: &TokenConfig,
    command: StudentCommands,
) -> anyhow::Result<()> {
    attach_token(http, tokens)?;

    match command {
        StudentCommands::List(args) => list(http, args).await,
        StudentCommands::Show { id } => show(http, &id).await,
        StudentCommands::Create(input) => create(http, input).await,
        StudentCommands::Update {
            id,
            identification,
            email,
            names,
            last_names,
            semester,
            city,
            address,
            telephone,
            gender,
            subjects,
        } => {
            let dto = build_update_dto(
                identification,
                email,
                names,
                last_names,
                semester,
                city,
                address,
                telephone,
                gender,
                subjects,
            )?;
            update(http, &id, dto).await
        }
        StudentCommands::Delete { id } => delete(http, &id).await,
        StudentCommands::Report { id } => report(http, &id).await,
    }
}

async fn list(http: &HttpClient, args: ListArgs) -> anyhow::Result<()> {
    let students = StudentService::list(http).await?;

    let needle = args.filter.unwrap_or_default();
    let visible = apply_filter(&students, &needle, |student: &Student| {
        vec![
            student.identification.clone(),
            student.names.clone(),
            student.last_names.clone(),
            student.email.clone(),
            student.city_residence.clone(),
        ]
    });

    let rows: Vec<Vec<String>> = visible
        .iter()
        .map(|student| {
            vec![
                student.id.clone(),
                student.identification.clone(),
                format!("{} {}", student.names, student.last_names),
                student.email.clone(),
                student.semester.to_string(),
                student.city_residence.clone(),
            ]
        })
        .collect();

    let view = PageParams::new(args.page, args.limit).slice(&rows);
    print_table(
        &["id", "identificación", "nombre", "email", "semestre", "ciudad"],
        &view.items,
    );
    print_page_footer(&view);
    Ok(())
}

async fn show(http: &HttpClient, id: &str) -> anyhow::Result<()> {
    let student = StudentService::get(http, id).await?;

    println!("id:             {}", student.id);
    println!("identificación: {}", student.identification);
    println!("nombre:         {} {}", student.names, student.last_names);
    println!("email:          {}", student.email);
    println!("semestre:       {}", student.semester);
    println!("ciudad:         {}", student.city_residence);
    println!("género:         {}", gender_label(student.gender));

    if let Some(subjects) = &student.approved_subjects {
        println!("\nMaterias aprobadas:");
        print_subjects(subjects);
    }
    if let Some(subjects) = &student.subjects_to_homologate {
        println!("\nMaterias a homologar:");
        print_subjects(subjects);
    }
    if let Some(subjects) = &student.subjects_to_view {
        println!("\nMaterias por ver:");
        print_subjects(subjects);
    }
    Ok(())
}

async fn create(http: &HttpClient, input: StudentInput) -> anyhow::Result<()> {
    let dto = build_create_dto(input)?;
    let result = StudentService::create(http, &dto).await?;
    print_result(&result);
    Ok(())
}

async fn update(http: &HttpClient, id: &str, dto: UpdateStudentDto) -> anyhow::Result<()> {
    let result = StudentService::update(http, id, &dto).await?;
    print_result(&result);
    Ok(())
}

async fn delete(http: &HttpClient, id: &str) -> anyhow::Result<()> {
    let message = StudentService::delete(http, id).await?;
    println!("{message}");
    Ok(())
}

async fn report(http: &HttpClient, id: &str) -> anyhow::Result<()> {
    let result = StudentService::report(http, id).await?;
    print_result(&result);
    Ok(())
}

/// The public simulation: no session required.
pub async fn public_report(http: &HttpClient, input: StudentInput) -> anyhow::Result<()> {
    let dto = build_create_dto(input)?;
    let result = StudentService::public_report(http, &dto).await?;
    print_result(&result);
    Ok(())
}

fn build_create_dto(input: StudentInput) -> anyhow::Result<CreateStudentDto> {
    let dto = CreateStudentDto {
        student_data: StudentData {
            identification: input.identification,
            email: input.email,
            names: input.names,
            last_names: input.last_names,
            semester: input.semester,
            city_residence: input.city,
            gender: input.gender,
        },
        approved_subjects: input
            .subjects
            .into_iter()
            .map(|id| ApprovedSubjectRef {
                approved_subject_version_id: id,
            })
            .collect(),
    };
    dto.validate()
        .map_err(|errors| anyhow!(format_validation_errors(&errors)))?;
    Ok(dto)
}

#[allow(clippy::too_many_arguments)]
fn build_update_dto(
    identification: Option<String>,
    email: Option<String>,
    names: Option<String>,
    last_names: Option<String>,
    semester: Option<i64>,
    city: Option<String>,
    address: Option<String>,
    telephone: Option<String>,
    gender: Option<Gender>,
    subjects: Option<Vec<i64>>,
) -> anyhow::Result<UpdateStudentDto> {
    let student_data = UpdateStudentData {
        identification,
        email,
        names,
        last_names,
        semester,
        city_residence: city,
        address,
        telephone,
        gender,
    };

    // An untouched data block stays off the wire entirely.
    let has_data = serde_json::to_value(&student_data)
        .map(|value| value.as_object().is_some_and(|obj| !obj.is_empty()))
        .unwrap_or(false);

    let dto = UpdateStudentDto {
        student_data: has_data.then_some(student_data),
        approved_subjects: subjects.map(|ids| {
            ids.into_iter()
                .map(|id| ApprovedSubjectRef {
                    approved_subject_version_id: id,
                })
                .collect()
        }),
    };
    dto.validate()
        .map_err(|errors| anyhow!(format_validation_errors(&errors)))?;
    Ok(dto)
}

fn print_result(result: &HomologationResult) {
    println!("{}", result.message);
    println!(
        "\nEstudiante: {} {} ({})",
        result.student.names, result.student.last_names, result.student.identification
    );

    println!("\nMaterias a homologar:");
    print_subjects(&result.subjects_to_homologate);
    println!("\nMaterias por ver:");
    print_subjects(&result.subjects_to_view);
}

fn print_subjects(subjects: &[Subject]) {
    if subjects.is_empty() {
        println!("(ninguna)");
        return;
    }
    let rows: Vec<Vec<String>> = subjects
        .iter()
        .map(|subject| {
            vec![
                subject.code.clone(),
                subject.name.clone(),
                subject.semester.to_string(),
                subject.credits.to_string(),
                subject.plan.name.clone(),
                subject.area.name.clone(),
            ]
        })
        .collect();
    print_table(
        &["código", "materia", "semestre", "créditos", "plan", "área"],
        &rows,
    );
}

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Masculino => "Masculino",
        Gender::Femenino => "Femenino",
        Gender::Otro => "Otro",
    }
}
