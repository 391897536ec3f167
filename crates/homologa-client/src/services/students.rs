//! Student endpoints, including the homologation report.

use homologa_core::ApiError;
use homologa_models::students::{
    CreateStudentDto, HomologationResult, Student, StudentReport, UpdateStudentDto,
};

use crate::fetch::{fetch_and_validate, validate};
use crate::http::HttpClient;

pub struct StudentService;

impl StudentService {
    /// `GET /student`.
    pub async fn list(http: &HttpClient) -> Result<Vec<Student>, ApiError> {
        fetch_and_validate(
            || http.get("/student"),
            "Error al obtener la lista de estudiantes",
        )
        .await
    }

    /// `GET /student/{id}`.
    pub async fn get(http: &HttpClient, id: &str) -> Result<Student, ApiError> {
        let path = format!("/student/{id}");
        fetch_and_validate(|| http.get(&path), "Error al obtener el estudiante").await
    }

    /// `POST /student`. The backend computes the homologation as part of
    /// registration and returns the result.
    pub async fn create(
        http: &HttpClient,
        dto: &CreateStudentDto,
    ) -> Result<HomologationResult, ApiError> {
        fetch_and_validate(
            || http.post("/student", dto),
            "Error al crear el estudiante",
        )
        .await
    }

    /// `PATCH /student/{id}`. Returns the recomputed homologation.
    pub async fn update(
        http: &HttpClient,
        id: &str,
        dto: &UpdateStudentDto,
    ) -> Result<HomologationResult, ApiError> {
        let path = format!("/student/{id}");
        fetch_and_validate(
            || http.patch(&path, dto),
            "Error al actualizar el estudiante",
        )
        .await
    }

    /// `DELETE /student/{id}`. The body is a plain-text confirmation.
    pub async fn delete(http: &HttpClient, id: &str) -> Result<String, ApiError> {
        http.delete_text(&format!("/student/{id}"))
            .await
            .map_err(ApiError::from)
    }

    /// `GET /student/{id}/report`, folded into the common result shape.
    pub async fn report(http: &HttpClient, id: &str) -> Result<HomologationResult, ApiError> {
        let body = http
            .get(&format!("/student/{id}/report"))
            .await
            .map_err(ApiError::from)?;
        let report: StudentReport = validate(body, "Formato de respuesta inválido")?;
        Ok(report.into_result("Reporte obtenido exitosamente"))
    }

    /// `POST /student/report`: the public homologation simulation, no
    /// account required. Nothing is persisted server-side.
    pub async fn public_report(
        http: &HttpClient,
        dto: &CreateStudentDto,
    ) -> Result<HomologationResult, ApiError> {
        fetch_and_validate(
            || http.post_public("/student/report", dto),
            "Error al generar el reporte",
        )
        .await
    }
}
