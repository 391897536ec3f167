//! Student models, homologation results, and report shapes.
//!
//! A student carries the subjects they approved under the old plan; the
//! backend computes which subjects of the new plan those map onto
//! (`subjectsToHomologate`) and which are still owed (`subjectsToView`).
//! The client never recomputes that mapping, it only renders it.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::plans::{Area, Plan};

/// Gender as the backend spells it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculino,
    Femenino,
    Otro,
}

/// A subject version as attached to a student, including the plan it
/// belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub semester: i64,
    pub credits: i64,
    pub plan: Plan,
    pub area: Area,
}

/// A registered student.
///
/// The three subject lists are only present on detail responses; list
/// responses omit them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub identification: String,
    pub email: String,
    pub names: String,
    pub last_names: String,
    pub semester: i64,
    pub city_residence: String,
    pub gender: Gender,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_subjects: Option<Vec<Subject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects_to_homologate: Option<Vec<Subject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects_to_view: Option<Vec<Subject>>,
}

/// The personal data block of a student, as sent on creation and echoed
/// back inside a homologation result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentData {
    #[validate(length(min = 1, max = 20, message = "identification es requerida"))]
    pub identification: String,
    #[validate(email(message = "email no es válido"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "names es requerido"))]
    pub names: String,
    #[validate(length(min = 1, max = 100, message = "lastNames es requerido"))]
    pub last_names: String,
    #[validate(range(min = 1, max = 12, message = "semester fuera de rango"))]
    pub semester: i64,
    #[validate(length(min = 1, max = 100, message = "cityResidence es requerida"))]
    pub city_residence: String,
    pub gender: Gender,
}

/// Reference to a subject version the student already approved.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedSubjectRef {
    pub approved_subject_version_id: i64,
}

/// DTO for registering a student together with their approved subjects.
#[derive(Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[validate(nested)]
    pub student_data: StudentData,
    pub approved_subjects: Vec<ApprovedSubjectRef>,
}

/// Partial personal data for an update. Only provided fields are sent.
#[derive(Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentData {
    #[validate(length(min = 1, max = 20))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<String>,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_names: Option<String>,
    #[validate(range(min = 1, max = 12))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<i64>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// DTO for updating a student and/or their approved subjects.
#[derive(Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_data: Option<UpdateStudentData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_subjects: Option<Vec<ApprovedSubjectRef>>,
}

/// The outcome of a homologation computation, as returned by create,
/// update, and the report endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomologationResult {
    pub message: String,
    pub student: StudentData,
    pub subjects_to_homologate: Vec<Subject>,
    pub subjects_to_view: Vec<Subject>,
}

/// The raw shape of `GET /student/{id}/report`, before it is folded into
/// a [`HomologationResult`].
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentReport {
    pub id: String,
    pub identification: String,
    pub email: String,
    pub names: String,
    pub last_names: String,
    pub semester: i64,
    pub city_residence: String,
    pub gender: Gender,
    pub created_at: String,
    pub updated_at: String,
    pub subjects_to_homologate: Vec<Subject>,
    pub subjects_to_view: Vec<Subject>,
}

impl StudentReport {
    /// Folds the report into the common result shape so every screen that
    /// renders a homologation outcome consumes a single type.
    pub fn into_result(self, message: impl Into<String>) -> HomologationResult {
        HomologationResult {
            message: message.into(),
            student: StudentData {
                identification: self.identification,
                email: self.email,
                names: self.names,
                last_names: self.last_names,
                semester: self.semester,
                city_residence: self.city_residence,
                gender: self.gender,
            },
            subjects_to_homologate: self.subjects_to_homologate,
            subjects_to_view: self.subjects_to_view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_subject(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Cálculo I",
            "code": "MAT101",
            "semester": 1,
            "credits": 4,
            "plan": {
                "id": 2,
                "name": "Plan 2025",
                "startDate": "2025-01-01",
                "endDate": null
            },
            "area": { "id": 1, "name": "Matemáticas" }
        })
    }

    fn wire_student() -> serde_json::Value {
        json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "identification": "1085312345",
            "email": "jdoe@uni.edu",
            "names": "Juan",
            "lastNames": "Doe Gómez",
            "semester": 5,
            "cityResidence": "Pasto",
            "gender": "Masculino",
            "createdAt": "2025-02-01T10:00:00.000Z",
            "updatedAt": "2025-02-01T10:00:00.000Z"
        })
    }

    fn valid_student_data() -> StudentData {
        StudentData {
            identification: "1085312345".to_string(),
            email: "jdoe@uni.edu".to_string(),
            names: "Juan".to_string(),
            last_names: "Doe Gómez".to_string(),
            semester: 5,
            city_residence: "Pasto".to_string(),
            gender: Gender::Masculino,
        }
    }

    #[test]
    fn test_student_list_shape_without_subject_arrays() {
        let student: Student = serde_json::from_value(wire_student()).unwrap();
        assert_eq!(student.names, "Juan");
        assert_eq!(student.gender, Gender::Masculino);
        assert!(student.approved_subjects.is_none());
        assert!(student.subjects_to_homologate.is_none());
    }

    #[test]
    fn test_student_detail_shape_with_subject_arrays() {
        let mut body = wire_student();
        body["approvedSubjects"] = json!([wire_subject(10)]);
        body["subjectsToHomologate"] = json!([wire_subject(11)]);
        body["subjectsToView"] = json!([wire_subject(12)]);

        let student: Student = serde_json::from_value(body).unwrap();
        assert_eq!(student.approved_subjects.unwrap().len(), 1);
        assert_eq!(student.subjects_to_view.unwrap()[0].id, 12);
    }

    #[test]
    fn test_student_rejects_unknown_gender() {
        let mut body = wire_student();
        body["gender"] = json!("N/A");
        assert!(serde_json::from_value::<Student>(body).is_err());
    }

    #[test]
    fn test_create_student_dto_serializes_camel_case() {
        let dto = CreateStudentDto {
            student_data: valid_student_data(),
            approved_subjects: vec![ApprovedSubjectRef {
                approved_subject_version_id: 42,
            }],
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["studentData"]["lastNames"], "Doe Gómez");
        assert_eq!(value["studentData"]["cityResidence"], "Pasto");
        assert_eq!(
            value["approvedSubjects"][0]["approvedSubjectVersionId"],
            42
        );
    }

    #[test]
    fn test_create_student_dto_validates_nested_data() {
        let mut data = valid_student_data();
        data.email = "no-es-un-email".to_string();
        let dto = CreateStudentDto {
            student_data: data,
            approved_subjects: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_student_data_semester_out_of_range() {
        let mut data = valid_student_data();
        data.semester = 0;
        assert!(data.validate().is_err());
        data.semester = 13;
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_update_student_dto_skips_missing_fields() {
        let dto = UpdateStudentDto {
            student_data: Some(UpdateStudentData {
                semester: Some(6),
                ..Default::default()
            }),
            approved_subjects: None,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value, json!({ "studentData": { "semester": 6 } }));
    }

    #[test]
    fn test_homologation_result_deserializes() {
        let body = json!({
            "message": "Estudiante creado exitosamente",
            "student": {
                "identification": "1085312345",
                "email": "jdoe@uni.edu",
                "names": "Juan",
                "lastNames": "Doe Gómez",
                "semester": 5,
                "cityResidence": "Pasto",
                "gender": "Masculino"
            },
            "subjectsToHomologate": [wire_subject(11)],
            "subjectsToView": []
        });
        let result: HomologationResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.student.names, "Juan");
        assert_eq!(result.subjects_to_homologate.len(), 1);
        assert!(result.subjects_to_view.is_empty());
    }

    #[test]
    fn test_report_folds_into_result() {
        let mut body = wire_student();
        body["subjectsToHomologate"] = json!([wire_subject(11)]);
        body["subjectsToView"] = json!([wire_subject(12)]);

        let report: StudentReport = serde_json::from_value(body).unwrap();
        let result = report.into_result("Reporte obtenido exitosamente");

        assert_eq!(result.message, "Reporte obtenido exitosamente");
        assert_eq!(result.student.identification, "1085312345");
        assert_eq!(result.subjects_to_homologate[0].id, 11);
        assert_eq!(result.subjects_to_view[0].id, 12);
    }

    #[test]
    fn test_report_requires_subject_arrays() {
        // Unlike the detail shape, the report shape requires both lists.
        let report = wire_student();
        assert!(serde_json::from_value::<StudentReport>(report).is_err());
    }
}
