//! Academic plan models for the old/new plan overview.

use serde::{Deserialize, Serialize};

/// A knowledge area a subject belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub id: i64,
    pub name: String,
}

/// An academic plan. An open-ended plan has no `endDate`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// A subject as listed inside a plan overview.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlanSubject {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub semester: i64,
    pub credits: i64,
    pub area: Area,
}

/// One plan together with its subjects and the subject count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlanWithSubjects {
    pub plan: Plan,
    pub subjects: Vec<PlanSubject>,
    pub quantity: i64,
}

/// The full `GET /plan` response: the plan being phased out and its
/// replacement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlansOverview {
    pub old_plan: PlanWithSubjects,
    pub new_plan: PlanWithSubjects,
}
