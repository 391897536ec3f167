//! Academic plan endpoints.

use homologa_core::ApiError;
use homologa_models::plans::PlansOverview;

use crate::fetch::fetch_and_validate;
use crate::http::HttpClient;

pub struct PlanService;

impl PlanService {
    /// `GET /plan`: both plans with their subjects.
    pub async fn list(http: &HttpClient) -> Result<PlansOverview, ApiError> {
        fetch_and_validate(|| http.get("/plan"), "Error al obtener los planes").await
    }
}
