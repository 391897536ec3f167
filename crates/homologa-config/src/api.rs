use std::env;

/// Connection settings for the homologation backend.
///
/// - `HOMOLOGA_API_URL`: base URL of the REST API (default: `http://localhost:3000`)
/// - `HOMOLOGA_TIMEOUT_SECS`: per-request timeout in seconds (default: 30)
///
/// The timeout lives here, on the transport configuration, not in the
/// request pipeline: a single value applies to every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env::var("HOMOLOGA_API_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.base_url);

        let timeout_secs = env::var("HOMOLOGA_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        Self {
            base_url,
            timeout_secs,
        }
    }
}
