//! Transport adapter over `reqwest`.
//!
//! The only module that touches the wire. Every failure leaving this module
//! is a fully-populated [`TransportError`]: an HTTP error response carries
//! its status and the optional `message` field from the body; a failure with
//! no response carries neither. Nothing downstream ever inspects a raw
//! `reqwest` error.
//!
//! The bearer token is held on the client and attached to every
//! authenticated call. A 401 response clears it before the error
//! propagates, the session is over at that point.

use std::sync::RwLock;
use std::time::{Duration, Instant};

use anyhow::{Context, anyhow};
use homologa_config::ApiConfig;
use homologa_core::TransportError;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};
use url::Url;

/// HTTP client bound to one backend base URL.
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpClient {
    /// Builds a client from transport configuration.
    ///
    /// The per-request timeout is enforced here; nothing further up the
    /// pipeline imposes one.
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        Url::parse(&config.base_url)
            .with_context(|| format!("invalid backend URL: {}", config.base_url))?;

        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Installs the bearer token attached to authenticated calls.
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }

    /// Drops the bearer token; subsequent calls go out unauthenticated.
    pub fn clear_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    /// Whether a bearer token is currently installed.
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    pub async fn get(&self, path: &str) -> Result<Value, TransportError> {
        let response = self.send(Method::GET, path, None, true).await?;
        Self::json_body(response).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let body = Self::to_json(body)?;
        let response = self.send(Method::POST, path, Some(body), true).await?;
        Self::json_body(response).await
    }

    /// POST without the bearer token, for the endpoints that exist before a
    /// session does (login, public report).
    pub async fn post_public<B>(&self, path: &str, body: &B) -> Result<Value, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let body = Self::to_json(body)?;
        let response = self.send(Method::POST, path, Some(body), false).await?;
        Self::json_body(response).await
    }

    pub async fn patch<B>(&self, path: &str, body: &B) -> Result<Value, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let body = Self::to_json(body)?;
        let response = self.send(Method::PATCH, path, Some(body), true).await?;
        Self::json_body(response).await
    }

    /// POST whose success body is plain text rather than JSON.
    pub async fn post_text<B>(&self, path: &str, body: &B) -> Result<String, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let body = Self::to_json(body)?;
        let response = self.send(Method::POST, path, Some(body), true).await?;
        Self::text_body(response).await
    }

    /// PATCH whose success body is plain text rather than JSON.
    pub async fn patch_text<B>(&self, path: &str, body: &B) -> Result<String, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let body = Self::to_json(body)?;
        let response = self.send(Method::PATCH, path, Some(body), true).await?;
        Self::text_body(response).await
    }

    /// DELETE; the backend answers these with a plain-text confirmation.
    pub async fn delete_text(&self, path: &str) -> Result<String, TransportError> {
        let response = self.send(Method::DELETE, path, None, true).await?;
        Self::text_body(response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        with_auth: bool,
    ) -> Result<reqwest::Response, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        let start = Instant::now();

        let mut request = self.inner.request(method.clone(), &url);
        if with_auth {
            if let Some(token) = self.current_token() {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|err| {
            warn!(method = %method, path, error = %err, "request failed without a response");
            TransportError::network(err.into())
        })?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis();

        if status.is_success() {
            debug!(
                method = %method,
                path,
                status = status.as_u16(),
                latency_ms,
                "request completed"
            );
            return Ok(response);
        }

        let code = status.as_u16();
        let text = response.text().await.unwrap_or_default();
        let server_message = extract_message(&text);

        if code == 401 {
            warn!(path, "token rejected, clearing session");
            self.clear_token();
        }

        match code {
            400..=499 => warn!(
                method = %method,
                path,
                status = code,
                latency_ms,
                "client error"
            ),
            _ => error!(
                method = %method,
                path,
                status = code,
                latency_ms,
                "server error"
            ),
        }

        Err(TransportError::status(
            code,
            server_message,
            anyhow!("HTTP {code} from {method} {path}"),
        ))
    }

    fn to_json<B>(body: &B) -> Result<Value, TransportError>
    where
        B: Serialize + ?Sized,
    {
        serde_json::to_value(body).map_err(|err| TransportError::other(err.into()))
    }

    async fn json_body(response: reqwest::Response) -> Result<Value, TransportError> {
        let text = response
            .text()
            .await
            .map_err(|err| TransportError::network(err.into()))?;
        // Non-JSON 2xx bodies surface as a string value and fail schema
        // validation downstream instead of being a transport error.
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    async fn text_body(response: reqwest::Response) -> Result<String, TransportError> {
        let text = response
            .text()
            .await
            .map_err(|err| TransportError::network(err.into()))?;
        // Some endpoints answer with a JSON-encoded string; unwrap it so the
        // caller always gets the bare confirmation text.
        Ok(match serde_json::from_str::<Value>(&text) {
            Ok(Value::String(inner)) => inner,
            _ => text,
        })
    }
}

/// Pulls the `message` string out of an error body, if the body is JSON and
/// carries one.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
