//! HTTP implementation of [`UrlApi`] on top of ureq
//!
//! ureq is blocking, so every call runs inside `spawn_blocking`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use ureq::Agent;
use ureq::http::Response;

use super::UrlApi;
use crate::config::ApiConfig;
use crate::errors::{LinkdeckError, Result};
use crate::structs::{ApiErrorBody, ShortenRequest, ShortenResponse, UrlEntry};

/// REST client for `{base_url}{base_path}`
#[derive(Clone)]
pub struct HttpUrlApi {
    agent: Agent,
    endpoint: String,
}

impl HttpUrlApi {
    /// Create a client for an endpoint root such as `http://localhost:8080/api/v1`
    pub fn new(endpoint: impl Into<String>) -> Self {
        // Non-2xx responses are read and mapped here instead of surfacing as
        // transport errors, so the server message survives.
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }

    fn list_sync(agent: Agent, url: String) -> Result<Vec<UrlEntry>> {
        debug!("GET {}", url);
        let resp = agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(transport_error)?;
        read_json(ensure_success(resp)?)
    }

    fn create_sync(agent: Agent, url: String, request: ShortenRequest) -> Result<ShortenResponse> {
        debug!("POST {} original_url={}", url, request.original_url);
        let resp = agent
            .post(&url)
            .header("Accept", "application/json")
            .send_json(&request)
            .map_err(transport_error)?;
        read_json(ensure_success(resp)?)
    }

    fn remove_sync(agent: Agent, url: String) -> Result<()> {
        debug!("DELETE {}", url);
        let resp = agent.delete(&url).call().map_err(transport_error)?;
        ensure_success(resp)?;
        Ok(())
    }
}

#[async_trait]
impl UrlApi for HttpUrlApi {
    async fn list(&self) -> Result<Vec<UrlEntry>> {
        let agent = self.agent.clone();
        let url = self.url("urls");
        let urls = tokio::task::spawn_blocking(move || Self::list_sync(agent, url)).await??;
        debug!("Fetched {} shortened URLs", urls.len());
        Ok(urls)
    }

    async fn create(&self, request: ShortenRequest) -> Result<ShortenResponse> {
        let agent = self.agent.clone();
        let url = self.url("shorten");
        let created =
            tokio::task::spawn_blocking(move || Self::create_sync(agent, url, request)).await??;
        info!("URL shortened. alias={}", created.alias);
        Ok(created)
    }

    async fn remove(&self, alias: &str) -> Result<()> {
        let agent = self.agent.clone();
        let url = self.url(&urlencoding::encode(alias));
        tokio::task::spawn_blocking(move || Self::remove_sync(agent, url)).await??;
        info!("URL deleted. alias={}", alias);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}

fn transport_error(err: ureq::Error) -> LinkdeckError {
    warn!("Request did not complete: {}", err);
    LinkdeckError::network(err.to_string())
}

/// Map a non-2xx response to [`LinkdeckError::Api`], preferring the
/// server's `message` field.
fn ensure_success(mut resp: Response<ureq::Body>) -> Result<Response<ureq::Body>> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let code = status.as_u16();
    let body = resp.body_mut().read_to_string().unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", code));

    warn!("Backend answered {}: {}", code, message);
    Err(LinkdeckError::api(code, message))
}

fn read_json<T: DeserializeOwned>(mut resp: Response<ureq::Body>) -> Result<T> {
    let body = resp
        .body_mut()
        .read_to_string()
        .map_err(|e| LinkdeckError::network(e.to_string()))?;
    serde_json::from_str(&body).map_err(LinkdeckError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let api = HttpUrlApi::new("http://localhost:8080/api/v1/");
        assert_eq!(api.endpoint(), "http://localhost:8080/api/v1");
        assert_eq!(api.url("urls"), "http://localhost:8080/api/v1/urls");
        assert_eq!(api.url("/shorten"), "http://localhost:8080/api/v1/shorten");
    }

    #[test]
    fn test_from_config() {
        let api = HttpUrlApi::from_config(&ApiConfig::default());
        assert_eq!(api.endpoint(), "http://localhost:8080/api/v1");
    }
}
