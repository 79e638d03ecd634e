//! Request plumbing shared by the resource namespaces

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use fguard_core::prelude::*;
use fguard_core::HealthInfo;

use crate::analytics::AnalyticsApi;
use crate::blocklist::BlocklistApi;
use crate::focus::FocusApi;

/// Base URL used when neither config nor CLI override one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Error body shape the backend uses for every 4xx/5xx response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Acknowledgement body for mutations that return no payload we consume.
#[derive(Debug, Deserialize)]
pub(crate) struct Ack {
    #[serde(default)]
    #[allow(dead_code)]
    pub success: bool,
}

/// Async client for the FocusGuard backend.
///
/// Cheap to clone (the underlying [`reqwest::Client`] is a handle to a shared
/// connection pool), which is how background tasks take their own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Build a client against `base_url`, e.g. `http://localhost:5000/api`.
    ///
    /// The URL is validated up front; a malformed one is a startup error, not
    /// something to discover on the first request.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|_| Error::invalid_base_url(base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_base_url(base_url));
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self {
            http,
            base: trimmed.to_string(),
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    // ─────────────────────────────────────────────────────────────
    // Resource namespaces
    // ─────────────────────────────────────────────────────────────

    pub fn focus(&self) -> FocusApi<'_> {
        FocusApi::new(self)
    }

    pub fn blocklist(&self) -> BlocklistApi<'_> {
        BlocklistApi::new(self)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(self)
    }

    /// `GET /health` - backend reachability probe, issued once at startup.
    pub async fn health(&self) -> Result<HealthInfo> {
        self.get_json("health").await
    }

    // ─────────────────────────────────────────────────────────────
    // Request helpers
    // ─────────────────────────────────────────────────────────────

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let resp = self.http.get(&url).send().await.map_err(transport)?;
        decode(resp).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    /// POST with an empty JSON body (the preset bulk-add takes no payload).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.post_json(path, &serde_json::json!({})).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path);
        debug!(%url, "DELETE");
        let resp = self.http.delete(&url).send().await.map_err(transport)?;
        decode::<Ack>(resp).await.map(|_| ())
    }
}

fn transport(err: reqwest::Error) -> Error {
    Error::http(err.to_string())
}

/// Decode a response body, mapping non-2xx statuses to [`Error::Api`].
///
/// The backend puts its human-readable message in `{"error": ...}`; when that
/// shape is absent (proxy error pages and the like) the HTTP reason phrase is
/// used instead.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
        return resp.json().await.map_err(|e| Error::decode(e.to_string()));
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    Err(Error::api(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(
            client.endpoint("focus/status"),
            "http://localhost:5000/api/focus/status"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(
            client.endpoint("blocklist"),
            "http://localhost:5000/api/blocklist"
        );
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ApiClient::new("ftp://localhost:5000/api").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_error_body_shape() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Site already blocked"}"#).unwrap();
        assert_eq!(body.error, "Site already blocked");
    }
}
