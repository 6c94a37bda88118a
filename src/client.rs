use reqwest::Response;
use serde_json::Value;
use url::Url;

use crate::errors::{ApiError, ApiResult};
use crate::response;

/// Production Foursquare v2 API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.foursquare.com/v2";

/// Shared client context: endpoint base URL, access token, and the HTTP
/// client reused across calls. Transport security follows the endpoint
/// scheme (TLS for `https`, plain otherwise).
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    access_token: String,
    http: reqwest::Client,
}

impl Client {
    /// Build a client for the given endpoint base URL and OAuth access
    /// token. Token acquisition is outside this crate; the caller supplies
    /// a ready token.
    pub fn new(endpoint: &str, access_token: &str) -> ApiResult<Self> {
        let parsed =
            Url::parse(endpoint).map_err(|_| ApiError::invalid_endpoint(endpoint))?;
        if parsed.host_str().is_none() {
            return Err(ApiError::invalid_endpoint(endpoint));
        }

        // Redirects are not followed: a 3xx is reported to the caller as an
        // unexpected status rather than silently chased.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            endpoint: parsed,
            access_token: access_token.to_string(),
            http,
        })
    }

    /// Build a client against the production endpoint.
    pub fn default_endpoint(access_token: &str) -> ApiResult<Self> {
        Self::new(DEFAULT_ENDPOINT, access_token)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Resolve an API path against the endpoint base URL.
    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.as_str().trim_end_matches('/'), path)
    }

    /// Generic authenticated GET: resolves the path, injects `oauth_token`,
    /// and returns the unwrapped `response` value of the envelope.
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> ApiResult<Value> {
        let url = self.url_for(path);
        log::debug!("GET {}", url);

        let resp = self
            .http
            .get(&url)
            .query(&[("oauth_token", self.access_token.as_str())])
            .query(params)
            .send()
            .await?;

        self.dispatch(resp).await
    }

    /// Status-code-range dispatch shared by every operation. Exhaustive:
    /// statuses outside both handled ranges surface as a distinct error
    /// instead of falling through.
    pub(crate) async fn dispatch(&self, resp: Response) -> ApiResult<Value> {
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        match status {
            200..=299 => response::parse_envelope(&body),
            400..=599 => Err(response::classify_error(status, &body)),
            _ => {
                log::warn!("Unexpected HTTP status {} from API", status);
                Err(ApiError::UnexpectedStatus { status, body })
            }
        }
    }
}
