//! HTTP client for the third-party shortening API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::gateway::{ClickSummary, ShortlinkGateway};
use crate::error::AppError;

/// Shortlink gateway backed by a Bitly-shaped v4 REST API.
///
/// Authenticates every call with a bearer credential. Upstream failures are
/// proxied as [`AppError::Upstream`] with the upstream message when the
/// response body carries one; the core never retries.
pub struct HttpShortlinkGateway {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl HttpShortlinkGateway {
    /// Creates a gateway client.
    ///
    /// `api_base` is the API root without a trailing slash,
    /// e.g. `https://api-ssl.bitly.com/v4`.
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            api_base,
            token: token.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ShortenResponseBody {
    link: String,
}

#[derive(Debug, Deserialize)]
struct ClickSummaryResponseBody {
    total_clicks: u64,
}

#[async_trait]
impl ShortlinkGateway for HttpShortlinkGateway {
    async fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        let response = self
            .http
            .post(format!("{}/shorten", self.api_base))
            .bearer_auth(&self.token)
            .json(&json!({ "long_url": long_url }))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(upstream_failure(response).await);
        }

        let body: ShortenResponseBody = response.json().await.map_err(transport_error)?;
        Ok(body.link)
    }

    async fn click_summary(&self, short_url: &str) -> Result<ClickSummary, AppError> {
        // The API addresses links without the scheme prefix.
        let bitlink = short_url
            .strip_prefix("https://")
            .or_else(|| short_url.strip_prefix("http://"))
            .unwrap_or(short_url);

        let response = self
            .http
            .get(format!(
                "{}/bitlinks/{}/clicks/summary",
                self.api_base, bitlink
            ))
            .query(&[("unit", "day"), ("units", "-1")])
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(upstream_failure(response).await);
        }

        let body: ClickSummaryResponseBody = response.json().await.map_err(transport_error)?;
        Ok(ClickSummary {
            total_clicks: body.total_clicks,
        })
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    AppError::upstream(
        "Shortening service unreachable",
        json!({ "reason": e.to_string() }),
    )
}

/// Builds the error for a non-success upstream response, surfacing the
/// upstream message when the body carries one.
async fn upstream_failure(response: reqwest::Response) -> AppError {
    let status = response.status().as_u16();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    let message = body
        .get("message")
        .or_else(|| body.get("description"))
        .and_then(Value::as_str)
        .unwrap_or("Shortening service error")
        .to_string();

    AppError::upstream(message, json!({ "status": status }))
}
