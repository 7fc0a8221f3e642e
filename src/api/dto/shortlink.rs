//! DTOs for shortlink endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a previously saved link.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The fully composed tagged URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,
}

/// Response for a shorten request.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    /// True when the alias already existed and no new one was created.
    pub duplicate: bool,
}

/// Query parameters for the click summary endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct ClicksQuery {
    #[validate(url(message = "Invalid URL format"))]
    pub short_url: String,
}

/// Click analytics for one shortened link.
#[derive(Debug, Serialize)]
pub struct ClickSummaryResponse {
    pub total_clicks: u64,
}
