use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A fetched page, decoded to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
    pub charset: &'static str,
    pub fetched_at: DateTime<Utc>,
}
