use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form body of the detection endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DetectRequest {
    pub website_url: String,
}

/// Successful detection payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DetectionResponse {
    pub detected_lang: String,
    pub translated_headline: String,
    pub original_text: String,
    pub classification: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
