use crate::translate::errors::TranslateError;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;
use url::Url;

#[cfg(test)]
use mockall::automock;

const USER_AGENT: &str = "VeracityBot/0.1 (+https://veracity.example.com)";

static TRANSLATE_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslatorTrait {
    /// Translate `text` from `source` into `target`, both ISO 639-1 codes.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;
}

/// Client for the public `translate_a/single` web endpoint.
pub struct GoogleTranslator {
    http: Client,
    base_url: Url,
}

impl GoogleTranslator {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: TRANSLATE_CLIENT.clone(),
            base_url,
        }
    }
}

#[async_trait]
impl TranslatorTrait for GoogleTranslator {
    #[instrument(skip_all, fields(source = %source, target = %target))]
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let endpoint = self.base_url.join("translate_a/single")?;

        let response = self
            .http
            .get(endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Http(status));
        }

        let payload: Value = response.json().await?;
        translated_text(&payload).ok_or_else(|| {
            TranslateError::MalformedResponse("no translation segments in payload".to_string())
        })
    }
}

/// Pull the translated string out of the endpoint's nested-array payload.
///
/// The shape is `[[["<translated>", "<original>", ...], ...], ...]`; long
/// inputs come back split over several segments that concatenate in order.
fn translated_text(payload: &Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            out.push_str(part);
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_single_segment() {
        let payload = json!([[["The economy grew today", "La economía creció hoy", null, null, 1]],
            null, "es"]);
        assert_eq!(
            translated_text(&payload),
            Some("The economy grew today".to_string())
        );
    }

    #[test]
    fn concatenates_multiple_segments() {
        let payload = json!([[["First part. ", "Primera parte. "], ["Second part.", "Segunda parte."]],
            null, "es"]);
        assert_eq!(
            translated_text(&payload),
            Some("First part. Second part.".to_string())
        );
    }

    #[test]
    fn rejects_payload_without_segments() {
        assert_eq!(translated_text(&json!([])), None);
        assert_eq!(translated_text(&json!({"error": "nope"})), None);
        assert_eq!(translated_text(&json!([[]])), None);
    }
}
