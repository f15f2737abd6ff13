use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, instrument, warn};

use crate::{
    app_state::AppState,
    detect::dtos::{DetectRequest, DetectionResponse, ErrorResponse},
};

/// Request-boundary failures, each carrying its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectError {
    EmptyUrl,
    NoHeadline,
    Downstream,
}

impl DetectError {
    fn message(self) -> &'static str {
        match self {
            DetectError::EmptyUrl => "Please enter a valid website URL",
            DetectError::NoHeadline => "No headline found on the specified website",
            DetectError::Downstream => "An error occurred during translation and detection",
        }
    }

    fn status(self) -> StatusCode {
        match self {
            DetectError::EmptyUrl => StatusCode::BAD_REQUEST,
            DetectError::NoHeadline => StatusCode::NOT_FOUND,
            DetectError::Downstream => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for DetectError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}

#[utoipa::path(
    post,
    path = "/detect_fake_news",
    tag = "detect",
    request_body(content = DetectRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Headline fetched and classified", body = DetectionResponse),
        (status = 400, description = "Empty website URL", body = ErrorResponse),
        (status = 404, description = "No headline on the page", body = ErrorResponse),
        (status = 502, description = "Language detection or translation failed", body = ErrorResponse)
    )
)]
pub async fn detect_fake_news(
    State(state): State<AppState>,
    Form(payload): Form<DetectRequest>,
) -> Response {
    match run_detection(&state, &payload.website_url).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error.into_response(),
    }
}

#[instrument(skip_all, fields(url = %website_url))]
async fn run_detection(
    state: &AppState,
    website_url: &str,
) -> Result<DetectionResponse, DetectError> {
    if website_url.is_empty() {
        return Err(DetectError::EmptyUrl);
    }

    let headline = state
        .headlines
        .headline(website_url)
        .await
        .ok_or(DetectError::NoHeadline)?;

    let detected_lang = state.language.detect(&headline).ok_or_else(|| {
        warn!("no identifiable language in headline");
        DetectError::Downstream
    })?;

    let english_text = if detected_lang != "en" {
        state
            .translator
            .translate(&headline, &detected_lang, "en")
            .await
            .map_err(|e| {
                warn!("translation failed: {}", e);
                DetectError::Downstream
            })?
    } else {
        headline.clone()
    };

    let label = state.classifier.predict(&english_text);
    info!(lang = %detected_lang, label = label.as_str(), "classified headline");

    Ok(DetectionResponse {
        detected_lang,
        translated_headline: english_text,
        original_text: headline,
        classification: label.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Label;
    use crate::classifier::pipeline::MockClassifierTrait;
    use crate::headline::MockHeadlineExtractorTrait;
    use crate::language::MockLanguageDetectorTrait;
    use crate::translate::TranslateError;
    use crate::translate::client::MockTranslatorTrait;
    use axum::{body::Body, http::Request};
    use mockall::predicate::eq;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(
        headlines: MockHeadlineExtractorTrait,
        language: MockLanguageDetectorTrait,
        translator: MockTranslatorTrait,
        classifier: MockClassifierTrait,
    ) -> axum::Router {
        let state = AppState {
            headlines: Arc::new(headlines),
            language: Arc::new(language),
            translator: Arc::new(translator),
            classifier: Arc::new(classifier),
        };
        axum::Router::new()
            .route("/detect_fake_news", axum::routing::post(detect_fake_news))
            .with_state(state)
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/detect_fake_news")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn empty_url_is_rejected_without_touching_collaborators() {
        let mut headlines = MockHeadlineExtractorTrait::new();
        headlines.expect_headline().never();
        let language = MockLanguageDetectorTrait::new();
        let translator = MockTranslatorTrait::new();
        let classifier = MockClassifierTrait::new();

        let app = test_app(headlines, language, translator, classifier);
        let response = app.oneshot(form_request("website_url=")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Please enter a valid website URL"})
        );
    }

    #[tokio::test]
    async fn missing_headline_yields_error_without_classification_fields() {
        let mut headlines = MockHeadlineExtractorTrait::new();
        headlines.expect_headline().returning(|_| None);
        let mut language = MockLanguageDetectorTrait::new();
        language.expect_detect().never();
        let translator = MockTranslatorTrait::new();
        let classifier = MockClassifierTrait::new();

        let app = test_app(headlines, language, translator, classifier);
        let response = app
            .oneshot(form_request("website_url=https%3A%2F%2Fexample.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "No headline found on the specified website"})
        );
    }

    #[tokio::test]
    async fn english_headline_passes_through_untranslated() {
        let mut headlines = MockHeadlineExtractorTrait::new();
        headlines
            .expect_headline()
            .returning(|_| Some("The economy grew today".to_string()));
        let mut language = MockLanguageDetectorTrait::new();
        language
            .expect_detect()
            .with(eq("The economy grew today"))
            .returning(|_| Some("en".to_string()));
        let mut translator = MockTranslatorTrait::new();
        translator.expect_translate().never();
        let mut classifier = MockClassifierTrait::new();
        classifier
            .expect_predict()
            .with(eq("The economy grew today"))
            .returning(|_| Label::Real);

        let app = test_app(headlines, language, translator, classifier);
        let response = app
            .oneshot(form_request("website_url=https%3A%2F%2Fexample.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "detected_lang": "en",
                "translated_headline": "The economy grew today",
                "original_text": "The economy grew today",
                "classification": "REAL"
            })
        );
    }

    #[tokio::test]
    async fn non_english_headline_is_translated_to_english() {
        let mut headlines = MockHeadlineExtractorTrait::new();
        headlines
            .expect_headline()
            .returning(|_| Some("La economía creció hoy".to_string()));
        let mut language = MockLanguageDetectorTrait::new();
        language
            .expect_detect()
            .with(eq("La economía creció hoy"))
            .returning(|_| Some("es".to_string()));
        let mut translator = MockTranslatorTrait::new();
        translator
            .expect_translate()
            .with(eq("La economía creció hoy"), eq("es"), eq("en"))
            .returning(|_, _, _| Ok("The economy grew today".to_string()));
        let mut classifier = MockClassifierTrait::new();
        classifier
            .expect_predict()
            .with(eq("The economy grew today"))
            .returning(|_| Label::Real);

        let app = test_app(headlines, language, translator, classifier);
        let response = app
            .oneshot(form_request("website_url=https%3A%2F%2Fejemplo.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "detected_lang": "es",
                "translated_headline": "The economy grew today",
                "original_text": "La economía creció hoy",
                "classification": "REAL"
            })
        );
    }

    #[tokio::test]
    async fn translation_failure_collapses_to_generic_error() {
        let mut headlines = MockHeadlineExtractorTrait::new();
        headlines
            .expect_headline()
            .returning(|_| Some("La economía creció hoy".to_string()));
        let mut language = MockLanguageDetectorTrait::new();
        language
            .expect_detect()
            .returning(|_| Some("es".to_string()));
        let mut translator = MockTranslatorTrait::new();
        translator
            .expect_translate()
            .returning(|_, _, _| Err(TranslateError::Http(StatusCode::INTERNAL_SERVER_ERROR)));
        let mut classifier = MockClassifierTrait::new();
        classifier.expect_predict().never();

        let app = test_app(headlines, language, translator, classifier);
        let response = app
            .oneshot(form_request("website_url=https%3A%2F%2Fejemplo.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await,
            json!({"error": "An error occurred during translation and detection"})
        );
    }

    #[tokio::test]
    async fn undetectable_language_collapses_to_generic_error() {
        let mut headlines = MockHeadlineExtractorTrait::new();
        headlines
            .expect_headline()
            .returning(|_| Some("404 503 1234567890".to_string()));
        let mut language = MockLanguageDetectorTrait::new();
        language.expect_detect().returning(|_| None);
        let mut translator = MockTranslatorTrait::new();
        translator.expect_translate().never();
        let mut classifier = MockClassifierTrait::new();
        classifier.expect_predict().never();

        let app = test_app(headlines, language, translator, classifier);
        let response = app
            .oneshot(form_request("website_url=https%3A%2F%2Fexample.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await,
            json!({"error": "An error occurred during translation and detection"})
        );
    }

    #[tokio::test]
    async fn fake_verdict_is_reported_as_fake() {
        let mut headlines = MockHeadlineExtractorTrait::new();
        headlines
            .expect_headline()
            .returning(|_| Some("Aliens secretly run the government".to_string()));
        let mut language = MockLanguageDetectorTrait::new();
        language
            .expect_detect()
            .returning(|_| Some("en".to_string()));
        let translator = MockTranslatorTrait::new();
        let mut classifier = MockClassifierTrait::new();
        classifier
            .expect_predict()
            .with(eq("Aliens secretly run the government"))
            .returning(|_| Label::Fake);

        let app = test_app(headlines, language, translator, classifier);
        let response = app
            .oneshot(form_request("website_url=https%3A%2F%2Fexample.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["classification"], "FAKE");
    }
}
