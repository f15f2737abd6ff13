use axum::Router;
use std::sync::Arc;
use url::Url;

use veracity::{
    app_state::AppState,
    classifier::{NewsClassifier, TrainingCorpus, TrainingExample},
    router::build_router,
};

/// Small corpus whose sentences double as test headlines.
pub fn training_corpus() -> TrainingCorpus {
    let rows: &[(&str, u8)] = &[
        (
            "This is a test of the English language detection system. It should work well.",
            0,
        ),
        ("The economy grew today after the markets rallied", 0),
        ("Jobs report beats analyst expectations again", 0),
        ("Aliens secretly run the government from a hidden base", 1),
        ("The moon landing was filmed in a secret hollywood studio", 1),
        ("Lizard people control every television studio", 1),
    ];
    TrainingCorpus {
        examples: rows
            .iter()
            .map(|(news, label)| TrainingExample {
                news: news.to_string(),
                label: *label,
            })
            .collect(),
    }
}

/// Full application with real collaborators; the translation endpoint is
/// pointed at the given base URL so tests can mock it.
pub fn test_app(translate_base_url: Url) -> Router {
    let classifier =
        Arc::new(NewsClassifier::train(&training_corpus()).expect("training must succeed"));
    build_router(AppState::new(classifier, translate_base_url))
}
