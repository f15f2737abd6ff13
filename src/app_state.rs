use crate::classifier::ClassifierTrait;
use crate::headline::{HeadlineExtractor, HeadlineExtractorTrait};
use crate::language::{LanguageDetectorTrait, WhatlangDetector};
use crate::translate::{GoogleTranslator, TranslatorTrait};
use std::sync::Arc;
use url::Url;

/// Shared read-only collaborators; cloned per request, never mutated.
#[derive(Clone)]
pub struct AppState {
    pub headlines: Arc<dyn HeadlineExtractorTrait + Send + Sync>,
    pub language: Arc<dyn LanguageDetectorTrait + Send + Sync>,
    pub translator: Arc<dyn TranslatorTrait + Send + Sync>,
    pub classifier: Arc<dyn ClassifierTrait + Send + Sync>,
}

impl AppState {
    pub fn new(
        classifier: Arc<dyn ClassifierTrait + Send + Sync>,
        translate_base_url: Url,
    ) -> Self {
        Self {
            headlines: Arc::new(HeadlineExtractor),
            language: Arc::new(WhatlangDetector),
            translator: Arc::new(GoogleTranslator::new(translate_base_url)),
            classifier,
        }
    }
}
