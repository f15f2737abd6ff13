use thiserror::Error;
use tracing::info;

use crate::classifier::dataset::TrainingCorpus;
use crate::classifier::logistic::{GdConfig, LogisticRegression};
use crate::classifier::tokenize::tokenize;
use crate::classifier::vectorizer::TfidfVectorizer;

#[cfg(test)]
use mockall::automock;

/// Classifier verdict for a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Real => "REAL",
            Label::Fake => "FAKE",
        }
    }
}

/// Read-only inference over the trained model. Total for any input; an
/// empty or fully out-of-vocabulary text gets the bias-driven default.
#[cfg_attr(test, automock)]
pub trait ClassifierTrait {
    fn predict(&self, text: &str) -> Label;
    fn vocabulary_size(&self) -> usize;
}

#[derive(Error, Debug)]
pub enum TrainError {
    #[error("training corpus is empty")]
    EmptyCorpus,

    #[error("training corpus produced no vocabulary")]
    EmptyVocabulary,
}

/// TF-IDF features plus logistic regression, trained once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct NewsClassifier {
    vectorizer: TfidfVectorizer,
    model: LogisticRegression,
}

impl NewsClassifier {
    pub fn train(corpus: &TrainingCorpus) -> Result<Self, TrainError> {
        if corpus.examples.is_empty() {
            return Err(TrainError::EmptyCorpus);
        }

        let documents: Vec<Vec<String>> = corpus
            .examples
            .iter()
            .map(|example| tokenize(&example.news))
            .collect();
        let labels: Vec<u8> = corpus
            .examples
            .iter()
            .map(|example| u8::from(example.label != 0))
            .collect();

        let vectorizer = TfidfVectorizer::fit(&documents);
        if vectorizer.vocabulary_size() == 0 {
            return Err(TrainError::EmptyVocabulary);
        }

        let features: Vec<Vec<f64>> = documents
            .iter()
            .map(|document| vectorizer.transform(document))
            .collect();
        let model = LogisticRegression::fit(&features, &labels, &GdConfig::default());

        info!(
            examples = corpus.examples.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "trained news classifier"
        );

        Ok(Self { vectorizer, model })
    }
}

impl ClassifierTrait for NewsClassifier {
    fn predict(&self, text: &str) -> Label {
        let tokens = tokenize(text);
        let features = self.vectorizer.transform(&tokens);
        if self.model.predict_probability(&features) >= 0.5 {
            Label::Fake
        } else {
            Label::Real
        }
    }

    fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}
