pub mod dataset;
pub mod logistic;
pub mod pipeline;
pub mod tokenize;
pub mod vectorizer;

pub use dataset::{DatasetError, TrainingCorpus, TrainingExample, load_corpus};
pub use pipeline::{ClassifierTrait, Label, NewsClassifier, TrainError};
