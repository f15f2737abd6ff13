use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use thiserror::Error;

/// One labeled row of the training CSV. Label 0 is real news, anything
/// else is fake; a missing text column becomes the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingExample {
    #[serde(default)]
    pub news: String,
    pub label: u8,
}

#[derive(Debug, Default)]
pub struct TrainingCorpus {
    pub examples: Vec<TrainingExample>,
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Load the training corpus from a `news,label` CSV file.
pub fn load_corpus(path: &str) -> Result<TrainingCorpus, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_corpus(file).map_err(|source| DatasetError::Parse {
        path: path.to_string(),
        source,
    })
}

fn parse_corpus(reader: impl Read) -> Result<TrainingCorpus, csv::Error> {
    let mut examples = Vec::new();
    for record in csv::Reader::from_reader(reader).into_deserialize() {
        let example: TrainingExample = record?;
        examples.push(example);
    }
    Ok(TrainingCorpus { examples })
}
