use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("translation endpoint returned http {0}")]
    Http(reqwest::StatusCode),

    #[error("malformed translation response: {0}")]
    MalformedResponse(String),
}
