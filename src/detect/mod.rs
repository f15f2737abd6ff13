pub mod dtos;
pub mod handlers;

pub use dtos::{DetectRequest, DetectionResponse, ErrorResponse};
pub use handlers::detect_fake_news;
