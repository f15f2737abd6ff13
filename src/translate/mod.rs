pub mod client;
pub mod errors;

pub use client::{GoogleTranslator, TranslatorTrait};
pub use errors::TranslateError;
