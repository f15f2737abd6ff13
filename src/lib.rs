pub mod app_state;
pub mod classifier;
pub mod config;
pub mod detect;
pub mod fetcher;
pub mod headline;
pub mod health;
pub mod language;
pub mod router;
pub mod translate;
