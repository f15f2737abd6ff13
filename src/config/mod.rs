//! Configuration handling for the application.
//!
//! Everything comes from environment variables with sensible development
//! defaults, so the binary starts with no setup in a dev checkout. The
//! `Config::from_env` method performs that loading and validates the few
//! values that have structure.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

use url::Url;

/// Environment variable names. Keeping them public lets other crates (tests,
/// build scripts) refer to them if needed later.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_DATASET_PATH: &str = "DATASET_PATH";
pub const ENV_TRANSLATE_BASE_URL: &str = "TRANSLATE_BASE_URL";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DATASET_PATH: &str = "data/dataset.csv";
const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translate.googleapis.com";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    dataset_path: String,
    translate_base_url: Url,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        dataset_path: impl Into<String>,
        translate_base_url: Url,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            dataset_path: dataset_path.into(),
            translate_base_url,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// The translation base URL is parsed up front so a typo fails startup
    /// instead of every request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let dataset_path =
            env::var(ENV_DATASET_PATH).unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());
        let raw_base_url = env::var(ENV_TRANSLATE_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_TRANSLATE_BASE_URL.to_string());
        let translate_base_url =
            Url::parse(&raw_base_url).map_err(|e| ConfigError::InvalidValue {
                field: ENV_TRANSLATE_BASE_URL,
                reason: e.to_string(),
            })?;
        Ok(Self {
            bind_addr,
            dataset_path,
            translate_base_url,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Path to the CSV training corpus.
    pub fn dataset_path(&self) -> &str {
        &self.dataset_path
    }
    /// Base URL of the translation endpoint.
    pub fn translate_base_url(&self) -> &Url {
        &self.translate_base_url
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [ENV_BIND_ADDR, ENV_DATASET_PATH, ENV_TRANSLATE_BASE_URL] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), super::DEFAULT_BIND_ADDR);
        assert_eq!(cfg.dataset_path(), super::DEFAULT_DATASET_PATH);
        assert_eq!(
            cfg.translate_base_url().as_str(),
            "https://translate.googleapis.com/"
        );
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "0.0.0.0:9000");
            env::set_var(ENV_DATASET_PATH, "/srv/corpus/news.csv");
            env::set_var(ENV_TRANSLATE_BASE_URL, "http://localhost:5000");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.dataset_path(), "/srv/corpus/news.csv");
        assert_eq!(cfg.translate_base_url().as_str(), "http://localhost:5000/");
        clear_env();
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_TRANSLATE_BASE_URL, "not a url");
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: ENV_TRANSLATE_BASE_URL,
                ..
            }
        ));
        clear_env();
    }

    #[test]
    fn explicit_construction_skips_the_environment() {
        let base = Url::parse("http://localhost:5000").unwrap();
        let cfg = Config::new("0.0.0.0:3000", "fixtures/tiny.csv", base.clone());
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
        assert_eq!(cfg.dataset_path(), "fixtures/tiny.csv");
        assert_eq!(cfg.translate_base_url(), &base);
    }
}
