//! Server configuration

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings the leptos config file does not cover
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Directory served under `/images`
    pub images_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("public/images"),
            log_filter: "aim_marketing=info,aim_core=info,tower_http=info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            images_dir: lookup("AIM_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.images_dir),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [("AIM_IMAGES_DIR", "/srv/images"), ("RUST_LOG", "debug")]
            .into_iter()
            .collect();
        let config = SiteConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.images_dir, PathBuf::from("/srv/images"));
        assert_eq!(config.log_filter, "debug");
    }
}
