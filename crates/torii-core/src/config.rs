use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub providers: ProvidersConfig,
    pub mirrors: MirrorsConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub jikan_base_url: String,
    pub anilist_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorsConfig {
    /// Mirror hosts in probe priority order. At least two are required.
    pub hosts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Load config: the user file if present, the built-in defaults
    /// otherwise.
    pub fn load() -> Result<Self, CoreError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::from_file(&user_path)
        } else {
            Self::defaults()
        }
    }

    /// The built-in defaults.
    pub fn defaults() -> Result<Self, CoreError> {
        Self::parse(DEFAULT_CONFIG)
    }

    /// Load and validate a specific config file.
    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self, CoreError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.mirrors.hosts.len() < 2 {
            return Err(CoreError::Config(
                "at least two mirror hosts are required".into(),
            ));
        }
        for host in &self.mirrors.hosts {
            Url::parse(host)
                .map_err(|e| CoreError::Config(format!("invalid mirror host '{host}': {e}")))?;
        }
        Ok(())
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "torii")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn built_in_defaults_parse_and_validate() {
        let config = AppConfig::defaults().unwrap();
        assert!(config.providers.jikan_base_url.starts_with("https://"));
        assert!(config.mirrors.hosts.len() >= 2);
        assert!(config.http.timeout_secs > 0);
    }

    #[test]
    fn fewer_than_two_mirrors_is_rejected() {
        let err = AppConfig::parse(
            r#"
            [providers]
            jikan_base_url = "https://api.jikan.moe/v4"
            anilist_url = "https://graphql.anilist.co"
            [mirrors]
            hosts = ["https://only.example"]
            [http]
            timeout_secs = 5
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn invalid_mirror_host_is_rejected() {
        let err = AppConfig::parse(
            r#"
            [providers]
            jikan_base_url = "https://api.jikan.moe/v4"
            anilist_url = "https://graphql.anilist.co"
            [mirrors]
            hosts = ["https://ok.example", "not a url"]
            [http]
            timeout_secs = 5
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn user_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [providers]
            jikan_base_url = "https://jikan.local/v4"
            anilist_url = "https://anilist.local"
            [mirrors]
            hosts = ["https://a.local", "https://b.local"]
            [http]
            timeout_secs = 3
            "#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.providers.jikan_base_url, "https://jikan.local/v4");
        assert_eq!(config.http.timeout_secs, 3);
    }
}
