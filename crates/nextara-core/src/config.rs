//! Site configuration.
//!
//! Load order: `nextara.toml` in the project root → environment variables → defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "nextara.toml";

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub short_name: String,
    /// Absolute base URL every identifier is derived from. Stored without a trailing `/`.
    pub origin: String,
    pub default_title: String,
    pub default_description: String,
    pub social: SocialConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: String,
}

/// Where service content comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Alternate services TOML, relative to the project root.
    /// When unset the content embedded in the crate is used.
    pub services_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "NexTara AI Solutions".to_string(),
            short_name: "NexTara".to_string(),
            origin: "https://nextara-ai-solutions.com".to_string(),
            default_title: "NexTara AI Solutions — Digital Credibility System (DCS)".to_string(),
            default_description: "Governed digital growth systems. Measure credibility, fix trust gaps, and prove what's real—across humans and machines.".to_string(),
            social: SocialConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            twitter: "@nextaraai".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load config from `nextara.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse {}", config_path.display()))?
        } else {
            Self::default()
        };

        if let Ok(origin) = std::env::var("NEXTARA_ORIGIN") {
            config.origin = origin;
        }
        if let Ok(path) = std::env::var("NEXTARA_SERVICES_PATH") {
            config.content.services_path = Some(PathBuf::from(path));
        }

        let origin = config.origin.clone();
        config.set_origin(&origin)?;
        Ok(config)
    }

    /// Replace the origin, normalizing away one trailing `/`.
    pub fn set_origin(&mut self, origin: &str) -> Result<()> {
        let origin = origin.trim();
        if origin.is_empty() {
            anyhow::bail!("origin must not be empty");
        }
        if !(origin.starts_with("https://") || origin.starts_with("http://")) {
            tracing::warn!("origin {} is not an absolute http(s) URL", origin);
        }
        self.origin = origin.strip_suffix('/').unwrap_or(origin).to_string();
        Ok(())
    }

    /// Absolute path of the configured services file, if one is set.
    pub fn services_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.content
            .services_path
            .as_ref()
            .map(|p| project_root.join(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.name, "NexTara AI Solutions");
        assert_eq!(config.short_name, "NexTara");
        assert_eq!(config.origin, "https://nextara-ai-solutions.com");
        assert_eq!(config.social.twitter, "@nextaraai");
        assert!(config.content.services_path.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
origin = "https://staging.example.com"

[content]
services_path = "content/services.toml"
"#;
        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.origin, "https://staging.example.com");
        assert_eq!(
            config.content.services_path,
            Some(PathBuf::from("content/services.toml"))
        );
        // Defaults for unspecified fields
        assert_eq!(config.name, "NexTara AI Solutions");
        assert_eq!(config.social.twitter, "@nextaraai");
    }

    #[test]
    fn test_set_origin_strips_one_trailing_slash() {
        let mut config = SiteConfig::default();
        config.set_origin("https://example.com/").unwrap();
        assert_eq!(config.origin, "https://example.com");
        config.set_origin("  https://example.com  ").unwrap();
        assert_eq!(config.origin, "https://example.com");
    }

    #[test]
    fn test_set_origin_rejects_empty() {
        let mut config = SiteConfig::default();
        assert!(config.set_origin("   ").is_err());
        assert_eq!(config.origin, "https://nextara-ai-solutions.com");
    }

    #[test]
    fn test_services_path_is_relative_to_root() {
        let mut config = SiteConfig::default();
        assert!(config.services_path(Path::new("/site")).is_none());
        config.content.services_path = Some(PathBuf::from("data/services.toml"));
        assert_eq!(
            config.services_path(Path::new("/site")),
            Some(PathBuf::from("/site/data/services.toml"))
        );
    }
}
