//! One-time startup: configuration plus the validated service registry.

use crate::config::SiteConfig;
use crate::registry::ServiceRegistry;
use anyhow::{Context, Result};
use std::path::Path;

/// Everything a build needs, loaded and validated once.
///
/// Holds no interior mutability; share it by reference across page builds.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub registry: ServiceRegistry,
}

impl Site {
    /// Load config from `project_root`, then load and validate the service
    /// registry. Any registry violation aborts with the validator's message.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config = SiteConfig::load(project_root)?;
        let registry = match config.services_path(project_root) {
            Some(path) => ServiceRegistry::load_path(&path)
                .with_context(|| format!("invalid service content in {}", path.display()))?,
            None => ServiceRegistry::load_embedded().context("invalid embedded service content")?,
        };
        tracing::debug!("site loaded for origin {}", config.origin);
        Ok(Self { config, registry })
    }

    pub fn origin(&self) -> &str {
        &self.config.origin
    }
}
