//! The service content registry.
//!
//! A [`ServiceRegistry`] only exists in validated form: every constructor runs
//! the validator and hands back either the complete table or the first
//! violation. Hosts build one at startup and share it read-only afterwards.

use crate::service::ServicePage;
use crate::slug::ServiceSlug;
use crate::validate::{self, CountBounds};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Authored service content shipped with the crate.
pub const EMBEDDED_SERVICES: &str = include_str!("../content/services.toml");

/// Errors from loading or validating the service registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("[services] failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("[services] failed to parse service content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("[services] unknown registry key \"{0}\"")]
    UnknownKey(String),
    #[error("[services] {0}: missing registry entry")]
    MissingEntry(ServiceSlug),
    #[error("[services] {0}: duplicate registry entry")]
    DuplicateEntry(ServiceSlug),
    #[error("[services] Registry key \"{key}\" must match service slug \"{found}\"")]
    KeyMismatch { key: ServiceSlug, found: ServiceSlug },
    #[error("[services] {slug}: {field} is required")]
    MissingField {
        slug: ServiceSlug,
        field: &'static str,
    },
    #[error("[services] {slug}: meta_description exceeds {max} chars (has {len})")]
    DescriptionTooLong {
        slug: ServiceSlug,
        len: usize,
        max: usize,
    },
    #[error("[services] {slug}: {section} must be {bounds} (has {count})")]
    Cardinality {
        slug: ServiceSlug,
        section: &'static str,
        bounds: CountBounds,
        count: usize,
    },
    #[error("[services] {slug}: duplicate order {order} (already used by {first})")]
    DuplicateOrder {
        slug: ServiceSlug,
        order: i32,
        first: ServiceSlug,
    },
    #[error(
        "[services] {slug}: process step numbering mismatch at index {index} (expected {expected}, got {found})"
    )]
    StepNumbering {
        slug: ServiceSlug,
        index: usize,
        expected: usize,
        found: u32,
    },
    #[error("[services] {slug}: related_services cannot include self")]
    SelfReference { slug: ServiceSlug },
    #[error("[services] {slug}: related_services contains duplicate \"{related}\"")]
    DuplicateRelated {
        slug: ServiceSlug,
        related: ServiceSlug,
    },
}

impl RegistryError {
    /// The service the violation was found in, if it concerns one record.
    pub fn slug(&self) -> Option<ServiceSlug> {
        match self {
            Self::Io { .. } | Self::Parse(_) | Self::UnknownKey(_) => None,
            Self::MissingEntry(slug) | Self::DuplicateEntry(slug) => Some(*slug),
            Self::KeyMismatch { key, .. } => Some(*key),
            Self::MissingField { slug, .. }
            | Self::DescriptionTooLong { slug, .. }
            | Self::Cardinality { slug, .. }
            | Self::DuplicateOrder { slug, .. }
            | Self::StepNumbering { slug, .. }
            | Self::SelfReference { slug }
            | Self::DuplicateRelated { slug, .. } => Some(*slug),
        }
    }
}

/// On-disk shape of the authored content: one `[services.<slug>]` table per record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContentFile {
    services: BTreeMap<String, ServicePage>,
}

/// Validated, immutable table of service records, one per [`ServiceSlug`].
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    /// Indexed by [`ServiceSlug::index`]; complete once validated.
    pages: Vec<ServicePage>,
}

impl ServiceRegistry {
    /// Load the content embedded in the crate.
    pub fn load_embedded() -> Result<Self, RegistryError> {
        Self::from_toml_str(EMBEDDED_SERVICES)
    }

    /// Load authored content from a TOML file.
    pub fn load_path(path: &Path) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loading service content from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse authored TOML content and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        let file: ContentFile = toml::from_str(content)?;
        let mut services = BTreeMap::new();
        for (key, page) in file.services {
            let slug = key
                .parse::<ServiceSlug>()
                .map_err(|_| RegistryError::UnknownKey(key))?;
            services.insert(slug, page);
        }
        Self::validated(services)
    }

    /// Build a registry from in-memory records keyed by slug, and validate it.
    ///
    /// A slug given twice is rejected rather than keeping either record.
    pub fn from_pages(
        pages: impl IntoIterator<Item = (ServiceSlug, ServicePage)>,
    ) -> Result<Self, RegistryError> {
        let mut services = BTreeMap::new();
        for (slug, page) in pages {
            if services.insert(slug, page).is_some() {
                return Err(RegistryError::DuplicateEntry(slug));
            }
        }
        Self::validated(services)
    }

    fn validated(mut services: BTreeMap<ServiceSlug, ServicePage>) -> Result<Self, RegistryError> {
        validate::validate_services(&services)?;
        let pages: Vec<ServicePage> = ServiceSlug::ALL
            .iter()
            .filter_map(|slug| services.remove(slug))
            .collect();
        tracing::info!("service registry validated: {} services", pages.len());
        Ok(Self { pages })
    }

    /// Look up one service. Total over the closed slug set.
    pub fn get_service(&self, slug: ServiceSlug) -> &ServicePage {
        &self.pages[slug.index()]
    }

    /// All services, ascending by `order`.
    pub fn get_all_services(&self) -> Vec<&ServicePage> {
        let mut all: Vec<&ServicePage> = self.pages.iter().collect();
        all.sort_by_key(|page| page.order);
        all
    }

    /// Every slug of the closed set, in declaration order.
    pub fn get_service_slugs(&self) -> Vec<ServiceSlug> {
        ServiceSlug::ALL.to_vec()
    }

    /// Resolve slugs to records, keeping input order and duplicates.
    pub fn get_related_services_data(&self, slugs: &[ServiceSlug]) -> Vec<&ServicePage> {
        slugs.iter().map(|&slug| self.get_service(slug)).collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
