//! The closed set of service slugs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one service offering.
///
/// The set is closed: every slug the site knows about is a variant here, and
/// [`ServiceSlug::ALL`] lists them in declaration order. Authored content that
/// names any other slug is rejected while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceSlug {
    GrowthBlockerAudit,
    DcsAudits,
    TrackingGovernance,
    SeoIndexing,
    ConversionArchitecture,
    PaidMediaSystems,
    AutomationEcc,
}

/// A string that is not a member of the closed slug set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service slug \"{0}\"")]
pub struct UnknownSlug(pub String);

impl ServiceSlug {
    /// Every slug, in declaration order.
    pub const ALL: [ServiceSlug; 7] = [
        ServiceSlug::GrowthBlockerAudit,
        ServiceSlug::DcsAudits,
        ServiceSlug::TrackingGovernance,
        ServiceSlug::SeoIndexing,
        ServiceSlug::ConversionArchitecture,
        ServiceSlug::PaidMediaSystems,
        ServiceSlug::AutomationEcc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GrowthBlockerAudit => "growth-blocker-audit",
            Self::DcsAudits => "dcs-audits",
            Self::TrackingGovernance => "tracking-governance",
            Self::SeoIndexing => "seo-indexing",
            Self::ConversionArchitecture => "conversion-architecture",
            Self::PaidMediaSystems => "paid-media-systems",
            Self::AutomationEcc => "automation-ecc",
        }
    }

    /// Position of this slug in [`ServiceSlug::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ServiceSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ServiceSlug {
    type Err = UnknownSlug;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| UnknownSlug(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, slug) in ServiceSlug::ALL.iter().enumerate() {
            assert_eq!(slug.index(), i);
        }
    }

    #[test]
    fn test_from_str_roundtrips_every_slug() {
        for slug in ServiceSlug::ALL {
            assert_eq!(slug.as_str().parse::<ServiceSlug>().unwrap(), slug);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "web-design".parse::<ServiceSlug>().unwrap_err();
        assert_eq!(err, UnknownSlug("web-design".to_string()));
        assert_eq!(err.to_string(), "unknown service slug \"web-design\"");
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        #[derive(Deserialize)]
        struct Wrapper {
            slug: ServiceSlug,
        }
        for slug in ServiceSlug::ALL {
            let w: Wrapper = toml::from_str(&format!("slug = \"{}\"", slug.as_str())).unwrap();
            assert_eq!(w.slug, slug);
        }
    }
}
