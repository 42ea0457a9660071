//! Call-to-action defaults and per-service resolution.

use crate::service::{Cta, ServicePage};
use crate::slug::ServiceSlug;

pub const PRIMARY_CTA_LABEL: &str = "Request a Consultation";
pub const SECONDARY_CTA_LABEL: &str = "Run the DCS Diagnostic";
pub const SECONDARY_CTA_HREF: &str = "/dcs-diagnostic/";

const MICRO_TRUST: &str =
    "Response within 1 business day. You'll receive a scoped plan and clear next-step options.";

/// The pair of calls to action shown on a service page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCtas {
    pub primary: Cta,
    pub secondary: Cta,
}

/// Default primary action: the contact form, pre-filled with the offering.
///
/// Slugs are lowercase ASCII and `-`, so they go into the query string as-is.
pub fn default_primary(slug: ServiceSlug) -> Cta {
    Cta::new(
        PRIMARY_CTA_LABEL,
        format!("/contact/?service={}", slug.as_str()),
    )
}

/// Default secondary action: the diagnostic offer.
pub fn default_secondary() -> Cta {
    Cta::new(SECONDARY_CTA_LABEL, SECONDARY_CTA_HREF)
}

/// Resolve the page's CTAs. An authored override wins over the default.
pub fn resolve_ctas(service: &ServicePage) -> ResolvedCtas {
    ResolvedCtas {
        primary: service
            .primary_cta
            .clone()
            .unwrap_or_else(|| default_primary(service.slug)),
        secondary: service
            .secondary_cta
            .clone()
            .unwrap_or_else(default_secondary),
    }
}

/// Reassurance copy shown under every CTA block.
pub fn micro_trust() -> &'static str {
    MICRO_TRUST
}
