//! Service page content records.

use crate::slug::ServiceSlug;
use serde::{Deserialize, Serialize};

/// One service offering as authored for its landing page.
///
/// Unknown keys are rejected so a misspelled section is never dropped silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicePage {
    pub slug: ServiceSlug,
    /// Hub and navigation sort key. Unique across the registry.
    pub order: i32,
    /// UI label used in breadcrumbs, cards and navigation.
    pub name: String,
    /// Full `<title>` text including the brand suffix.
    pub seo_title: String,
    pub meta_description: String,

    pub outcome_headline: String,
    pub posture_subhead: String,

    /// "Who it's for".
    pub audience_fit: Vec<String>,
    /// "Not for".
    pub audience_not_fit: Vec<String>,

    pub deliverables: Vec<Deliverable>,
    /// "How it works", numbered from 1 in declaration order.
    pub process_steps: Vec<ProcessStep>,
    /// "What we verify".
    pub proof_checklist: Vec<ProofChecklistItem>,
    pub faq: Vec<Faq>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<Cta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<Cta>,

    pub related_services: Vec<ServiceSlug>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deliverable {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProofChecklistItem {
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

impl Cta {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}
