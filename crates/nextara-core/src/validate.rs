//! Registry validator: the content contract every service record must meet.
//!
//! Runs once over the whole table, in [`ServiceSlug::ALL`] order, and stops at
//! the first violation. Checks per record:
//!
//! 1. the record's own slug equals its registry key
//! 2. name, SEO title and meta description are non-empty
//! 3. meta description is at most [`META_DESCRIPTION_MAX`] UTF-16 code units
//! 4. section cardinalities (see the `*_BOUNDS` constants)
//! 5. `order` is unique across records
//! 6. process steps are numbered 1..=n in declaration order
//! 7. related services are members of the closed slug set
//! 8. related services do not include the record itself
//! 9. related services contain no duplicates
//!
//! Rule 7 holds by construction: `related_services` is a `Vec<ServiceSlug>`,
//! and authored strings outside the closed set fail to parse.

use crate::registry::RegistryError;
use crate::service::ServicePage;
use crate::slug::ServiceSlug;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Limit on the meta description, in UTF-16 code units (the length browsers and
/// search snippets measure). Characters outside the BMP count twice.
pub const META_DESCRIPTION_MAX: usize = 170;

pub const FAQ_BOUNDS: CountBounds = CountBounds::at_least(6);
pub const RELATED_SERVICES_BOUNDS: CountBounds = CountBounds::between(2, 3);
pub const DELIVERABLES_BOUNDS: CountBounds = CountBounds::between(3, 6);
pub const PROCESS_STEPS_BOUNDS: CountBounds = CountBounds::between(3, 6);
// No upper bound on the checklist, unlike the neighbouring sections.
pub const PROOF_CHECKLIST_BOUNDS: CountBounds = CountBounds::at_least(3);
pub const AUDIENCE_FIT_BOUNDS: CountBounds = CountBounds::at_least(2);
pub const AUDIENCE_NOT_FIT_BOUNDS: CountBounds = CountBounds::at_least(1);

/// Allowed number of entries in a content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl CountBounds {
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl fmt::Display for CountBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, ">= {}", self.min),
        }
    }
}

/// Validate every record of the registry table. Returns the first violation.
pub fn validate_services(
    services: &BTreeMap<ServiceSlug, ServicePage>,
) -> Result<(), RegistryError> {
    let mut seen_orders: BTreeMap<i32, ServiceSlug> = BTreeMap::new();

    for slug in ServiceSlug::ALL {
        let page = services
            .get(&slug)
            .ok_or(RegistryError::MissingEntry(slug))?;
        validate_page(slug, page, &mut seen_orders)?;
        tracing::debug!("service record {} passed validation", slug);
    }

    Ok(())
}

fn validate_page(
    key: ServiceSlug,
    page: &ServicePage,
    seen_orders: &mut BTreeMap<i32, ServiceSlug>,
) -> Result<(), RegistryError> {
    if page.slug != key {
        return Err(RegistryError::KeyMismatch {
            key,
            found: page.slug,
        });
    }
    let slug = key;

    for (field, value) in [
        ("name", &page.name),
        ("seo_title", &page.seo_title),
        ("meta_description", &page.meta_description),
    ] {
        if value.is_empty() {
            return Err(RegistryError::MissingField { slug, field });
        }
    }

    let len = page.meta_description.encode_utf16().count();
    if len > META_DESCRIPTION_MAX {
        return Err(RegistryError::DescriptionTooLong {
            slug,
            len,
            max: META_DESCRIPTION_MAX,
        });
    }

    for (section, count, bounds) in [
        ("faq", page.faq.len(), FAQ_BOUNDS),
        (
            "related_services",
            page.related_services.len(),
            RELATED_SERVICES_BOUNDS,
        ),
        ("deliverables", page.deliverables.len(), DELIVERABLES_BOUNDS),
        (
            "process_steps",
            page.process_steps.len(),
            PROCESS_STEPS_BOUNDS,
        ),
        (
            "proof_checklist",
            page.proof_checklist.len(),
            PROOF_CHECKLIST_BOUNDS,
        ),
        ("audience_fit", page.audience_fit.len(), AUDIENCE_FIT_BOUNDS),
        (
            "audience_not_fit",
            page.audience_not_fit.len(),
            AUDIENCE_NOT_FIT_BOUNDS,
        ),
    ] {
        if !bounds.contains(count) {
            return Err(RegistryError::Cardinality {
                slug,
                section,
                bounds,
                count,
            });
        }
    }

    if let Some(&first) = seen_orders.get(&page.order) {
        return Err(RegistryError::DuplicateOrder {
            slug,
            order: page.order,
            first,
        });
    }
    seen_orders.insert(page.order, slug);

    for (index, step) in page.process_steps.iter().enumerate() {
        let expected = index + 1;
        if step.step as usize != expected {
            return Err(RegistryError::StepNumbering {
                slug,
                index,
                expected,
                found: step.step,
            });
        }
    }

    if page.related_services.contains(&slug) {
        return Err(RegistryError::SelfReference { slug });
    }

    let mut related = BTreeSet::new();
    for &rel in &page.related_services {
        if !related.insert(rel) {
            return Err(RegistryError::DuplicateRelated { slug, related: rel });
        }
    }

    Ok(())
}
