//! Stable `@id` builders, one per entity kind.
//!
//! Convention:
//!
//! ```text
//! Organization: <origin>/#organization
//! WebSite:      <origin>/#website
//! WebPage:      <origin>/<path>/#webpage
//! Service:      <origin>/services/<slug>/#service
//! ItemList:     <origin>/services/#item-list
//! ```

use crate::url::{build_schema_id, build_url};
use nextara_core::ServiceSlug;

pub const ORGANIZATION_FRAGMENT: &str = "organization";
pub const WEBSITE_FRAGMENT: &str = "website";
pub const WEBPAGE_FRAGMENT: &str = "webpage";
pub const SERVICE_FRAGMENT: &str = "service";
pub const ITEM_LIST_FRAGMENT: &str = "item-list";
pub const BREADCRUMB_FRAGMENT: &str = "breadcrumb";

pub const SERVICES_HUB_PATH: &str = "/services";

pub fn organization_id(origin: &str) -> String {
    build_schema_id(origin, "/", ORGANIZATION_FRAGMENT)
}

pub fn web_site_id(origin: &str) -> String {
    build_schema_id(origin, "/", WEBSITE_FRAGMENT)
}

pub fn web_page_id(origin: &str, path: &str) -> String {
    build_schema_id(origin, path, WEBPAGE_FRAGMENT)
}

pub fn service_id(origin: &str, slug: ServiceSlug) -> String {
    build_schema_id(origin, &service_path(slug), SERVICE_FRAGMENT)
}

pub fn item_list_id(origin: &str) -> String {
    build_schema_id(origin, SERVICES_HUB_PATH, ITEM_LIST_FRAGMENT)
}

pub fn breadcrumb_id(origin: &str, path: &str) -> String {
    build_schema_id(origin, path, BREADCRUMB_FRAGMENT)
}

// URL builders for `url` / `item` properties.

pub fn page_url(origin: &str, path: &str) -> String {
    build_url(origin, path)
}

pub fn service_url(origin: &str, slug: ServiceSlug) -> String {
    build_url(origin, &service_path(slug))
}

pub fn services_hub_url(origin: &str) -> String {
    build_url(origin, SERVICES_HUB_PATH)
}

pub fn home_url(origin: &str) -> String {
    build_url(origin, "/")
}

/// Site path of a service's landing page.
pub fn service_path(slug: ServiceSlug) -> String {
    format!("{}/{}", SERVICES_HUB_PATH, slug.as_str())
}
