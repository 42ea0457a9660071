//! Typed schema.org node builders.
//!
//! Supported node types (no others): Organization, WebSite, WebPage,
//! BreadcrumbList, Service, ItemList. Every node serializes with `@type` and
//! `@id` first. Links between nodes are [`Reference`]s to a stable id, never
//! embedded copies of the target node.
//!
//! Builders are total and do no validation; service input is expected to come
//! from a validated [`nextara_core::ServiceRegistry`].

use crate::ids::{
    home_url, item_list_id, organization_id, page_url, service_id, service_url,
    services_hub_url, web_page_id, web_site_id, BREADCRUMB_FRAGMENT,
};
use crate::url::{build_schema_id, build_url, normalize_origin};
use nextara_core::{ServicePage, ServiceSlug};
use serde::Serialize;

pub const ORGANIZATION_NAME: &str = "NexTara AI Solutions";
pub const ORGANIZATION_DESCRIPTION: &str = "Digital Growth & Compliance Systems for Serious Operators. Enterprise-grade DCS audits, tracking governance, SEO, conversion architecture, and automation.";
pub const LOGO_PATH: &str = "/images/nextara-logo.png";
pub const LOGO_SIZE: u32 = 512;
pub const AREA_SERVED: &str = "United States";
pub const ITEM_LIST_NAME: &str = "NexTara Digital Credibility Services";
pub const ITEM_LIST_DESCRIPTION: &str = "Enterprise digital growth and compliance systems including DCS audits, tracking governance, SEO, conversion architecture, paid media, and automation.";

/// `{"@id": ...}` pointer to another node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    #[serde(rename = "@id")]
    pub id: String,
}

impl Reference {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

// ---------------------------------------------------------------------------
// Node types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub logo: ImageObject,
    pub description: String,
    pub contact_point: ContactPoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub struct ImageObject {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct ContactPoint {
    pub contact_type: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@id")]
    pub id: String,
    pub url: String,
    pub name: String,
    pub publisher: Reference,
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub struct SearchAction {
    pub target: EntryPoint,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct EntryPoint {
    pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct WebPage {
    #[serde(rename = "@id")]
    pub id: String,
    pub url: String,
    pub name: String,
    pub description: String,
    pub is_part_of: Reference,
    pub publisher: Reference,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@id")]
    pub id: String,
    pub item_list_element: Vec<BreadcrumbEntry>,
}

/// One crumb: `item` is the crumb's canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "ListItem")]
pub struct BreadcrumbEntry {
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub provider: Reference,
    pub area_served: Country,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub struct Country {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct ItemList {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub number_of_items: usize,
    pub item_list_element: Vec<ItemListEntry>,
}

/// One listed service: a direct `url` plus a reference to its Service node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "ListItem")]
pub struct ItemListEntry {
    pub position: usize,
    pub name: String,
    pub url: String,
    pub item: Reference,
}

/// Any supported top-level node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Organization(Organization),
    WebSite(WebSite),
    WebPage(WebPage),
    BreadcrumbList(BreadcrumbList),
    Service(Service),
    ItemList(ItemList),
}

impl SchemaNode {
    pub fn id(&self) -> &str {
        match self {
            Self::Organization(n) => &n.id,
            Self::WebSite(n) => &n.id,
            Self::WebPage(n) => &n.id,
            Self::BreadcrumbList(n) => &n.id,
            Self::Service(n) => &n.id,
            Self::ItemList(n) => &n.id,
        }
    }

    /// The schema.org `@type` of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Organization(_) => "Organization",
            Self::WebSite(_) => "WebSite",
            Self::WebPage(_) => "WebPage",
            Self::BreadcrumbList(_) => "BreadcrumbList",
            Self::Service(_) => "Service",
            Self::ItemList(_) => "ItemList",
        }
    }

    /// Every `{"@id"}` reference this node holds, in field order.
    pub fn references(&self) -> Vec<&Reference> {
        match self {
            Self::Organization(_) | Self::BreadcrumbList(_) => Vec::new(),
            Self::WebSite(n) => vec![&n.publisher],
            Self::WebPage(n) => vec![&n.is_part_of, &n.publisher],
            Self::Service(n) => vec![&n.provider],
            Self::ItemList(n) => n.item_list_element.iter().map(|e| &e.item).collect(),
        }
    }
}

macro_rules! impl_from_node {
    ($($kind:ident),*) => {
        $(
            impl From<$kind> for SchemaNode {
                fn from(node: $kind) -> Self {
                    Self::$kind(node)
                }
            }
        )*
    };
}

impl_from_node!(Organization, WebSite, WebPage, BreadcrumbList, Service, ItemList);

// ---------------------------------------------------------------------------
// Builder inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct WebPageParams<'a> {
    pub origin: &'a str,
    pub path: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

/// A crumb as the caller sees it: display name and site path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The subset of a service record the Service and ItemList nodes need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceData {
    pub slug: ServiceSlug,
    pub name: String,
    pub description: String,
}

impl From<&ServicePage> for ServiceData {
    fn from(page: &ServicePage) -> Self {
        Self {
            slug: page.slug,
            name: page.name.clone(),
            description: page.meta_description.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn build_organization(origin: &str) -> Organization {
    Organization {
        id: organization_id(origin),
        name: ORGANIZATION_NAME.to_string(),
        url: home_url(origin),
        logo: ImageObject {
            url: format!("{}{}", normalize_origin(origin), LOGO_PATH),
            width: LOGO_SIZE,
            height: LOGO_SIZE,
        },
        description: ORGANIZATION_DESCRIPTION.to_string(),
        contact_point: ContactPoint {
            contact_type: "customer support".to_string(),
            url: build_url(origin, "/contact"),
        },
    }
}

pub fn build_web_site(origin: &str) -> WebSite {
    WebSite {
        id: web_site_id(origin),
        url: home_url(origin),
        name: ORGANIZATION_NAME.to_string(),
        publisher: Reference::new(organization_id(origin)),
        potential_action: SearchAction {
            target: EntryPoint {
                url_template: format!("{}?q={{search_term_string}}", services_hub_url(origin)),
            },
            query_input: "required name=search_term_string".to_string(),
        },
    }
}

pub fn build_web_page(params: &WebPageParams<'_>) -> WebPage {
    let WebPageParams {
        origin,
        path,
        title,
        description,
    } = *params;
    WebPage {
        id: web_page_id(origin, path),
        url: page_url(origin, path),
        name: title.to_string(),
        description: description.to_string(),
        is_part_of: Reference::new(web_site_id(origin)),
        publisher: Reference::new(organization_id(origin)),
    }
}

/// Positions are 1-based in input order. The id hangs off the last crumb's URL;
/// an empty list falls back to the site root.
pub fn build_breadcrumb_list(origin: &str, items: &[BreadcrumbItem]) -> BreadcrumbList {
    let last = items.last().map_or("/", |item| item.url.as_str());
    BreadcrumbList {
        id: build_schema_id(origin, last, BREADCRUMB_FRAGMENT),
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, item)| BreadcrumbEntry {
                position: index + 1,
                name: item.name.clone(),
                item: page_url(origin, &item.url),
            })
            .collect(),
    }
}

pub fn build_service(origin: &str, data: &ServiceData) -> Service {
    Service {
        id: service_id(origin, data.slug),
        name: data.name.clone(),
        description: data.description.clone(),
        url: service_url(origin, data.slug),
        provider: Reference::new(organization_id(origin)),
        area_served: Country {
            name: AREA_SERVED.to_string(),
        },
    }
}

/// Entries keep the caller's order; pass services sorted by `order` for a stable hub.
pub fn build_item_list(origin: &str, services: &[ServiceData]) -> ItemList {
    ItemList {
        id: item_list_id(origin),
        name: ITEM_LIST_NAME.to_string(),
        description: ITEM_LIST_DESCRIPTION.to_string(),
        number_of_items: services.len(),
        item_list_element: services
            .iter()
            .enumerate()
            .map(|(index, svc)| ItemListEntry {
                position: index + 1,
                name: svc.name.clone(),
                url: service_url(origin, svc.slug),
                item: Reference::new(service_id(origin, svc.slug)),
            })
            .collect(),
    }
}
