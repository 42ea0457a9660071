//! Node sets for the site's page kinds.
//!
//! The site document (Organization + WebSite) is emitted once, on the home
//! page; every other page references those nodes by id.

use crate::graph::SchemaGraph;
use crate::ids::{SERVICES_HUB_PATH, service_path};
use crate::nodes::{
    BreadcrumbItem, ITEM_LIST_DESCRIPTION, ServiceData, WebPageParams, build_breadcrumb_list, build_item_list,
    build_organization, build_service, build_web_page, build_web_site,
};
use nextara_core::{ServicePage, ServiceRegistry};

pub const HOME_CRUMB: &str = "Home";
pub const SERVICES_CRUMB: &str = "Services";
pub const SERVICES_HUB_TITLE: &str = "Services — NexTara AI Solutions";

/// Organization and WebSite.
pub fn site_graph(origin: &str) -> SchemaGraph {
    SchemaGraph::new()
        .with(build_organization(origin))
        .with(build_web_site(origin))
}

/// A plain content page: WebPage plus Home › `title` breadcrumbs.
pub fn content_page_graph(origin: &str, path: &str, title: &str, description: &str) -> SchemaGraph {
    let crumbs = [
        BreadcrumbItem::new(HOME_CRUMB, "/"),
        BreadcrumbItem::new(title, path),
    ];
    SchemaGraph::new()
        .with(build_web_page(&WebPageParams {
            origin,
            path,
            title,
            description,
        }))
        .with(build_breadcrumb_list(origin, &crumbs))
}

/// A service landing page: WebPage, Home › Services › name breadcrumbs, Service.
pub fn service_page_graph(origin: &str, page: &ServicePage) -> SchemaGraph {
    let path = service_path(page.slug);
    let crumbs = [
        BreadcrumbItem::new(HOME_CRUMB, "/"),
        BreadcrumbItem::new(SERVICES_CRUMB, SERVICES_HUB_PATH),
        BreadcrumbItem::new(page.name.as_str(), path.as_str()),
    ];
    SchemaGraph::new()
        .with(build_web_page(&WebPageParams {
            origin,
            path: &path,
            title: &page.seo_title,
            description: &page.meta_description,
        }))
        .with(build_breadcrumb_list(origin, &crumbs))
        .with(build_service(origin, &ServiceData::from(page)))
}

/// The services hub: WebPage, Home › Services breadcrumbs, and the ItemList of
/// every service in registry `order`.
pub fn services_hub_graph(origin: &str, registry: &ServiceRegistry) -> SchemaGraph {
    let services: Vec<ServiceData> = registry
        .get_all_services()
        .into_iter()
        .map(ServiceData::from)
        .collect();
    let crumbs = [
        BreadcrumbItem::new(HOME_CRUMB, "/"),
        BreadcrumbItem::new(SERVICES_CRUMB, SERVICES_HUB_PATH),
    ];
    SchemaGraph::new()
        .with(build_web_page(&WebPageParams {
            origin,
            path: SERVICES_HUB_PATH,
            title: SERVICES_HUB_TITLE,
            description: ITEM_LIST_DESCRIPTION,
        }))
        .with(build_breadcrumb_list(origin, &crumbs))
        .with(build_item_list(origin, &services))
}
