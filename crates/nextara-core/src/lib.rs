//! Content layer for the NexTara marketing site.
//!
//! Provides the closed set of service slugs ([`slug::ServiceSlug`]), the
//! [`service::ServicePage`] record, the validated [`registry::ServiceRegistry`]
//! with its accessors, call-to-action resolution, site configuration, and the
//! [`site::Site`] startup step that ties configuration and registry together.

pub mod config;
pub mod cta;
pub mod registry;
pub mod service;
pub mod site;
pub mod slug;
pub mod validate;

pub use registry::{RegistryError, ServiceRegistry};
pub use service::ServicePage;
pub use site::Site;
pub use slug::ServiceSlug;
