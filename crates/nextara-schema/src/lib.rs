//! Structured-data (JSON-LD / schema.org) graph construction.
//!
//! Every `@id` in the graph is derived from one origin through [`url`] and
//! [`ids`], so nodes built independently on different pages reference each
//! other by exact string. [`nodes`] builds the typed node documents,
//! [`graph`] wraps them into a serializable `@graph` document, and [`pages`]
//! assembles the per-page node sets.

pub mod graph;
pub mod ids;
pub mod nodes;
pub mod pages;
pub mod url;

pub use graph::SchemaGraph;
pub use nodes::{Reference, SchemaNode};
