//! JSON-LD document assembly for embedding in page output.

use crate::nodes::SchemaNode;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// An `{"@context", "@graph"}` document holding the nodes of one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaGraph {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@graph")]
    nodes: Vec<SchemaNode>,
}

impl Default for SchemaGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaGraph {
    pub fn new() -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            nodes: Vec::new(),
        }
    }

    /// Append a node, keeping insertion order.
    pub fn push(&mut self, node: impl Into<SchemaNode>) {
        self.nodes.push(node.into());
    }

    #[must_use]
    pub fn with(mut self, node: impl Into<SchemaNode>) -> Self {
        self.push(node);
        self
    }

    pub fn nodes(&self) -> &[SchemaNode] {
        &self.nodes
    }

    pub fn get(&self, id: &str) -> Option<&SchemaNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Referenced ids that no node in this document defines.
    ///
    /// Page documents normally reference the site-wide Organization and
    /// WebSite nodes, which live in the site document.
    pub fn external_references(&self) -> BTreeSet<&str> {
        let defined: BTreeSet<&str> = self.nodes.iter().map(|n| n.id()).collect();
        self.nodes
            .iter()
            .flat_map(|n| n.references())
            .map(|r| r.id.as_str())
            .filter(|id| !defined.contains(id))
            .collect()
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).context("failed to serialize JSON-LD graph")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize JSON-LD graph")
    }

    pub fn to_json_compact(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize JSON-LD graph")
    }

    /// Render as a `<script type="application/ld+json">` element.
    ///
    /// `</` is written as `<\/` so content cannot close the script element early.
    pub fn to_script_tag(&self) -> Result<String> {
        let json = self.to_json_compact()?.replace("</", "<\\/");
        Ok(format!(
            "<script type=\"application/ld+json\">{}</script>",
            json
        ))
    }
}
