//! JSON and TOML configuration documents.
//!
//! A document is a plain element tree:
//!
//! ```json
//! {
//!   "name": "Configuration",
//!   "attributes": { "status": "WARN", "monitorInterval": 30 },
//!   "children": [
//!     { "name": "Appenders", "children": [
//!       { "name": "Console", "attributes": { "name": "STDOUT" } }
//!     ] }
//!   ]
//! }
//! ```
//!
//! The same shape is accepted as TOML with `[attributes]` tables and
//! `[[children]]` arrays.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use logweave_core::{LogweaveError, Node};

use crate::source::{ConfigurationFactory, Locator, Source};
use crate::ConfigResult;

/// Serialized form of one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDocument {
    /// Element kind
    pub name: String,

    /// Element attributes; scalars of any type are read as text
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, Scalar>,

    /// Nested elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDocument>,
}

/// Attribute value as written in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Integer(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Flag(value) => write!(f, "{}", value),
        }
    }
}

impl NodeDocument {
    /// Convert into an element tree with unresolved categories
    pub fn into_node(self) -> Node {
        let mut node = Node::new(self.name);
        for (key, value) in self.attributes {
            node.set_attr(key, value.to_string());
        }
        for child in self.children {
            node.push_child(child.into_node());
        }
        node
    }

    /// Render an element tree back into document form
    pub fn from_node(node: &Node) -> Self {
        Self {
            name: node.name().to_string(),
            attributes: node
                .attributes()
                .iter()
                .map(|(key, value)| (key.to_string(), Scalar::Text(value.to_string())))
                .collect(),
            children: node.children().iter().map(NodeDocument::from_node).collect(),
        }
    }
}

/// Supported document syntaxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the syntax from the locator's extension
    pub fn from_locator(locator: &Locator) -> ConfigResult<Self> {
        match locator.extension().as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            other => Err(LogweaveError::UnsupportedFormat {
                locator: locator.to_string(),
                extension: other.unwrap_or_default().to_string(),
            }),
        }
    }

    /// Parse document text into an element tree
    pub fn parse(self, content: &str, origin: &str) -> ConfigResult<Node> {
        let document: NodeDocument = match self {
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| LogweaveError::parse(origin, e))?
            },
            DocumentFormat::Toml => {
                toml::from_str(content).map_err(|e| LogweaveError::parse(origin, e))?
            },
        };
        Ok(document.into_node())
    }

    /// Serialize an element tree
    pub fn render(self, node: &Node) -> ConfigResult<String> {
        let document = NodeDocument::from_node(node);
        match self {
            DocumentFormat::Json => serde_json::to_string_pretty(&document)
                .map_err(|e| LogweaveError::render(node.name(), e)),
            DocumentFormat::Toml => {
                toml::to_string_pretty(&document).map_err(|e| LogweaveError::render(node.name(), e))
            },
        }
    }
}

/// Loads JSON/TOML documents from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentFactory;

impl ConfigurationFactory for DocumentFactory {
    fn load(&self, locator: &Locator) -> ConfigResult<Source> {
        if !locator.path().is_file() {
            return Err(LogweaveError::UnresolvableLocator {
                locator: locator.to_string(),
            });
        }

        let format = DocumentFormat::from_locator(locator)?;
        let content = std::fs::read_to_string(locator.path()).map_err(|e| {
            LogweaveError::io(format!("Failed to read configuration: {}", locator), e)
        })?;
        let tree = format.parse(&content, locator.path().as_str())?;

        tracing::debug!(%locator, elements = tree.size(), "loaded configuration document");
        Ok(Source::new(tree).with_locator(locator.clone()))
    }
}
