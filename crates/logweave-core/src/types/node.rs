//! Configuration element tree.
//!
//! A `Node` is one element of a parsed configuration document: an element
//! kind (`Appenders`, `Logger`, `ThresholdFilter`, ...), a resolved category,
//! attributes and ordered children. Children are owned exclusively; the
//! parent of a node is whichever node holds it.

use super::attributes::{eq_folded, Attributes};
use super::category::Category;

/// Attribute holding the identity of keyed entries (appenders, properties, loggers)
pub const NAME_ATTRIBUTE: &str = "name";

/// Attribute holding the target of an `AppenderRef`
pub const REF_ATTRIBUTE: &str = "ref";

/// Configuration element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    category: Category,
    attributes: Attributes,
    children: Vec<Node>,
}

/// Identity of a logger inside a `Loggers` group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoggerIdentity {
    /// The single unnamed root logger
    Root,
    /// A named logger; names are case-sensitive
    Named(String),
}

impl LoggerIdentity {
    /// Derive the identity of a logger element from its `name` attribute
    pub fn of(node: &Node) -> Self {
        match node.attr(NAME_ATTRIBUTE) {
            Some(name) if !name.is_empty() => LoggerIdentity::Named(name.to_string()),
            _ => LoggerIdentity::Root,
        }
    }
}

impl Node {
    /// Create an element with no category resolved yet
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_category(name, Category::Other)
    }

    /// Create an element with a known category
    pub fn with_category(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Element kind as written in the document
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive element kind comparison
    pub fn same_name(&self, name: &str) -> bool {
        eq_folded(&self.name, name)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Attribute value by case-insensitive key
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Set an attribute, returning the previous value
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.attributes.insert(key, value)
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }

    /// Identity key of a keyed entry (its `name` attribute)
    pub fn identity_key(&self) -> Option<&str> {
        self.attr(NAME_ATTRIBUTE)
    }

    /// Whether both nodes carry the same `name` identity, ignoring case.
    ///
    /// Nodes without a name have no identity and never match.
    pub fn same_identity(&self, other: &Node) -> bool {
        match (self.identity_key(), other.identity_key()) {
            (Some(a), Some(b)) => eq_folded(a, b),
            _ => false,
        }
    }

    /// Whether both nodes reference the same appender, ignoring case
    pub fn same_reference(&self, other: &Node) -> bool {
        match (self.attr(REF_ATTRIBUTE), other.attr(REF_ATTRIBUTE)) {
            (Some(a), Some(b)) => eq_folded(a, b),
            _ => false,
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Insert a child at `index`, shifting later children back
    pub fn insert_child(&mut self, index: usize, child: Node) {
        self.children.insert(index, child);
    }

    /// Remove and return the child at `index`
    pub fn remove_child(&mut self, index: usize) -> Node {
        self.children.remove(index)
    }

    /// Replace the child at `index`, returning the old one
    pub fn replace_child(&mut self, index: usize, child: Node) -> Node {
        std::mem::replace(&mut self.children[index], child)
    }

    /// Index of the first child matching `predicate`
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Node) -> bool,
    {
        self.children.iter().position(predicate)
    }

    /// First child with the given element kind, ignoring case
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.same_name(name))
    }

    /// Detach and return every child
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Visit this node and every descendant, parents first
    pub fn walk_mut<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Node),
    {
        visit(self);
        for child in &mut self.children {
            child.walk_mut(visit);
        }
    }

    /// Total number of nodes in this tree
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }
}
