//! Plugin capability queries.
//!
//! The merge engine never inspects component types itself. It asks a
//! `PluginResolver` whether an element is a filter or a filter group, which
//! category an element kind belongs to, and how to tag a synthesized filter
//! group.

use std::collections::HashSet;

use logweave_core::{eq_folded, Category, FilterKind, Node};

/// Element name of the standard filter group
pub const FILTERS: &str = "Filters";

/// Describes the node to synthesize when two filters meet at the same scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDescriptor {
    /// Element name of the group node
    pub element_name: String,
    /// Category the group node is tagged with
    pub category: Category,
}

/// Capability queries answered by the plugin layer
pub trait PluginResolver: Send + Sync {
    /// Resolve the category of an element kind
    fn category_of(&self, element_name: &str) -> Category;

    /// Whether the node is filter-bearing
    fn is_filter(&self, node: &Node) -> bool {
        node.category().is_filter()
    }

    /// Whether the node is a filter group
    fn is_filter_group(&self, node: &Node) -> bool {
        node.category().is_filter_group()
    }

    /// Descriptor of the group node used for `category_name`
    fn group_descriptor(&self, category_name: &str) -> GroupDescriptor;

    /// Tag every node of `tree` with its resolved category
    fn categorize(&self, tree: &mut Node) {
        tree.walk_mut(&mut |node: &mut Node| {
            let category = self.category_of(node.name());
            node.set_category(category);
        });
    }
}

/// Resolver for the standard element vocabulary
#[derive(Debug, Clone, Default)]
pub struct DefaultPluginResolver {
    /// Extra element kinds, lowercased, that act as single filters
    filter_plugins: HashSet<String>,
}

impl DefaultPluginResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element kind that does not follow the `*Filter` naming
    pub fn with_filter_plugin(mut self, element_name: &str) -> Self {
        self.filter_plugins.insert(element_name.to_lowercase());
        self
    }
}

impl PluginResolver for DefaultPluginResolver {
    fn category_of(&self, element_name: &str) -> Category {
        let lowered = element_name.to_lowercase();
        match lowered.as_str() {
            "properties" => Category::PropertiesGroup,
            "scripts" => Category::ScriptsGroup,
            "appenders" => Category::AppendersGroup,
            "loggers" => Category::LoggersGroup,
            "filters" => Category::Filter(FilterKind::Composite),
            name if name.ends_with("filter") || self.filter_plugins.contains(name) => {
                Category::Filter(FilterKind::Simple)
            },
            _ => Category::Other,
        }
    }

    fn group_descriptor(&self, category_name: &str) -> GroupDescriptor {
        // Only filters are ever grouped; other names fall back to the filter group.
        if !eq_folded(category_name, FILTERS) {
            tracing::debug!(category = category_name, "no group plugin, using {}", FILTERS);
        }
        GroupDescriptor {
            element_name: FILTERS.to_string(),
            category: Category::Filter(FilterKind::Composite),
        }
    }
}
