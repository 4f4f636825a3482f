//! Tree fold: structural merge of one source's top-level groups.

use logweave_core::{Category, LoggerIdentity, Node};

use super::APPENDER_REF;
use crate::resolver::{PluginResolver, FILTERS};

/// Fold every immediate child of `source` into `target`, in source order
pub(crate) fn fold_children(target: &mut Node, mut source: Node, resolver: &dyn PluginResolver) {
    for child in source.take_children() {
        if resolver.is_filter(&child) {
            if let Err(filter) = fold_filter(target, child, resolver) {
                append_unmerged(target, filter);
            }
            continue;
        }

        match target.position(|existing| existing.same_name(child.name())) {
            Some(index) => merge_matched(&mut target.children_mut()[index], child, resolver),
            None => append_unmerged(target, child),
        }
    }
}

/// Fold `filter` into the filter already present at `scope`.
///
/// Hands the filter back when `scope` has no filter yet.
fn fold_filter(scope: &mut Node, filter: Node, resolver: &dyn PluginResolver) -> Result<(), Node> {
    let Some(index) = scope.position(|child| resolver.is_filter(child)) else {
        return Err(filter);
    };

    if resolver.is_filter_group(&scope.children()[index]) {
        tracing::debug!(scope = scope.name(), filter = filter.name(), "adding filter to group");
        scope.children_mut()[index].push_child(filter);
        return Ok(());
    }

    let descriptor = resolver.group_descriptor(FILTERS);
    let existing = scope.remove_child(index);
    tracing::debug!(
        scope = scope.name(),
        existing = existing.name(),
        filter = filter.name(),
        "grouping filters into {}",
        descriptor.element_name
    );

    let group = Node::with_category(descriptor.element_name, descriptor.category)
        .with_child(existing)
        .with_child(filter);
    scope.insert_child(index, group);
    Ok(())
}

/// Anything without a structural match lands at the end, except properties
/// which must be available before anything that substitutes them
fn append_unmerged(target: &mut Node, node: Node) {
    tracing::debug!(element = node.name(), "appending unmerged element");
    if node.category() == Category::PropertiesGroup {
        target.insert_child(0, node);
    } else {
        target.push_child(node);
    }
}

fn merge_matched(target: &mut Node, mut source: Node, resolver: &dyn PluginResolver) {
    tracing::debug!(element = target.name(), category = %target.category(), "merging element");
    let category = target.category();
    if category.is_keyed_group() {
        for entry in source.take_children() {
            replace_by_identity(target, entry);
        }
    } else if category == Category::LoggersGroup {
        merge_loggers(target, source, resolver);
    } else {
        target.children_mut().extend(source.take_children());
    }
}

/// Replace every same-named entry wholesale, then append
fn replace_by_identity(target: &mut Node, entry: Node) {
    target
        .children_mut()
        .retain(|existing| !existing.same_identity(&entry));
    target.push_child(entry);
}

fn merge_loggers(loggers: &mut Node, mut source: Node, resolver: &dyn PluginResolver) {
    for logger in source.take_children() {
        if resolver.is_filter(&logger) {
            if let Err(filter) = fold_filter(loggers, logger, resolver) {
                loggers.push_child(filter);
            }
            continue;
        }

        let identity = LoggerIdentity::of(&logger);
        let found = loggers.position(|existing| {
            !resolver.is_filter(existing) && LoggerIdentity::of(existing) == identity
        });

        match found {
            Some(index) => merge_logger(&mut loggers.children_mut()[index], logger, resolver),
            None => {
                tracing::debug!(logger = ?identity, "adding logger");
                loggers.push_child(logger);
            },
        }
    }
}

fn merge_logger(target: &mut Node, mut source: Node, resolver: &dyn PluginResolver) {
    tracing::debug!(logger = ?LoggerIdentity::of(target), "merging logger");
    target.attributes_mut().merge_from(source.attributes());

    for child in source.take_children() {
        if resolver.is_filter(&child) {
            if let Err(filter) = fold_filter(target, child, resolver) {
                target.push_child(filter);
            }
        } else if child.same_name(APPENDER_REF) {
            target
                .children_mut()
                .retain(|existing| !existing.same_reference(&child));
            target.push_child(child);
        } else {
            replace_by_identity(target, child);
        }
    }
}
