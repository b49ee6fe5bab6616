//! Persistent document tree.
//!
//! # Responsibility
//! - Own the forest of folder/file nodes.
//! - Provide id-addressed find/insert/rename/content operations.
//!
//! # Invariants
//! - Node ids are unique across the whole tree.
//! - Every write returns a new tree; only the root-to-target path is rebuilt
//!   and every other subtree is the same `Arc` as before.
//! - Sibling order is preserved by every write.
//! - Unknown ids and wrong node kinds leave the tree unchanged.

use crate::model::content::{ContentType, NoteContent};
use crate::model::node::{Node, NodeId};
use crate::service::content_dispatch::ContentTypeDispatcher;
use log::debug;
use std::sync::Arc;

/// Immutable forest of document nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteTree {
    roots: Vec<Arc<Node>>,
}

impl NoteTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree from root-level nodes.
    ///
    /// Callers are responsible for id uniqueness; snapshot import checks it
    /// before calling this.
    pub fn from_roots(roots: Vec<Node>) -> Self {
        Self {
            roots: roots.into_iter().map(Arc::new).collect(),
        }
    }

    /// Root-level nodes in display order.
    pub fn roots(&self) -> &[Arc<Node>] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Pre-order depth-first lookup.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.find_arc(id).map(|node| &**node)
    }

    /// Pre-order lookup returning the shared handle.
    pub fn find_arc(&self, id: NodeId) -> Option<&Arc<Node>> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find_arc(id).is_some()
    }

    /// Returns the folder holding `id`; `None` for root-level or unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<&Node> {
        self.iter()
            .map(|(_, node)| node)
            .find(|node| node.children().iter().any(|child| child.id() == id))
    }

    /// Lists children of a folder, or root nodes when `parent` is `None`.
    ///
    /// Returns `None` when `parent` does not resolve to a folder.
    pub fn children_of(&self, parent: Option<NodeId>) -> Option<&[Arc<Node>]> {
        match parent {
            None => Some(&self.roots),
            Some(parent_id) => self
                .find(parent_id)
                .filter(|node| node.is_folder())
                .map(Node::children),
        }
    }

    /// Walks every node in pre-order with its depth (roots are depth 0).
    pub fn iter(&self) -> TreeWalk<'_> {
        TreeWalk {
            stack: self.roots.iter().rev().map(|node| (0, node)).collect(),
        }
    }

    /// Appends `node` to the root list or to folder `parent`'s children.
    ///
    /// No-op when `parent` is not a folder, or when any id in `node`'s
    /// subtree already exists in the tree.
    pub fn insert(&self, parent: Option<NodeId>, node: Node) -> Self {
        let node_id = node.id();
        if self.collides_with(&node) {
            debug!(
                "event=tree_insert module=tree status=noop reason=duplicate_id node_id={}",
                node_id
            );
            return self.clone();
        }

        let Some(parent_id) = parent else {
            let mut roots = self.roots.clone();
            roots.push(Arc::new(node));
            debug!(
                "event=tree_insert module=tree status=ok parent=root node_id={}",
                node_id
            );
            return Self { roots };
        };

        let mut edit = Some(move |target: &Node| {
            let mut children = target.children().to_vec();
            children.push(Arc::new(node));
            target.with_children(children)
        });
        self.finish("insert", parent_id, rebuild_path(&self.roots, parent_id, &mut edit))
    }

    /// Replaces the content of file `id`.
    ///
    /// The content type is not changed here: content of another variant is
    /// ignored, use `update_content_type` to switch types.
    pub fn update_content(&self, id: NodeId, content: NoteContent) -> Self {
        let mut edit = Some(move |target: &Node| {
            if target.content_type() != Some(content.content_type()) {
                return None;
            }
            target.with_content(content)
        });
        self.finish("update_content", id, rebuild_path(&self.roots, id, &mut edit))
    }

    /// Switches file `id` to `content_type`.
    ///
    /// When the type changes, the dispatcher's fresh content is installed in
    /// the same rebuilt node. The same type keeps the existing content.
    pub fn update_content_type(
        &self,
        id: NodeId,
        content_type: ContentType,
        dispatcher: &ContentTypeDispatcher,
    ) -> Self {
        let mut edit = Some(|target: &Node| {
            if target.content_type()? == content_type {
                return None;
            }
            target.with_content(dispatcher.fresh_content(content_type))
        });
        self.finish(
            "update_content_type",
            id,
            rebuild_path(&self.roots, id, &mut edit),
        )
    }

    /// Renames node `id`.
    pub fn rename(&self, id: NodeId, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut edit = Some(move |target: &Node| Some(target.with_name(name)));
        self.finish("rename", id, rebuild_path(&self.roots, id, &mut edit))
    }

    fn finish(&self, op: &str, id: NodeId, rebuilt: Option<Vec<Arc<Node>>>) -> Self {
        match rebuilt {
            Some(roots) => {
                debug!("event=tree_{op} module=tree status=ok node_id={id}");
                Self { roots }
            }
            None => {
                debug!("event=tree_{op} module=tree status=noop node_id={id}");
                self.clone()
            }
        }
    }

    fn collides_with(&self, node: &Node) -> bool {
        let mut pending = vec![node];
        while let Some(current) = pending.pop() {
            if self.contains(current.id()) {
                return true;
            }
            pending.extend(current.children().iter().map(|child| &**child));
        }
        false
    }
}

/// Pre-order iterator over `(depth, node)` pairs.
pub struct TreeWalk<'a> {
    stack: Vec<(usize, &'a Arc<Node>)>,
}

impl<'a> Iterator for TreeWalk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, &**node))
    }
}

fn find_in(nodes: &[Arc<Node>], id: NodeId) -> Option<&Arc<Node>> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Rebuilds the path from `nodes` down to node `id`.
///
/// Returns `None` when `id` is missing or `edit` declines the change; the
/// caller then keeps its current tree.
fn rebuild_path<F>(nodes: &[Arc<Node>], id: NodeId, edit: &mut Option<F>) -> Option<Vec<Arc<Node>>>
where
    F: FnOnce(&Node) -> Option<Node>,
{
    for (index, node) in nodes.iter().enumerate() {
        let replacement = if node.id() == id {
            let edit = edit.take()?;
            edit(node)?
        } else {
            match rebuild_path(node.children(), id, edit) {
                Some(children) => node.with_children(children)?,
                None => continue,
            }
        };

        let mut rebuilt = nodes.to_vec();
        rebuilt[index] = Arc::new(replacement);
        return Some(rebuilt);
    }
    None
}
