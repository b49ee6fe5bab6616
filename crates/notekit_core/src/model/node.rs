//! Tree node model.
//!
//! # Responsibility
//! - Define the folder/file element stored by `NoteTree`.
//! - Keep kind-specific payloads (children vs content) in one sum type.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes or gets reused.
//! - `kind` is fixed at creation: a folder never gains content and a file
//!   never gains children.
//! - Children are held behind `Arc` so tree versions can share subtrees.

use crate::model::content::{ContentType, NoteContent};
use std::sync::Arc;
use uuid::Uuid;

/// Stable tree node identifier.
pub type NodeId = Uuid;

/// Structural kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Grouping node with ordered children.
    Folder,
    /// Leaf node carrying note content.
    File,
}

/// Kind-specific node payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    Folder { children: Vec<Arc<Node>> },
    File { content: NoteContent },
}

/// One element of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: String,
    body: NodeBody,
}

impl Node {
    /// Creates an empty folder with a fresh id.
    pub fn folder(name: impl Into<String>) -> Self {
        Self::folder_with_id(Uuid::new_v4(), name, Vec::new())
    }

    /// Creates a plain-text file with empty content and a fresh id.
    pub fn file(name: impl Into<String>) -> Self {
        Self::file_with_id(Uuid::new_v4(), name, NoteContent::default())
    }

    /// Creates a folder with a caller-provided id and children.
    ///
    /// Used by snapshot import where identity already exists.
    pub fn folder_with_id(id: NodeId, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id,
            name: name.into(),
            body: NodeBody::Folder {
                children: children.into_iter().map(Arc::new).collect(),
            },
        }
    }

    /// Creates a file with a caller-provided id and content.
    pub fn file_with_id(id: NodeId, name: impl Into<String>, content: NoteContent) -> Self {
        Self {
            id,
            name: name.into(),
            body: NodeBody::File { content },
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::Folder { .. } => NodeKind::Folder,
            NodeBody::File { .. } => NodeKind::File,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == NodeKind::Folder
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    /// Ordered children; empty for files.
    pub fn children(&self) -> &[Arc<Node>] {
        match &self.body {
            NodeBody::Folder { children } => children,
            NodeBody::File { .. } => &[],
        }
    }

    /// File content; `None` for folders.
    pub fn content(&self) -> Option<&NoteContent> {
        match &self.body {
            NodeBody::File { content } => Some(content),
            NodeBody::Folder { .. } => None,
        }
    }

    /// File content type; `None` for folders.
    pub fn content_type(&self) -> Option<ContentType> {
        self.content().map(NoteContent::content_type)
    }

    pub(crate) fn with_name(&self, name: String) -> Self {
        Self {
            id: self.id,
            name,
            body: self.body.clone(),
        }
    }

    /// Returns a copy with new content; `None` for folders.
    pub(crate) fn with_content(&self, content: NoteContent) -> Option<Self> {
        match self.body {
            NodeBody::File { .. } => Some(Self {
                id: self.id,
                name: self.name.clone(),
                body: NodeBody::File { content },
            }),
            NodeBody::Folder { .. } => None,
        }
    }

    /// Returns a copy with new children; `None` for files.
    pub(crate) fn with_children(&self, children: Vec<Arc<Node>>) -> Option<Self> {
        match self.body {
            NodeBody::Folder { .. } => Some(Self {
                id: self.id,
                name: self.name.clone(),
                body: NodeBody::Folder { children },
            }),
            NodeBody::File { .. } => None,
        }
    }
}
