//! JSON snapshot document format.

use crate::model::board::Column;
use crate::model::content::ContentType;
use crate::model::node::{Node, NodeBody, NodeId};
use crate::service::content_dispatch::{ContentTypeDispatcher, RawContent};
use crate::tree::note_tree::NoteTree;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current snapshot document version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors from snapshot translation.
#[derive(Debug)]
pub enum SnapshotError {
    /// Document is not valid JSON or does not match the expected shape.
    Json(serde_json::Error),
    /// Document version is not supported by this build.
    UnsupportedVersion(u32),
    /// The same node id appears more than once.
    DuplicateId(NodeId),
    /// A node record violates kind rules.
    InvalidNode { id: NodeId, reason: &'static str },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "{err}"),
            Self::UnsupportedVersion(version) => write!(
                f,
                "snapshot version {version} is not supported (expected {SNAPSHOT_VERSION})"
            ),
            Self::DuplicateId(id) => write!(f, "duplicate node id in snapshot: {id}"),
            Self::InvalidNode { id, reason } => write!(f, "invalid node {id}: {reason}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkspaceDocument {
    version: u32,
    items: Vec<NodeRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RecordKind {
    Folder,
    File,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    id: NodeId,
    name: String,
    /// Serialized as `type` to match the stored item shape.
    #[serde(rename = "type")]
    kind: RecordKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note_type: Option<ContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<NodeRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<RawContent>,
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        match node.body() {
            NodeBody::Folder { children } => Self {
                id: node.id(),
                name: node.name().to_string(),
                kind: RecordKind::Folder,
                note_type: None,
                children: Some(children.iter().map(|child| Self::from(&**child)).collect()),
                content: None,
            },
            NodeBody::File { content } => Self {
                id: node.id(),
                name: node.name().to_string(),
                kind: RecordKind::File,
                note_type: Some(content.content_type()),
                children: None,
                content: Some(RawContent::from(content)),
            },
        }
    }
}

/// Serializes `tree` into a pretty-printed JSON snapshot.
///
/// # Errors
/// - `SnapshotError::Json` when serialization fails.
pub fn export_json(tree: &NoteTree) -> Result<String, SnapshotError> {
    let document = WorkspaceDocument {
        version: SNAPSHOT_VERSION,
        items: tree
            .roots()
            .iter()
            .map(|node| NodeRecord::from(&**node))
            .collect(),
    };
    let json = serde_json::to_string_pretty(&document)?;
    info!(
        "event=snapshot_export module=snapshot status=ok nodes={} bytes={}",
        tree.len(),
        json.len()
    );
    Ok(json)
}

/// Parses a JSON snapshot into a tree.
///
/// File content is bound to its `note_type` (default `regular`) through
/// `dispatcher`; missing or mismatched content becomes fresh content.
///
/// # Errors
/// - `SnapshotError::Json` for malformed documents.
/// - `SnapshotError::UnsupportedVersion` for unknown versions.
/// - `SnapshotError::DuplicateId` when an id repeats anywhere in the tree.
/// - `SnapshotError::InvalidNode` when a file record carries children, or a
///   board repeats a column id or a card id.
pub fn import_json(
    json: &str,
    dispatcher: &ContentTypeDispatcher,
) -> Result<NoteTree, SnapshotError> {
    let document: WorkspaceDocument = serde_json::from_str(json)?;
    if document.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(document.version));
    }

    let mut seen = HashSet::new();
    let roots = document
        .items
        .into_iter()
        .map(|record| build_node(record, dispatcher, &mut seen))
        .collect::<Result<Vec<_>, _>>()?;

    let tree = NoteTree::from_roots(roots);
    info!(
        "event=snapshot_import module=snapshot status=ok nodes={}",
        seen.len()
    );
    Ok(tree)
}

fn build_node(
    record: NodeRecord,
    dispatcher: &ContentTypeDispatcher,
    seen: &mut HashSet<NodeId>,
) -> Result<Node, SnapshotError> {
    if !seen.insert(record.id) {
        return Err(SnapshotError::DuplicateId(record.id));
    }

    match record.kind {
        RecordKind::Folder => {
            let children = record
                .children
                .unwrap_or_default()
                .into_iter()
                .map(|child| build_node(child, dispatcher, seen))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::folder_with_id(record.id, record.name, children))
        }
        RecordKind::File => {
            if record.children.is_some_and(|children| !children.is_empty()) {
                return Err(SnapshotError::InvalidNode {
                    id: record.id,
                    reason: "file nodes cannot have children",
                });
            }
            let content_type = record.note_type.unwrap_or_default();
            if content_type == ContentType::Board {
                if let Some(RawContent::Board(columns)) = &record.content {
                    check_board_ids(record.id, columns)?;
                }
            }
            let content = dispatcher.coerce(content_type, record.content);
            Ok(Node::file_with_id(record.id, record.name, content))
        }
    }
}

/// Column ids are unique within a board, card ids across the whole board.
fn check_board_ids(id: NodeId, columns: &[Column]) -> Result<(), SnapshotError> {
    let mut column_ids = HashSet::new();
    let mut card_ids = HashSet::new();
    for column in columns {
        if !column_ids.insert(column.id.as_str()) {
            return Err(SnapshotError::InvalidNode {
                id,
                reason: "duplicate column id",
            });
        }
        if column.cards.iter().any(|card| !card_ids.insert(card.id)) {
            return Err(SnapshotError::InvalidNode {
                id,
                reason: "duplicate card id",
            });
        }
    }
    Ok(())
}
