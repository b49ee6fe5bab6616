//! Snapshot translation between `NoteTree` and a JSON document.
//!
//! # Responsibility
//! - Serialize every node field (id, name, kind, content type, children,
//!   content) without loss.
//! - Validate and coerce imported documents before building a tree.
//!
//! # Invariants
//! - `import_json(export_json(tree))` reproduces `tree` field for field.
//! - Imported trees never contain duplicate node ids, and imported boards
//!   never repeat a column id or a card id.
//! - The core never reads or writes files; callers own storage.

mod json;

pub use json::{export_json, import_json, SnapshotError, SNAPSHOT_VERSION};
