//! Core domain logic for NoteKit.
//! This crate owns the document tree, its content sub-models and the
//! selection session that turns UI intents into state transitions.

pub mod logging;
pub mod model;
pub mod service;
pub mod snapshot;
pub mod tree;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{
    BoardError, BoardModel, Card, CardId, Column, MoveDirection, DONE_COLUMN_ID,
    IN_PROGRESS_COLUMN_ID, TODO_COLUMN_ID,
};
pub use model::content::{ContentType, NoteContent};
pub use model::grid::{GridError, GridModel, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
pub use model::node::{Node, NodeBody, NodeId, NodeKind};
pub use service::content_dispatch::{ContentTypeDispatcher, ContentView, DispatchError, RawContent};
pub use service::selection::{SelectionSession, SessionError};
pub use snapshot::{export_json, import_json, SnapshotError, SNAPSHOT_VERSION};
pub use tree::note_tree::{NoteTree, TreeWalk};
pub use tree::sample::sample_tree;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
