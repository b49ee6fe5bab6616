//! Note content types and the content sum type.
//!
//! # Invariants
//! - A file's content type is derived from its `NoteContent` variant, so the
//!   tag and the stored shape can never disagree.

use crate::model::board::BoardModel;
use crate::model::grid::GridModel;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Presentation tag for a file node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// Rich text stored as an opaque markup string.
    #[default]
    #[serde(rename = "regular")]
    PlainText,
    /// Fixed-size text grid.
    #[serde(rename = "table")]
    Grid,
    /// Kanban board.
    #[serde(rename = "kanban")]
    Board,
}

impl ContentType {
    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlainText => "regular",
            Self::Grid => "table",
            Self::Board => "kanban",
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content held by a file node; one variant per `ContentType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteContent {
    /// Editor markup, stored and returned verbatim.
    Text(String),
    Grid(GridModel),
    Board(BoardModel),
}

impl NoteContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Text(_) => ContentType::PlainText,
            Self::Grid(_) => ContentType::Grid,
            Self::Board(_) => ContentType::Board,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_grid(&self) -> Option<&GridModel> {
        match self {
            Self::Grid(grid) => Some(grid),
            _ => None,
        }
    }

    pub fn as_board(&self) -> Option<&BoardModel> {
        match self {
            Self::Board(board) => Some(board),
            _ => None,
        }
    }
}

impl Default for NoteContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}
