//! Content-type dispatch between file nodes and their sub-models.
//!
//! # Responsibility
//! - Produce fresh, empty content for each content type.
//! - Map a file node to the sub-model presentation it should show.
//! - Coerce stored (possibly mismatched) content into the expected shape.
//!
//! # Invariants
//! - Fresh content never reinterprets previous content of another type.
//! - Coercion never fails: unusable stored content becomes fresh content.
//! - An empty stored array is kept as empty content of the expected type.

use crate::model::board::{BoardModel, Column};
use crate::model::content::{ContentType, NoteContent};
use crate::model::grid::{GridModel, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
use crate::model::node::Node;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from dispatcher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Grid dimensions must both be non-zero.
    InvalidGridSize { rows: usize, cols: usize },
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGridSize { rows, cols } => {
                write!(f, "grid size must be non-zero, got {rows}x{cols}")
            }
        }
    }
}

impl Error for DispatchError {}

/// Borrowed sub-model presentation for one file node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView<'a> {
    Text(&'a str),
    Grid(&'a GridModel),
    Board(&'a BoardModel),
}

impl ContentView<'_> {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Text(_) => ContentType::PlainText,
            Self::Grid(_) => ContentType::Grid,
            Self::Board(_) => ContentType::Board,
        }
    }
}

/// Stored content shape before it is bound to a content type.
///
/// Matches the serialized forms: a markup string, rows of cell strings, or
/// a list of board columns. An empty array parses as `Grid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    Text(String),
    Grid(Vec<Vec<String>>),
    Board(Vec<Column>),
}

impl From<&NoteContent> for RawContent {
    fn from(value: &NoteContent) -> Self {
        match value {
            NoteContent::Text(text) => Self::Text(text.clone()),
            NoteContent::Grid(grid) => Self::Grid(grid.to_rows()),
            NoteContent::Board(board) => Self::Board(board.columns().to_vec()),
        }
    }
}

/// Maps content types to sub-models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTypeDispatcher {
    grid_rows: usize,
    grid_cols: usize,
}

impl ContentTypeDispatcher {
    /// Creates a dispatcher that builds `rows x cols` grids.
    ///
    /// # Errors
    /// - `DispatchError::InvalidGridSize` when either dimension is zero.
    pub fn with_grid_size(rows: usize, cols: usize) -> Result<Self, DispatchError> {
        if rows == 0 || cols == 0 {
            return Err(DispatchError::InvalidGridSize { rows, cols });
        }
        Ok(Self {
            grid_rows: rows,
            grid_cols: cols,
        })
    }

    pub fn grid_size(&self) -> (usize, usize) {
        (self.grid_rows, self.grid_cols)
    }

    /// Builds empty content of `content_type`.
    pub fn fresh_content(&self, content_type: ContentType) -> NoteContent {
        match content_type {
            ContentType::PlainText => NoteContent::Text(String::new()),
            ContentType::Grid => NoteContent::Grid(GridModel::new(self.grid_rows, self.grid_cols)),
            ContentType::Board => NoteContent::Board(BoardModel::default()),
        }
    }

    /// Returns the presentation for a file node; `None` for folders.
    pub fn view(node: &Node) -> Option<ContentView<'_>> {
        node.content().map(|content| match content {
            NoteContent::Text(text) => ContentView::Text(text.as_str()),
            NoteContent::Grid(grid) => ContentView::Grid(grid),
            NoteContent::Board(board) => ContentView::Board(board),
        })
    }

    /// Binds stored content to `content_type`.
    ///
    /// Stored content whose shape matches is kept, including an empty
    /// array. Missing or mismatched content becomes fresh content.
    pub fn coerce(&self, content_type: ContentType, raw: Option<RawContent>) -> NoteContent {
        let coerced = match (content_type, raw) {
            (ContentType::PlainText, Some(RawContent::Text(text))) => Some(NoteContent::Text(text)),
            (ContentType::Grid, Some(RawContent::Grid(rows))) => {
                Some(NoteContent::Grid(GridModel::from_rows(rows)))
            }
            (ContentType::Board, Some(RawContent::Board(columns))) => {
                Some(NoteContent::Board(BoardModel::from_columns(columns)))
            }
            // `[]` parses as `Grid`; for a board it means no columns.
            (ContentType::Board, Some(RawContent::Grid(rows))) if rows.is_empty() => {
                Some(NoteContent::Board(BoardModel::from_columns(Vec::new())))
            }
            _ => None,
        };

        coerced.unwrap_or_else(|| {
            debug!(
                "event=content_coerce module=dispatch status=fresh content_type={}",
                content_type
            );
            self.fresh_content(content_type)
        })
    }
}

impl Default for ContentTypeDispatcher {
    fn default() -> Self {
        Self {
            grid_rows: DEFAULT_GRID_ROWS,
            grid_cols: DEFAULT_GRID_COLS,
        }
    }
}
