//! Kanban board sub-model.
//!
//! # Responsibility
//! - Hold ordered columns of ordered cards.
//! - Provide append, move-between-columns and in-place text edit.
//!
//! # Invariants
//! - Card ids are unique across the whole board, not only within a column.
//! - Column set and order are fixed once the board is constructed.
//! - Moves are computed from the pre-move snapshot; a card is never dropped
//!   or duplicated, and no placeholder card is ever inserted.
//! - Unknown column/card ids leave the board unchanged.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable card identifier, unique within one board.
pub type CardId = Uuid;

/// Column id of the default "To Do" stage.
pub const TODO_COLUMN_ID: &str = "todo";
/// Column id of the default "In Progress" stage.
pub const IN_PROGRESS_COLUMN_ID: &str = "inprogress";
/// Column id of the default "Done" stage.
pub const DONE_COLUMN_ID: &str = "done";

const DEFAULT_COLUMNS: &[(&str, &str)] = &[
    (TODO_COLUMN_ID, "To Do"),
    (IN_PROGRESS_COLUMN_ID, "In Progress"),
    (DONE_COLUMN_ID, "Done"),
];

/// Errors from board input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Card text is blank after trim.
    BlankCardText,
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankCardText => write!(f, "card text must not be blank"),
        }
    }
}

impl Error for BoardError {}

/// Display-order direction for left/right card moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

/// One task item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// Serialized as `content` to match the stored board shape.
    #[serde(rename = "content")]
    pub text: String,
}

impl Card {
    /// Creates a card with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

/// One named stage holding ordered cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    fn position_of(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }
}

/// Ordered list of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardModel {
    columns: Vec<Column>,
}

impl BoardModel {
    /// Creates a board from explicit columns.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    /// Total number of cards across all columns.
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    /// Locates a card by id, scanning every column in display order.
    pub fn find_card(&self, card_id: CardId) -> Option<(&Column, &Card)> {
        self.columns.iter().find_map(|column| {
            column
                .cards
                .iter()
                .find(|card| card.id == card_id)
                .map(|card| (column, card))
        })
    }

    /// Appends a new card to the named column.
    ///
    /// The text is stored as typed; trimming only decides whether it is blank.
    ///
    /// # Errors
    /// - `BoardError::BlankCardText` when `text` is blank after trim.
    pub fn add_card(&self, column_id: &str, text: impl Into<String>) -> Result<Self, BoardError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(BoardError::BlankCardText);
        }

        let mut next = self.clone();
        if let Some(column) = next.column_mut(column_id) {
            column.cards.push(Card::new(text));
        }
        Ok(next)
    }

    /// Moves one card from `from` to the end of `to`.
    pub fn move_card(&self, card_id: CardId, from: &str, to: &str) -> Self {
        if from == to {
            return self.clone();
        }
        let Some(from_index) = self.column_index(from) else {
            return self.clone();
        };
        let Some(to_index) = self.column_index(to) else {
            return self.clone();
        };
        let Some(card_index) = self.columns[from_index].position_of(card_id) else {
            return self.clone();
        };

        let mut next = self.clone();
        let card = next.columns[from_index].cards.remove(card_index);
        next.columns[to_index].cards.push(card);
        next
    }

    /// Replaces one card's text in place.
    pub fn update_card_text(
        &self,
        column_id: &str,
        card_id: CardId,
        text: impl Into<String>,
    ) -> Self {
        let mut next = self.clone();
        let target = next
            .column_mut(column_id)
            .and_then(|column| column.cards.iter_mut().find(|card| card.id == card_id));
        if let Some(card) = target {
            card.text = text.into();
        }
        next
    }

    /// Returns the column adjacent to `column_id` in display order.
    pub fn neighbor_column(&self, column_id: &str, direction: MoveDirection) -> Option<&Column> {
        let index = self.column_index(column_id)?;
        let neighbor = match direction {
            MoveDirection::Left => index.checked_sub(1)?,
            MoveDirection::Right => index + 1,
        };
        self.columns.get(neighbor)
    }

    /// Returns whether cards in `column_id` can move in `direction`.
    pub fn can_move(&self, column_id: &str, direction: MoveDirection) -> bool {
        self.neighbor_column(column_id, direction).is_some()
    }

    /// Moves a card to the neighbor column; no-op at the board edge.
    pub fn move_card_toward(&self, card_id: CardId, from: &str, direction: MoveDirection) -> Self {
        match self.neighbor_column(from, direction) {
            Some(target) => self.move_card(card_id, from, target.id.as_str()),
            None => self.clone(),
        }
    }

    fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == column_id)
    }

    fn column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == column_id)
    }
}

impl Default for BoardModel {
    /// Three empty columns: To Do, In Progress, Done.
    fn default() -> Self {
        Self::from_columns(
            DEFAULT_COLUMNS
                .iter()
                .map(|(id, title)| Column::new(*id, *title))
                .collect(),
        )
    }
}
