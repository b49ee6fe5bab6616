//! Selection session: turns UI intents into tree transitions.
//!
//! # Responsibility
//! - Track the selected item, the active file and the expanded folders.
//! - Apply structural intents (add, rename, change type) to the tree.
//! - Forward sub-model edits to the active file and write the result back.
//!
//! # Invariants
//! - The active node is always read through the current tree, so reads
//!   reflect every mutation as soon as it returns.
//! - Each intent swaps the tree with one assignment after the new tree is
//!   fully built.
//! - Blank names are rejected before any state changes.

use crate::model::board::{BoardError, CardId, MoveDirection};
use crate::model::content::{ContentType, NoteContent};
use crate::model::grid::GridError;
use crate::model::node::{Node, NodeId, NodeKind};
use crate::service::content_dispatch::{ContentTypeDispatcher, ContentView};
use crate::tree::note_tree::NoteTree;
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from session intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Item name is blank after trim.
    BlankName,
    /// Grid edit was rejected.
    Grid(GridError),
    /// Board edit was rejected.
    Board(BoardError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "item name must not be blank"),
            Self::Grid(err) => write!(f, "{err}"),
            Self::Board(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BlankName => None,
            Self::Grid(err) => Some(err),
            Self::Board(err) => Some(err),
        }
    }
}

impl From<GridError> for SessionError {
    fn from(value: GridError) -> Self {
        Self::Grid(value)
    }
}

impl From<BoardError> for SessionError {
    fn from(value: BoardError) -> Self {
        Self::Board(value)
    }
}

/// Owns the current tree snapshot plus selection/expansion state.
#[derive(Debug, Clone, Default)]
pub struct SelectionSession {
    tree: NoteTree,
    dispatcher: ContentTypeDispatcher,
    selected_id: Option<NodeId>,
    active_id: Option<NodeId>,
    expanded: HashSet<NodeId>,
    root_expanded: bool,
}

impl SelectionSession {
    /// Creates a session over an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an existing tree.
    pub fn with_tree(tree: NoteTree) -> Self {
        Self::with_dispatcher(tree, ContentTypeDispatcher::default())
    }

    /// Creates a session with a configured dispatcher.
    pub fn with_dispatcher(tree: NoteTree, dispatcher: ContentTypeDispatcher) -> Self {
        Self {
            tree,
            dispatcher,
            ..Self::default()
        }
    }

    pub fn tree(&self) -> &NoteTree {
        &self.tree
    }

    /// Consumes the session and returns the final tree.
    pub fn into_tree(self) -> NoteTree {
        self.tree
    }

    pub fn dispatcher(&self) -> &ContentTypeDispatcher {
        &self.dispatcher
    }

    pub fn selected_id(&self) -> Option<NodeId> {
        self.selected_id
    }

    /// Active file node, read from the current tree.
    pub fn active_node(&self) -> Option<&Node> {
        self.active_id.and_then(|id| self.tree.find(id))
    }

    pub fn active_content_type(&self) -> Option<ContentType> {
        self.active_node().and_then(Node::content_type)
    }

    /// Sub-model presentation of the active file.
    pub fn active_view(&self) -> Option<ContentView<'_>> {
        self.active_node().and_then(ContentTypeDispatcher::view)
    }

    /// Returns whether a folder (or the root sentinel for `None`) is expanded.
    pub fn is_expanded(&self, id: Option<NodeId>) -> bool {
        match id {
            Some(id) => self.expanded.contains(&id),
            None => self.root_expanded,
        }
    }

    /// Selects `id`; files become active, anything else clears the active node.
    pub fn select(&mut self, id: NodeId) {
        self.selected_id = Some(id);
        let kind = self.tree.find(id).map(Node::kind);
        self.active_id = match kind {
            Some(NodeKind::File) => Some(id),
            _ => None,
        };
        debug!(
            "event=select module=session status=ok node_id={} active={}",
            id,
            self.active_id.is_some()
        );
    }

    /// Clears selection so new items land at the root.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
        self.active_id = None;
    }

    /// Flips the expanded state of folder `id`.
    pub fn toggle_expand(&mut self, id: NodeId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Switches the active file to `content_type` with fresh empty content.
    ///
    /// No-op without an active file or when the type is already in effect.
    pub fn change_active_type(&mut self, content_type: ContentType) {
        let Some(active_id) = self.active_id else {
            debug!("event=change_type module=session status=noop reason=no_active");
            return;
        };
        self.tree = self
            .tree
            .update_content_type(active_id, content_type, &self.dispatcher);
    }

    /// Adds an item under the current selection.
    pub fn add_item(
        &mut self,
        kind: NodeKind,
        name: impl Into<String>,
    ) -> Result<Option<NodeId>, SessionError> {
        self.add_item_under(kind, name, self.selected_id)
    }

    /// Adds an item under `parent`, or at the root when `parent` is `None`.
    ///
    /// A new folder expands its parent; a new file becomes selected and
    /// active. Returns `Ok(None)` and changes nothing when `parent` is not a
    /// folder.
    ///
    /// # Errors
    /// - `SessionError::BlankName` when `name` is blank after trim.
    pub fn add_item_under(
        &mut self,
        kind: NodeKind,
        name: impl Into<String>,
        parent: Option<NodeId>,
    ) -> Result<Option<NodeId>, SessionError> {
        let name = normalize_name(name.into())?;
        let node = match kind {
            NodeKind::Folder => Node::folder(name),
            NodeKind::File => Node::file(name),
        };
        let node_id = node.id();

        let next = self.tree.insert(parent, node);
        if !next.contains(node_id) {
            debug!("event=add_item module=session status=noop reason=parent_not_folder");
            return Ok(None);
        }
        self.tree = next;

        match (kind, parent) {
            (NodeKind::Folder, Some(parent_id)) => {
                self.expanded.insert(parent_id);
            }
            (NodeKind::Folder, None) => self.root_expanded = true,
            (NodeKind::File, _) => self.select(node_id),
        }
        Ok(Some(node_id))
    }

    /// Renames node `id`.
    ///
    /// # Errors
    /// - `SessionError::BlankName` when `name` is blank after trim.
    pub fn rename(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), SessionError> {
        let name = normalize_name(name.into())?;
        self.tree = self.tree.rename(id, name);
        Ok(())
    }

    /// Replaces the active plain-text note's markup verbatim.
    pub fn edit_text(&mut self, markup: impl Into<String>) {
        let markup = markup.into();
        self.edit_active(|content| content.as_text().map(|_| NoteContent::Text(markup)));
    }

    /// Sets one cell of the active grid note.
    ///
    /// # Errors
    /// - `SessionError::Grid` when the cell is outside the grid.
    pub fn edit_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        let value = value.into();
        self.try_edit_active(|content| match content.as_grid() {
            Some(grid) => Ok(Some(NoteContent::Grid(grid.set_cell(row, col, value)?))),
            None => Ok(None),
        })
    }

    /// Appends a card to a column of the active board note.
    ///
    /// # Errors
    /// - `SessionError::Board` when `text` is blank after trim.
    pub fn add_card(
        &mut self,
        column_id: &str,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        let text = text.into();
        self.try_edit_active(|content| match content.as_board() {
            Some(board) => Ok(Some(NoteContent::Board(board.add_card(column_id, text)?))),
            None => Ok(None),
        })
    }

    /// Moves a card between columns of the active board note.
    pub fn move_card(&mut self, card_id: CardId, from: &str, to: &str) {
        self.edit_active(|content| {
            content
                .as_board()
                .map(|board| NoteContent::Board(board.move_card(card_id, from, to)))
        });
    }

    /// Moves a card to the neighbor column of the active board note.
    pub fn move_card_toward(&mut self, card_id: CardId, from: &str, direction: MoveDirection) {
        self.edit_active(|content| {
            content.as_board().map(|board| {
                NoteContent::Board(board.move_card_toward(card_id, from, direction))
            })
        });
    }

    /// Replaces a card's text on the active board note.
    pub fn update_card_text(&mut self, column_id: &str, card_id: CardId, text: impl Into<String>) {
        let text = text.into();
        self.edit_active(|content| {
            content
                .as_board()
                .map(|board| NoteContent::Board(board.update_card_text(column_id, card_id, text)))
        });
    }

    /// Applies `edit` to the active content and writes a changed result back.
    ///
    /// `edit` returns `None` when the active content has another variant.
    fn edit_active<F>(&mut self, edit: F)
    where
        F: FnOnce(&NoteContent) -> Option<NoteContent>,
    {
        let Some((active_id, current)) = self.active_content() else {
            return;
        };
        let next = edit(current);
        self.commit_active(active_id, next);
    }

    /// Fallible form of `edit_active`; a rejected edit leaves the tree as is.
    fn try_edit_active<F>(&mut self, edit: F) -> Result<(), SessionError>
    where
        F: FnOnce(&NoteContent) -> Result<Option<NoteContent>, SessionError>,
    {
        let Some((active_id, current)) = self.active_content() else {
            return Ok(());
        };
        let next = edit(current).map_err(|err| {
            debug!(
                "event=edit_active module=session status=rejected node_id={} error={}",
                active_id, err
            );
            err
        })?;
        self.commit_active(active_id, next);
        Ok(())
    }

    fn active_content(&self) -> Option<(NodeId, &NoteContent)> {
        let active_id = self.active_id?;
        let content = self.tree.find(active_id).and_then(Node::content)?;
        Some((active_id, content))
    }

    fn commit_active(&mut self, active_id: NodeId, next: Option<NoteContent>) {
        let Some(next) = next else {
            return;
        };
        if self.tree.find(active_id).and_then(Node::content) == Some(&next) {
            return;
        }
        self.tree = self.tree.update_content(active_id, next);
    }
}

fn normalize_name(value: String) -> Result<String, SessionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SessionError::BlankName);
    }
    Ok(trimmed.to_string())
}
