use notekit_core::{
    BoardError, ContentType, ContentTypeDispatcher, ContentView, GridError, MoveDirection, Node,
    NodeKind, NoteTree, SelectionSession, SessionError, DONE_COLUMN_ID, IN_PROGRESS_COLUMN_ID,
    TODO_COLUMN_ID,
};
use uuid::Uuid;

fn session_with_note(content_type: ContentType) -> (SelectionSession, Uuid) {
    let mut session = SelectionSession::new();
    let id = session.add_item(NodeKind::File, "Note").unwrap().unwrap();
    session.change_active_type(content_type);
    (session, id)
}

#[test]
fn end_to_end_folder_file_and_kanban() {
    let mut session = SelectionSession::new();

    let work_id = session.add_item(NodeKind::Folder, "Work").unwrap().unwrap();
    assert_eq!(session.tree().roots().len(), 1);
    let work = session.tree().find(work_id).unwrap();
    assert_eq!(work.name(), "Work");
    assert_eq!(work.kind(), NodeKind::Folder);
    assert!(session.is_expanded(None));
    assert!(!session.is_expanded(Some(work_id)));

    session.select(work_id);
    assert!(session.active_node().is_none());

    let todo_id = session
        .add_item_under(NodeKind::File, "Todo", Some(work_id))
        .unwrap()
        .unwrap();
    let work = session.tree().find(work_id).unwrap();
    assert_eq!(work.children().len(), 1);
    assert_eq!(work.children()[0].name(), "Todo");
    assert_eq!(work.children()[0].content_type(), Some(ContentType::PlainText));
    assert_eq!(session.active_node().unwrap().id(), todo_id);
    assert_eq!(session.selected_id(), Some(todo_id));

    session.change_active_type(ContentType::Board);
    let Some(ContentView::Board(board)) = session.active_view() else {
        panic!("active note should present a board");
    };
    assert_eq!(board.columns().len(), 3);
    assert!(board.columns().iter().all(|column| column.cards.is_empty()));
}

#[test]
fn add_item_rejects_blank_name_without_changes() {
    let mut session = SelectionSession::new();
    let err = session.add_item(NodeKind::Folder, "   ").unwrap_err();
    assert_eq!(err, SessionError::BlankName);
    assert!(session.tree().is_empty());
    assert!(!session.is_expanded(None));
}

#[test]
fn add_item_stores_trimmed_name() {
    let mut session = SelectionSession::new();
    let id = session.add_item(NodeKind::File, "  Ideas  ").unwrap().unwrap();
    assert_eq!(session.tree().find(id).unwrap().name(), "Ideas");
}

#[test]
fn add_item_uses_selected_folder_as_parent() {
    let mut session = SelectionSession::new();
    let folder_id = session.add_item(NodeKind::Folder, "Work").unwrap().unwrap();
    session.select(folder_id);

    let child_id = session.add_item(NodeKind::Folder, "Sub").unwrap().unwrap();
    assert_eq!(session.tree().parent_of(child_id).unwrap().id(), folder_id);
    assert!(session.is_expanded(Some(folder_id)));
    assert!(!session.is_expanded(Some(child_id)));
    // Adding a folder does not move the selection.
    assert_eq!(session.selected_id(), Some(folder_id));
}

#[test]
fn add_item_under_selected_file_changes_nothing() {
    let mut session = SelectionSession::new();
    let file_id = session.add_item(NodeKind::File, "Note").unwrap().unwrap();
    let before = session.tree().clone();

    let result = session.add_item(NodeKind::File, "Nested").unwrap();
    assert_eq!(result, None);
    assert_eq!(session.tree(), &before);
    assert_eq!(session.active_node().unwrap().id(), file_id);
}

#[test]
fn select_folder_or_unknown_clears_active() {
    let mut session = SelectionSession::new();
    let folder_id = session.add_item(NodeKind::Folder, "Work").unwrap().unwrap();
    let file_id = session.add_item(NodeKind::File, "Note").unwrap().unwrap();
    assert!(session.active_node().is_some());

    session.select(folder_id);
    assert!(session.active_node().is_none());
    assert_eq!(session.active_content_type(), None);

    session.select(file_id);
    assert_eq!(session.active_content_type(), Some(ContentType::PlainText));

    let missing = Uuid::new_v4();
    session.select(missing);
    assert!(session.active_node().is_none());
    assert_eq!(session.selected_id(), Some(missing));

    session.clear_selection();
    assert_eq!(session.selected_id(), None);
}

#[test]
fn change_active_type_discards_old_text() {
    let (mut session, _) = session_with_note(ContentType::PlainText);
    session.edit_text("<p>meeting notes</p>");

    session.change_active_type(ContentType::Grid);
    assert_eq!(session.active_content_type(), Some(ContentType::Grid));
    let Some(ContentView::Grid(grid)) = session.active_view() else {
        panic!("active note should present a grid");
    };
    assert_eq!((grid.rows(), grid.cols()), (10, 5));
    assert!(grid.is_blank());
}

#[test]
fn change_active_type_twice_is_idempotent() {
    let (mut session, _) = session_with_note(ContentType::Grid);
    session.edit_cell(0, 0, "kept").unwrap();
    let after_edit = session.tree().clone();

    session.change_active_type(ContentType::Grid);
    assert_eq!(session.tree(), &after_edit);
    let Some(ContentView::Grid(grid)) = session.active_view() else {
        panic!("active note should present a grid");
    };
    assert_eq!(grid.cell(0, 0).unwrap(), "kept");
}

#[test]
fn change_active_type_without_active_node_is_noop() {
    let mut session = SelectionSession::new();
    let folder_id = session.add_item(NodeKind::Folder, "Work").unwrap().unwrap();
    session.select(folder_id);
    let before = session.tree().clone();

    session.change_active_type(ContentType::Board);
    assert_eq!(session.tree(), &before);
}

#[test]
fn dispatcher_grid_size_applies_to_new_grids() {
    let dispatcher = ContentTypeDispatcher::with_grid_size(3, 2).unwrap();
    let mut session = SelectionSession::with_dispatcher(NoteTree::new(), dispatcher);
    session.add_item(NodeKind::File, "Small").unwrap();
    session.change_active_type(ContentType::Grid);

    let Some(ContentView::Grid(grid)) = session.active_view() else {
        panic!("active note should present a grid");
    };
    assert_eq!((grid.rows(), grid.cols()), (3, 2));
}

#[test]
fn edit_text_is_stored_verbatim() {
    let (mut session, id) = session_with_note(ContentType::PlainText);
    session.edit_text("<h1>Title</h1><p>  body </p>");
    let node = session.tree().find(id).unwrap();
    assert_eq!(
        node.content().unwrap().as_text(),
        Some("<h1>Title</h1><p>  body </p>")
    );
}

#[test]
fn edit_cell_writes_back_and_reports_invalid_index() {
    let (mut session, id) = session_with_note(ContentType::Grid);
    session.edit_cell(2, 4, "total").unwrap();

    let grid = session.tree().find(id).unwrap().content().unwrap().as_grid().unwrap();
    assert_eq!(grid.cell(2, 4).unwrap(), "total");

    let err = session.edit_cell(10, 0, "x").unwrap_err();
    assert!(matches!(
        err,
        SessionError::Grid(GridError::InvalidIndex { row: 10, .. })
    ));
}

#[test]
fn edits_for_other_variants_are_ignored() {
    let (mut session, _) = session_with_note(ContentType::Board);
    let before = session.tree().clone();

    session.edit_text("<p>ignored</p>");
    session.edit_cell(0, 0, "ignored").unwrap();
    assert_eq!(session.tree(), &before);
}

#[test]
fn board_edits_flow_through_active_note() {
    let (mut session, id) = session_with_note(ContentType::Board);
    session.add_card(TODO_COLUMN_ID, "draft").unwrap();
    assert_eq!(
        session.add_card(TODO_COLUMN_ID, " ").unwrap_err(),
        SessionError::Board(BoardError::BlankCardText)
    );

    let card_id = {
        let board = session.tree().find(id).unwrap().content().unwrap().as_board().unwrap();
        board.column(TODO_COLUMN_ID).unwrap().cards[0].id
    };

    session.move_card(card_id, TODO_COLUMN_ID, DONE_COLUMN_ID);
    session.move_card_toward(card_id, DONE_COLUMN_ID, MoveDirection::Left);
    session.update_card_text(IN_PROGRESS_COLUMN_ID, card_id, "review");

    let board = session.tree().find(id).unwrap().content().unwrap().as_board().unwrap();
    assert!(board.column(TODO_COLUMN_ID).unwrap().cards.is_empty());
    assert!(board.column(DONE_COLUMN_ID).unwrap().cards.is_empty());
    let in_progress = &board.column(IN_PROGRESS_COLUMN_ID).unwrap().cards;
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].id, card_id);
    assert_eq!(in_progress[0].text, "review");
}

#[test]
fn rename_validates_and_updates_tree() {
    let mut session = SelectionSession::with_tree(NoteTree::from_roots(vec![Node::folder("Old")]));
    let id = session.tree().roots()[0].id();

    assert_eq!(session.rename(id, "").unwrap_err(), SessionError::BlankName);
    session.rename(id, " New ").unwrap();
    assert_eq!(session.tree().find(id).unwrap().name(), "New");
}

#[test]
fn active_node_reflects_writes_immediately() {
    let (mut session, _) = session_with_note(ContentType::PlainText);
    session.edit_text("v1");
    assert_eq!(
        session.active_node().unwrap().content().unwrap().as_text(),
        Some("v1")
    );
    session.edit_text("v2");
    assert!(matches!(session.active_view(), Some(ContentView::Text("v2"))));
}
