//! Seeded sample workspace used by the CLI probe and tests.

use crate::model::content::ContentType;
use crate::model::node::Node;
use crate::service::content_dispatch::ContentTypeDispatcher;
use crate::tree::note_tree::NoteTree;
use uuid::Uuid;

/// Builds the starter workspace: two folders with mixed note types plus one
/// root-level note.
///
/// Ids are freshly generated on every call.
pub fn sample_tree(dispatcher: &ContentTypeDispatcher) -> NoteTree {
    let note = |name: &str, content_type: ContentType| {
        Node::file_with_id(
            Uuid::new_v4(),
            name,
            dispatcher.fresh_content(content_type),
        )
    };

    NoteTree::from_roots(vec![
        Node::folder_with_id(
            Uuid::new_v4(),
            "Work",
            vec![
                note("Project A", ContentType::PlainText),
                note("Project B", ContentType::Grid),
            ],
        ),
        Node::folder_with_id(
            Uuid::new_v4(),
            "Personal",
            vec![
                note("Journal", ContentType::PlainText),
                note("Travel Plans", ContentType::Board),
            ],
        ),
        note("Shopping List", ContentType::PlainText),
    ])
}

#[cfg(test)]
mod tests {
    use super::sample_tree;
    use crate::model::content::ContentType;
    use crate::service::content_dispatch::ContentTypeDispatcher;

    #[test]
    fn sample_tree_has_expected_shape() {
        let tree = sample_tree(&ContentTypeDispatcher::default());
        assert_eq!(tree.roots().len(), 3);
        assert_eq!(tree.len(), 7);

        let names: Vec<(usize, &str, Option<ContentType>)> = tree
            .iter()
            .map(|(depth, node)| (depth, node.name(), node.content_type()))
            .collect();
        assert_eq!(names[2], (1, "Project B", Some(ContentType::Grid)));
        assert_eq!(names[5], (1, "Travel Plans", Some(ContentType::Board)));
        assert_eq!(names[6], (0, "Shopping List", Some(ContentType::PlainText)));
    }
}
