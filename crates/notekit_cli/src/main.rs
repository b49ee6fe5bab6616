//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `notekit_core` linkage with a deterministic ping/version probe.
//! - Run a short scripted session over the sample workspace and print the
//!   resulting snapshot.

use notekit_core::{
    export_json, sample_tree, ContentType, ContentTypeDispatcher, NodeKind, SelectionSession,
    TODO_COLUMN_ID,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("notekit_core ping={}", notekit_core::ping());
    println!("notekit_core version={}", notekit_core::core_version());

    match run_demo() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("notekit demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<String, Box<dyn std::error::Error>> {
    let dispatcher = ContentTypeDispatcher::default();
    let mut session = SelectionSession::with_dispatcher(sample_tree(&dispatcher), dispatcher);

    let work_id = session.tree().roots()[0].id();
    session.select(work_id);
    session.add_item(NodeKind::File, "Sprint")?;
    session.change_active_type(ContentType::Board);
    session.add_card(TODO_COLUMN_ID, "Write release notes")?;

    Ok(export_json(session.tree())?)
}
