//! Document tree storage and traversal.
//!
//! # Responsibility
//! - Hold the folder/file hierarchy as immutable, structurally shared values.
//! - Provide the seeded starter workspace.

pub mod note_tree;
pub mod sample;
