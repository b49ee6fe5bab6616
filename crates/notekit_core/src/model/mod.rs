//! Document organizer domain model.
//!
//! # Responsibility
//! - Define tree nodes and the content they carry.
//! - Define the grid and board sub-models with their own edit rules.
//!
//! # Invariants
//! - Every node is identified by a stable `NodeId`.
//! - All model values are immutable snapshots; edits return new values.

pub mod board;
pub mod content;
pub mod grid;
pub mod node;
