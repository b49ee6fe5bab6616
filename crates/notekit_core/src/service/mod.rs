//! Core use-case services.
//!
//! # Responsibility
//! - Map content types to their sub-models.
//! - Turn UI intents into tree and sub-model transitions.

pub mod content_dispatch;
pub mod selection;
