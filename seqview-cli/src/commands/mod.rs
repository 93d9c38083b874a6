//! Command implementations for the SeqView CLI

pub mod align;
pub mod input;
pub mod layout;
pub mod stats;
