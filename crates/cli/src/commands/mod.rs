//! Command implementations

pub mod reorder;

pub use reorder::{ReorderAction, ReorderCommand};
