//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Page metrics and pagination
//! - Content history (undo/redo)
//! - Snapshot persistence and autosave debouncing
//! - Plain-text import

pub mod autosave;
pub mod history;
pub mod import;
pub mod metrics;
pub mod pagination;
pub mod persistence;
