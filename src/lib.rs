//! Page layout engine and editor core for Japanese manuscripts.
//!
//! Text is packed onto fixed-size pages for vertical (right-to-left columns)
//! or horizontal writing, and every content edit goes through a bounded
//! undo/redo history.

pub mod app;

pub use app::*;
