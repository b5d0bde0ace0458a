//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the front end:
//! - Editor state ownership, autosave and page editing

pub mod editor;
