//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Editor settings and partial updates
//! - Speech templates
//! - Command types for the state machine

pub mod messages;
pub mod settings;
pub mod template;

pub use messages::Command;
pub use settings::{EditorSettings, SettingsPatch, WritingMode};
pub use template::{Template, TemplateKey};
