//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Settings, Templates, Commands)
//! - `controllers/` - Orchestration (EditorController)
//! - `services/` - Business operations (metrics, pagination, history, persistence)
//! - `infrastructure/` - External integrations (error)
//! - `state.rs` - Editor state and its transition function

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::editor::EditorController;
pub use domain::{Command, EditorSettings, SettingsPatch, Template, TemplateKey, WritingMode};
pub use infrastructure::error::{AppError, Result};
pub use services::history::{History, MAX_HISTORY};
pub use services::metrics::PageMetrics;
pub use services::pagination::{join_pages, paginate, paginate_with_metrics, replace_page};
pub use services::persistence::{FileStore, MemoryStore, Snapshot, SnapshotStore};
pub use state::{EditorState, reduce};
