use super::settings::SettingsPatch;
use super::template::TemplateKey;
use crate::app::services::persistence::Snapshot;

/// Every state transition the editor accepts.
/// Front ends send one of these; `EditorState::apply` is the only place they are handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the content as an undoable edit.
    SetContent(String),
    /// Merge a partial settings update. Never enters the undo history.
    UpdateSettings(SettingsPatch),
    Undo,
    Redo,
    /// Adopt a persisted snapshot and clear the dirty flag.
    Load(Snapshot),
    /// Replace the content and drop both history stacks.
    Reset(Option<String>),
    /// Replace the content with a template, as an undoable edit.
    LoadTemplate(TemplateKey),
}
