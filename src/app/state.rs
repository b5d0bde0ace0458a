use log::debug;

use super::domain::messages::Command;
use super::domain::settings::EditorSettings;
use super::domain::template::TemplateKey;
use super::services::history::History;
use super::services::pagination::paginate;
use super::services::persistence::Snapshot;

/// Everything the editor knows about the open document.
///
/// Content only changes through the history; `apply` is the single writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    history: History,
    settings: EditorSettings,
    dirty: bool,
    active_template: Option<TemplateKey>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a persisted snapshot. The result is clean with empty history.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            history: History::with_content(snapshot.content),
            settings: snapshot.settings,
            ..Self::default()
        }
    }

    pub fn content(&self) -> &str {
        self.history.content()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// True when content or settings changed since the last load.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn active_template(&self) -> Option<TemplateKey> {
        self.active_template
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Current page sequence, recomputed from content and settings every call.
    pub fn pages(&self) -> Vec<String> {
        paginate(self.content(), &self.settings)
    }

    /// The serializable record handed to storage.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.content(), self.settings.clone())
    }

    /// Apply one command in place. Returns whether the state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        debug!("Applying {}", command_name(&command));

        match command {
            Command::SetContent(content) => {
                self.history.commit(content);
                self.dirty = true;
                true
            }
            Command::UpdateSettings(patch) => {
                let changed = self.settings.apply_patch(&patch);
                if changed {
                    self.dirty = true;
                }
                changed
            }
            Command::Undo => {
                let changed = self.history.undo();
                if changed {
                    self.dirty = true;
                }
                changed
            }
            Command::Redo => {
                let changed = self.history.redo();
                if changed {
                    self.dirty = true;
                }
                changed
            }
            Command::Load(snapshot) => {
                self.history.replace_content(snapshot.content);
                self.settings = snapshot.settings;
                self.dirty = false;
                true
            }
            Command::Reset(content) => {
                self.history.reset(content);
                self.active_template = None;
                self.dirty = true;
                true
            }
            Command::LoadTemplate(key) => {
                self.history.commit(key.template().content);
                self.active_template = Some(key);
                self.dirty = true;
                true
            }
        }
    }
}

/// Pure transition: `(state, command) -> state`.
pub fn reduce(mut state: EditorState, command: Command) -> EditorState {
    state.apply(command);
    state
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::SetContent(_) => "SetContent",
        Command::UpdateSettings(_) => "UpdateSettings",
        Command::Undo => "Undo",
        Command::Redo => "Redo",
        Command::Load(_) => "Load",
        Command::Reset(_) => "Reset",
        Command::LoadTemplate(_) => "LoadTemplate",
    }
}
