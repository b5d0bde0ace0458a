use log::{info, warn};
use std::time::Instant;

use crate::app::domain::messages::Command;
use crate::app::domain::settings::{EditorSettings, SettingsPatch};
use crate::app::domain::template::TemplateKey;
use crate::app::infrastructure::error::Result;
use crate::app::services::autosave::Debouncer;
use crate::app::services::import::import_text_file;
use crate::app::services::metrics::PageMetrics;
use crate::app::services::pagination::replace_page;
use crate::app::services::persistence::SnapshotStore;
use crate::app::state::EditorState;

/// Owns the editor state and its storage; front ends talk to it through commands.
pub struct EditorController<S: SnapshotStore> {
    state: EditorState,
    store: S,
    autosave: Debouncer,
}

impl<S: SnapshotStore> EditorController<S> {
    /// Start with an empty document and default settings. Nothing is read from `store`.
    pub fn new(store: S) -> Self {
        Self {
            state: EditorState::new(),
            store,
            autosave: Debouncer::default(),
        }
    }

    /// Start from whatever `store` holds, or defaults if it holds nothing usable.
    pub fn restore(store: S) -> Self {
        let snapshot = store.load_or_default();
        info!(
            "Restored document ({} chars)",
            snapshot.content.chars().count()
        );
        let mut controller = Self::new(store);
        controller.state.apply(Command::Load(snapshot));
        controller
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &EditorSettings {
        self.state.settings()
    }

    pub fn content(&self) -> &str {
        self.state.content()
    }

    pub fn metrics(&self) -> PageMetrics {
        PageMetrics::resolve(self.state.settings())
    }

    pub fn pages(&self) -> Vec<String> {
        self.state.pages()
    }

    pub fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Apply a command and restart the autosave countdown if it left unsaved changes.
    /// A command that leaves the state clean drops any pending save.
    pub fn dispatch(&mut self, command: Command, now: Instant) -> bool {
        let changed = self.state.apply(command);
        if changed {
            if self.state.is_dirty() {
                self.autosave.schedule(now);
            } else {
                self.autosave.cancel();
            }
        }
        changed
    }

    pub fn set_content(&mut self, content: impl Into<String>, now: Instant) -> bool {
        self.dispatch(Command::SetContent(content.into()), now)
    }

    pub fn update_settings(&mut self, patch: SettingsPatch, now: Instant) -> bool {
        self.dispatch(Command::UpdateSettings(patch), now)
    }

    pub fn undo(&mut self, now: Instant) -> bool {
        self.dispatch(Command::Undo, now)
    }

    pub fn redo(&mut self, now: Instant) -> bool {
        self.dispatch(Command::Redo, now)
    }

    pub fn reset(&mut self, content: Option<String>, now: Instant) -> bool {
        self.dispatch(Command::Reset(content), now)
    }

    pub fn load_template(&mut self, key: TemplateKey, now: Instant) -> bool {
        self.dispatch(Command::LoadTemplate(key), now)
    }

    /// Replace page `index` with `text` and commit the rejoined content.
    /// Returns false if `index` is out of range.
    pub fn edit_page(&mut self, index: usize, text: &str, now: Instant) -> bool {
        match replace_page(&self.pages(), index, text) {
            Some(content) => self.set_content(content, now),
            None => {
                warn!("Ignoring edit to missing page {}", index + 1);
                false
            }
        }
    }

    /// Import a text file as an undoable edit.
    pub fn import_file(&mut self, path: &std::path::Path, now: Instant) -> Result<()> {
        let content = import_text_file(path)?;
        info!("Imported {} ({} chars)", path.display(), content.chars().count());
        self.set_content(content, now);
        Ok(())
    }

    /// Write a snapshot if the autosave deadline has passed.
    ///
    /// A failed write is logged and dropped; the next change schedules another.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.autosave.fire_if_due(now) {
            return false;
        }
        match self.store.save(&self.state.snapshot()) {
            Ok(()) => true,
            Err(e) => {
                warn!("Autosave failed: {}", e);
                false
            }
        }
    }

    /// Write a snapshot immediately and cancel any pending autosave.
    pub fn flush(&mut self) -> Result<()> {
        self.autosave.cancel();
        self.store.save(&self.state.snapshot())
    }
}
