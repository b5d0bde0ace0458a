use std::collections::VecDeque;

/// Maximum number of snapshots kept on each stack.
pub const MAX_HISTORY: usize = 50;

/// Owns the document content and its undo/redo snapshots.
///
/// Stacks are ordered oldest to newest; the back is the top. When a stack
/// grows past [`MAX_HISTORY`] the oldest snapshot is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    content: String,
    undo_stack: VecDeque<String>,
    redo_stack: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Record an edit. The previous content becomes undoable and redo is cleared.
    pub fn commit(&mut self, content: impl Into<String>) {
        let previous = std::mem::replace(&mut self.content, content.into());
        push_bounded(&mut self.undo_stack, previous);
        self.redo_stack.clear();
    }

    /// Step back one edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.content, previous);
        push_bounded(&mut self.redo_stack, current);
        true
    }

    /// Re-apply the last undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.content, next);
        push_bounded(&mut self.undo_stack, current);
        true
    }

    /// Replace the content and forget all history.
    pub fn reset(&mut self, content: Option<String>) {
        self.content = content.unwrap_or_default();
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Swap in new content without touching either stack.
    pub(crate) fn replace_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Undo snapshots, oldest first.
    pub fn undo_stack(&self) -> impl Iterator<Item = &str> {
        self.undo_stack.iter().map(String::as_str)
    }

    /// Redo snapshots, oldest first.
    pub fn redo_stack(&self) -> impl Iterator<Item = &str> {
        self.redo_stack.iter().map(String::as_str)
    }
}

fn push_bounded(stack: &mut VecDeque<String>, value: String) {
    stack.push_back(value);
    while stack.len() > MAX_HISTORY {
        stack.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert_eq!(history.content(), "");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_restores_previous_commit() {
        let mut history = History::new();
        history.commit("A");
        history.commit("B");

        assert!(history.undo());
        assert_eq!(history.content(), "A");
        assert!(history.can_redo());

        assert!(history.redo());
        assert_eq!(history.content(), "B");
        assert_eq!(history.undo_stack().last(), Some("A"));
    }

    #[test]
    fn test_commit_clears_redo() {
        let mut history = History::new();
        history.commit("A");
        history.commit("B");
        history.undo();
        assert!(history.can_redo());

        history.commit("C");
        assert!(!history.can_redo());
        assert_eq!(history.undo_stack().collect::<Vec<_>>(), vec!["", "A"]);
    }

    #[test]
    fn test_undo_redo_on_empty_stacks_are_noops() {
        let mut history = History::with_content("keep");
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(history.content(), "keep");
    }

    #[test]
    fn test_reset_clears_both_stacks() {
        let mut history = History::new();
        history.commit("A");
        history.commit("B");
        history.undo();

        history.reset(None);
        assert_eq!(history.content(), "");
        assert!(!history.can_undo());
        assert!(!history.can_redo());

        history.reset(Some("fresh".to_string()));
        assert_eq!(history.content(), "fresh");
    }

    #[test]
    fn test_depth_is_bounded_oldest_evicted_first() {
        let mut history = History::new();
        for i in 1..=60 {
            history.commit(format!("v{}", i));
        }

        assert_eq!(history.undo_depth(), MAX_HISTORY);
        // Prior values were "", v1..v59; the 50 most recent are v10..v59.
        let expected: Vec<String> = (10..=59).map(|i| format!("v{}", i)).collect();
        let actual: Vec<&str> = history.undo_stack().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_full_undo_then_full_redo() {
        let mut history = History::new();
        for i in 1..=60 {
            history.commit(format!("v{}", i));
        }
        while history.undo() {}
        assert_eq!(history.content(), "v10");
        assert_eq!(history.redo_depth(), MAX_HISTORY);

        while history.redo() {}
        assert_eq!(history.content(), "v60");
        assert_eq!(history.undo_depth(), MAX_HISTORY);
    }
}
