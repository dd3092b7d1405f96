//! Explicit per-user session state.
//!
//! Nothing in the extraction core reads this; the UI owns it and passes the
//! pieces it needs (language, history) as plain arguments.

use agro_core::conversation::ConversationTurn;
use agro_core::entities::ImplementationTask;
use agro_core::enums::Language;
use agro_core::i18n::{UiStrings, strings};
use serde::Serialize;

use crate::error::SessionError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionContext {
    language: Language,
    history: Vec<ConversationTurn>,
    checklist: Vec<ImplementationTask>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl SessionContext {
    /// A fresh session whose history holds only the greeting.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            history: vec![greeting(language)],
            checklist: Vec::new(),
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn strings(&self) -> &'static UiStrings {
        strings(self.language)
    }

    /// Switch the UI language. The history is left as is.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    #[must_use]
    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    pub fn append(&mut self, turns: impl IntoIterator<Item = ConversationTurn>) {
        self.history.extend(turns);
    }

    /// Drop the conversation and greet again. The checklist survives.
    pub fn restart(&mut self) {
        self.history = vec![greeting(self.language)];
        tracing::debug!(language = %self.language, "session restarted");
    }

    #[must_use]
    pub fn checklist(&self) -> &[ImplementationTask] {
        &self.checklist
    }

    /// Replace the checklist wholesale, as a checklist tool call does.
    pub fn apply_checklist(&mut self, tasks: Vec<ImplementationTask>) {
        self.checklist = tasks;
    }

    /// # Errors
    ///
    /// Returns [`SessionError::TaskOutOfRange`] for an unknown index.
    pub fn set_task_done(&mut self, index: usize, done: bool) -> Result<(), SessionError> {
        let len = self.checklist.len();
        let task = self
            .checklist
            .get_mut(index)
            .ok_or(SessionError::TaskOutOfRange { index, len })?;
        task.done = done;
        Ok(())
    }

    /// Flip a task and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TaskOutOfRange`] for an unknown index.
    pub fn toggle_task(&mut self, index: usize) -> Result<bool, SessionError> {
        let len = self.checklist.len();
        let task = self
            .checklist
            .get_mut(index)
            .ok_or(SessionError::TaskOutOfRange { index, len })?;
        task.done = !task.done;
        Ok(task.done)
    }
}

fn greeting(language: Language) -> ConversationTurn {
    ConversationTurn::model_text(strings(language).greeting)
}
