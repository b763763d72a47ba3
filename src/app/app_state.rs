use tui_textarea::TextArea;

use crate::advice::AdviceController;
use crate::config::Config;
use crate::history::{AdviceEntry, HistoryStore, reveal_history};

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Generate button and history toggle
    #[default]
    Controls,
    /// History count input
    CountInput,
}

/// Widget session state
///
/// Owns the advice controller and the history store for the lifetime of
/// the session. The controller only touches the store while settling a
/// fetch, through `poll_advice`.
pub struct App {
    pub advice: AdviceController,
    pub history: HistoryStore,
    pub count_input: TextArea<'static>,
    pub focus: Focus,
    /// Whether the revealed history list is shown
    pub history_visible: bool,
    /// Snapshot taken by the last successful reveal
    pub revealed: Vec<AdviceEntry>,
    pub warning: Option<String>,
    pub should_quit: bool,
    pub frame_count: u64,
}

impl App {
    pub fn new(advice: AdviceController, config: &Config) -> Self {
        let mut count_input = TextArea::default();
        count_input.insert_str(config.history.default_count.to_string());

        Self {
            advice,
            history: HistoryStore::new(),
            count_input,
            focus: Focus::default(),
            history_visible: false,
            revealed: Vec::new(),
            warning: None,
            should_quit: false,
            frame_count: 0,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of the history count input
    pub fn count_text(&self) -> &str {
        self.count_input
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the history count input text
    pub fn set_count_text(&mut self, text: &str) {
        self.count_input.select_all();
        self.count_input.cut();
        self.count_input.insert_str(text);
    }

    /// Ask the controller for new advice
    ///
    /// Returns false when the request was dropped (fetch in flight or
    /// cooldown running).
    pub fn fetch_advice(&mut self) -> bool {
        self.advice.fetch_advice()
    }

    /// Settle a finished fetch, if any. Called once per tick.
    pub fn poll_advice(&mut self) -> bool {
        self.advice.poll_response(&mut self.history)
    }

    /// Validate the count input and reveal that many history entries
    ///
    /// On a validation failure only the warning changes; the list and its
    /// visibility are left as they were.
    pub fn reveal_history(&mut self) {
        match reveal_history(&self.history, self.count_text()) {
            Ok(reveal) => {
                self.warning = reveal.warning.map(|w| w.to_string());
                self.revealed = reveal.entries;
                self.history_visible = true;
            }
            Err(e) => {
                log::debug!("History count rejected: {}", e);
                self.warning = Some(e.to_string());
            }
        }
    }

    /// Show the history list, or hide it if it is already shown
    pub fn toggle_history(&mut self) {
        if self.history_visible {
            self.history_visible = false;
            self.warning = None;
        } else {
            self.reveal_history();
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Controls => Focus::CountInput,
            Focus::CountInput => Focus::Controls,
        };
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
