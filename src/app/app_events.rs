use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_textarea::Input;

use super::app_state::{App, Focus};

impl App {
    /// Wait up to `timeout` for one terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Controls => self.handle_controls_key(key),
            Focus::CountInput => self.handle_count_input_key(key),
        }
    }

    /// Pasted text only lands in the count input
    pub fn handle_paste_event(&mut self, text: String) {
        if self.focus == Focus::CountInput {
            let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
            self.count_input.insert_str(single_line);
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Tab / Shift+Tab: Switch focus
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.toggle_focus();
            return true;
        }

        false
    }

    fn handle_controls_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => {
                self.fetch_advice();
            }
            KeyCode::Char('h') => self.toggle_history(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_count_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.reveal_history(),
            KeyCode::Esc => self.focus = Focus::Controls,
            _ => {
                self.count_input.input(Input::from(key));
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
