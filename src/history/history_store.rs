use std::collections::VecDeque;
use std::fmt;

/// One piece of fetched advice text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdviceEntry(String);

impl AdviceEntry {
    /// Wrap advice text, rejecting empty strings
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdviceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AdviceEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Session-scoped advice history, newest entry first
///
/// The log only grows: entries are never evicted, reordered or
/// deduplicated for the lifetime of the store.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: VecDeque<AdviceEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert advice text at the head of the log
    ///
    /// Empty text is ignored.
    pub fn append(&mut self, text: &str) {
        if let Some(entry) = AdviceEntry::new(text) {
            self.entries.push_front(entry);
        }
    }

    /// Return up to `n` of the most recent entries, newest first
    ///
    /// Absent, non-finite, zero and negative counts yield an empty list.
    /// Fractional counts are truncated.
    pub fn get_last_n(&self, n: Option<f64>) -> Vec<AdviceEntry> {
        let Some(count) = clamp_count(n) else {
            return Vec::new();
        };

        self.entries().take(count).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &AdviceEntry> {
        self.entries.iter()
    }
}

/// Convert a requested count into a usable `take` bound
fn clamp_count(n: Option<f64>) -> Option<usize> {
    let n = n?;
    if !n.is_finite() || n <= 0.0 {
        return None;
    }

    // Saturating float to int cast; 0.5 truncates to 0 which takes nothing
    Some(n.trunc() as usize)
}

#[cfg(test)]
#[path = "history_store_tests.rs"]
mod history_store_tests;
