//! History reveal
//!
//! Validates the count typed by the user before the history store is
//! queried, and derives the informational warning that accompanies the
//! revealed list.

use std::fmt;

use thiserror::Error;

use super::history_store::{AdviceEntry, HistoryStore};

/// Rejected history count input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("Please enter a valid number.")]
    InvalidNumber,

    #[error("The number must be greater than 1.")]
    TooSmall,
}

/// Informational notice shown next to the revealed list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryWarning {
    /// Nothing has been fetched yet
    Empty,
    /// Fewer entries exist than were requested
    Partial { available: usize },
}

impl fmt::Display for HistoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryWarning::Empty => write!(f, "No history available."),
            HistoryWarning::Partial { available } => write!(
                f,
                "Only {} item(s) available, showing the available ones.",
                available
            ),
        }
    }
}

/// Result of a successful reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryReveal {
    /// Exactly what `HistoryStore::get_last_n` returned
    pub entries: Vec<AdviceEntry>,
    pub warning: Option<HistoryWarning>,
}

/// Parse the history count text
///
/// Blank input counts as zero. Anything else must parse as a finite
/// number greater than one.
pub fn parse_history_count(input: &str) -> Result<f64, CountError> {
    let trimmed = input.trim();
    let value = if trimmed.is_empty() {
        0.0
    } else {
        trimmed
            .parse::<f64>()
            .map_err(|_| CountError::InvalidNumber)?
    };

    if !value.is_finite() {
        return Err(CountError::InvalidNumber);
    }
    if value <= 1.0 {
        return Err(CountError::TooSmall);
    }

    Ok(value)
}

/// Validate `input` and query the store
///
/// The store is never touched when validation fails.
pub fn reveal_history(store: &HistoryStore, input: &str) -> Result<HistoryReveal, CountError> {
    let requested = parse_history_count(input)?;
    if store.is_empty() {
        return Ok(HistoryReveal {
            entries: Vec::new(),
            warning: Some(HistoryWarning::Empty),
        });
    }

    let entries = store.get_last_n(Some(requested));

    // Compared against the raw value: "2.5" with two entries is still short
    let warning = if (entries.len() as f64) < requested {
        Some(HistoryWarning::Partial {
            available: entries.len(),
        })
    } else {
        None
    };

    Ok(HistoryReveal { entries, warning })
}

#[cfg(test)]
#[path = "reveal_tests.rs"]
mod reveal_tests;
