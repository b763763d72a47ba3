//! Advice fetch state
//!
//! Holds the observable result of the current fetch cycle, the cooldown
//! guard, and the messages exchanged with the worker thread.

use std::time::{Duration, Instant};

use super::client::FetchError;
use crate::history::AdviceEntry;

/// Minimum delay between a settled fetch and the next accepted one
pub const COOLDOWN: Duration = Duration::from_millis(800);

/// Shown when a failure carries no message of its own
pub const FALLBACK_ERROR: &str = "failed to fetch advice";

/// Request messages sent to the advice worker thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceRequest {
    Fetch {
        /// Unique ID for this request, echoed back in the response
        request_id: u64,
        /// Distinct per request so the endpoint never serves a cached slip
        cache_buster: u64,
    },
}

/// Response messages received from the advice worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceResponse {
    Advice { request_id: u64, text: String },
    Failed { request_id: u64, error: FetchError },
}

impl AdviceResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            AdviceResponse::Advice { request_id, .. } | AdviceResponse::Failed { request_id, .. } => {
                *request_id
            }
        }
    }
}

/// Observable result of the fetch cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub current_advice: Option<AdviceEntry>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl FetchState {
    /// Enter Fetching: loading on, previous error gone
    pub fn start(&mut self) {
        self.is_loading = true;
        self.last_error = None;
    }

    /// Settle with fetched text
    ///
    /// Empty text leaves no current advice.
    pub fn settle_success(&mut self, text: &str) {
        self.is_loading = false;
        self.current_advice = AdviceEntry::new(text);
    }

    /// Settle with a failure message, keeping the current advice
    pub fn settle_error(&mut self, message: String) {
        self.is_loading = false;
        self.last_error = Some(if message.is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            message
        });
    }
}

/// Guard against overlapping fetches
///
/// Compared against a monotonic clock instead of being reset by a timer,
/// so nothing has to call back into the UI thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cooldown {
    #[default]
    Ready,
    /// A fetch has been accepted and has not settled yet
    InFlight,
    /// Settled; blocked until the deadline passes
    Until(Instant),
}

impl Cooldown {
    /// Cooldown that starts at `settled_at`
    pub fn after_settle(settled_at: Instant) -> Self {
        Cooldown::Until(settled_at + COOLDOWN)
    }

    pub fn is_active_at(&self, now: Instant) -> bool {
        match self {
            Cooldown::Ready => false,
            Cooldown::InFlight => true,
            Cooldown::Until(deadline) => now < *deadline,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Cooldown::Until(deadline) => Some(*deadline),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "advice_state_tests.rs"]
mod advice_state_tests;
