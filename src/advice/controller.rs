//! Advice controller
//!
//! Coordinates one fetch at a time against the advice worker, exposes the
//! current advice, loading flag and last error, and enforces the cooldown
//! between fetches. The controller lives on the UI thread and owns all of
//! this state; the worker only ever sees requests and sends back results.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Instant;

use super::advice_state::{AdviceRequest, AdviceResponse, Cooldown, FetchState};
use super::client::{AdviceSource, FetchError};
use super::worker::spawn_worker;
use crate::history::{AdviceEntry, HistoryStore};

pub struct AdviceController {
    state: FetchState,
    cooldown: Cooldown,
    /// Channel to send requests to the worker thread
    request_tx: Option<Sender<AdviceRequest>>,
    /// Channel to receive responses from the worker thread
    response_rx: Option<Receiver<AdviceResponse>>,
    /// Incremented for each accepted fetch
    request_id: u64,
    /// ID of the fetch awaiting its response, if any
    in_flight_request_id: Option<u64>,
    last_cache_buster: u64,
}

impl Default for AdviceController {
    fn default() -> Self {
        Self::new()
    }
}

impl AdviceController {
    /// Create a controller with no worker attached
    ///
    /// Every fetch settles immediately with `FetchError::WorkerUnavailable`
    /// until `set_channels` is called.
    pub fn new() -> Self {
        Self {
            state: FetchState::default(),
            cooldown: Cooldown::Ready,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
            last_cache_buster: 0,
        }
    }

    /// Create a controller backed by a worker thread fetching from `source`
    pub fn spawn<S: AdviceSource>(source: S) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(source, request_rx, response_tx);

        let mut controller = Self::new();
        controller.set_channels(request_tx, response_rx);
        controller
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AdviceRequest>,
        response_rx: Receiver<AdviceResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn current_advice(&self) -> Option<&AdviceEntry> {
        self.state.current_advice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error.as_deref()
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown.is_active_at(Instant::now())
    }

    /// Start fetching a new piece of advice
    ///
    /// Returns false when the request was dropped because a fetch is in
    /// flight or the cooldown has not expired. Failures never surface
    /// here; they end up in `last_error` once the fetch settles.
    pub fn fetch_advice(&mut self) -> bool {
        let now = Instant::now();
        if self.cooldown.is_active_at(now) {
            match self.cooldown.deadline() {
                Some(deadline) => log::debug!(
                    "Fetch dropped: cooldown ends in {:?}",
                    deadline.saturating_duration_since(now)
                ),
                None => log::debug!("Fetch dropped: fetch {} in flight", self.request_id),
            }
            return false;
        }

        self.cooldown = Cooldown::InFlight;
        self.state.start();
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        self.in_flight_request_id = Some(request_id);
        let cache_buster = self.next_cache_buster();

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(AdviceRequest::Fetch {
                request_id,
                cache_buster,
            })
            .is_ok()
        });

        if sent {
            log::debug!("Fetch {} started", request_id);
        } else {
            self.settle_error(FetchError::WorkerUnavailable);
        }
        true
    }

    /// Settle the in-flight fetch if its response has arrived
    ///
    /// Never blocks. Successful advice is appended to `history`. Returns
    /// true when a fetch settled during this call.
    pub fn poll_response(&mut self, history: &mut HistoryStore) -> bool {
        let Some(in_flight) = self.in_flight_request_id else {
            return false;
        };

        loop {
            let received = match &self.response_rx {
                Some(rx) => rx.try_recv(),
                None => Err(TryRecvError::Disconnected),
            };

            match received {
                Ok(response) if response.request_id() != in_flight => {
                    log::debug!("Discarding stale response {}", response.request_id());
                }
                Ok(AdviceResponse::Advice { text, .. }) => {
                    self.settle_success(&text, history);
                    return true;
                }
                Ok(AdviceResponse::Failed { error, .. }) => {
                    self.settle_error(error);
                    return true;
                }
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => {
                    self.settle_error(FetchError::WorkerUnavailable);
                    return true;
                }
            }
        }
    }

    fn settle_success(&mut self, text: &str, history: &mut HistoryStore) {
        self.state.settle_success(text);
        history.append(text);
        self.finish_cycle();
        log::debug!("Fetch settled with advice ({} in history)", history.len());
    }

    fn settle_error(&mut self, error: FetchError) {
        self.state.settle_error(error.to_string());
        self.finish_cycle();
    }

    fn finish_cycle(&mut self) {
        self.in_flight_request_id = None;
        self.cooldown = Cooldown::after_settle(Instant::now());
    }

    /// Current Unix time in milliseconds, bumped to stay strictly increasing
    fn next_cache_buster(&mut self) -> u64 {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        let value = now.max(self.last_cache_buster.saturating_add(1));
        self.last_cache_buster = value;
        value
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
