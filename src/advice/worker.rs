//! Advice Worker Thread
//!
//! Performs advice requests in a background thread to avoid blocking the UI.
//! Receives requests via channel, runs the HTTP round trip on a
//! current-thread tokio runtime, and sends the settled result back.

use std::sync::mpsc::{Receiver, Sender};

use super::advice_state::{AdviceRequest, AdviceResponse};
use super::client::{AdviceSource, FetchError};

/// Spawn the advice worker thread
///
/// Creates a background thread that:
/// 1. Listens for requests on the request channel
/// 2. Fetches advice from `source`, one request at a time
/// 3. Sends the success or failure back via the response channel
///
/// The thread exits when the request channel is closed.
pub fn spawn_worker<S: AdviceSource>(
    source: S,
    request_rx: Receiver<AdviceRequest>,
    response_tx: Sender<AdviceResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(source, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop<S: AdviceSource>(
    source: S,
    request_rx: Receiver<AdviceRequest>,
    response_tx: Sender<AdviceResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => Some(rt),
        Err(e) => {
            log::error!("Failed to start advice runtime: {}", e);
            None
        }
    };

    while let Ok(request) = request_rx.recv() {
        let AdviceRequest::Fetch {
            request_id,
            cache_buster,
        } = request;

        let result = match &runtime {
            Some(rt) => rt.block_on(source.fetch(cache_buster)),
            None => Err(FetchError::WorkerUnavailable),
        };

        let response = match result {
            Ok(text) => AdviceResponse::Advice { request_id, text },
            Err(error) => {
                log::warn!("Advice request {} failed: {}", request_id, error);
                AdviceResponse::Failed { request_id, error }
            }
        };

        if response_tx.send(response).is_err() {
            // UI thread gone, nobody is listening anymore
            break;
        }
    }

    log::debug!("Advice worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
