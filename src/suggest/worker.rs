//! Suggestion worker thread
//!
//! Runs the orchestrator on a background thread with its own current-thread
//! tokio runtime, so remote latency never blocks the UI loop. The UI talks to
//! it through [`SuggestionClient`]: every request carries an increasing id,
//! and responses for anything but the latest id are dropped on arrival.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use super::orchestrator::SuggestionOrchestrator;
use super::suggestion::SuggestionList;
use crate::remote::RemoteSuggestionSource;

/// Request sent to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub query: String,
    /// Unique ID for this request, used to filter stale responses
    pub request_id: u64,
}

/// Response sent back from the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResponse {
    pub query: String,
    pub request_id: u64,
    pub suggestions: SuggestionList,
}

/// Spawn the worker thread
///
/// The thread exits when the request channel closes (the client was
/// dropped) or the response channel is gone.
pub fn spawn_worker<S>(
    orchestrator: SuggestionOrchestrator<S>,
    request_rx: Receiver<SuggestionRequest>,
    response_tx: Sender<SuggestionResponse>,
) -> JoinHandle<()>
where
    S: RemoteSuggestionSource + 'static,
{
    std::thread::spawn(move || {
        worker_loop(orchestrator, request_rx, response_tx);
    })
}

fn worker_loop<S: RemoteSuggestionSource>(
    mut orchestrator: SuggestionOrchestrator<S>,
    request_rx: Receiver<SuggestionRequest>,
    response_tx: Sender<SuggestionResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Could not start suggestion runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async {
        // A slow warm-up must not hold back the first request; an
        // abandoned warm-up is picked up again by the first remote fetch
        let limit = orchestrator.remote_timeout();
        if tokio::time::timeout(limit, orchestrator.source().warm_up())
            .await
            .is_err()
        {
            log::warn!("Remote warm-up took longer than {:?}; continuing without it", limit);
        }

        while let Ok(request) = request_rx.recv() {
            let request = newest_pending(request, &request_rx);
            let suggestions = orchestrator.get_suggestions(&request.query).await;

            let response = SuggestionResponse {
                query: request.query,
                request_id: request.request_id,
                suggestions,
            };
            if response_tx.send(response).is_err() {
                // Client disconnected
                break;
            }
        }
    });

    log::debug!("Suggestion worker shutting down");
}

/// Skip over queued requests that a newer one already supersedes
fn newest_pending(
    mut current: SuggestionRequest,
    request_rx: &Receiver<SuggestionRequest>,
) -> SuggestionRequest {
    loop {
        match request_rx.try_recv() {
            Ok(newer) => {
                log::debug!(
                    "Skipping superseded request {} ({:?})",
                    current.request_id,
                    current.query
                );
                current = newer;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return current,
        }
    }
}

/// UI-side handle to the worker
#[derive(Debug)]
pub struct SuggestionClient {
    request_tx: Sender<SuggestionRequest>,
    response_rx: Receiver<SuggestionResponse>,
    /// ID of the most recent request; only its response is accepted
    request_id: u64,
    /// ID of the request still awaiting a response, if any
    in_flight_request_id: Option<u64>,
}

impl SuggestionClient {
    /// Start a worker for `orchestrator` and connect to it
    pub fn spawn<S>(orchestrator: SuggestionOrchestrator<S>) -> Self
    where
        S: RemoteSuggestionSource + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(orchestrator, request_rx, response_tx);
        Self::from_channels(request_tx, response_rx)
    }

    pub fn from_channels(
        request_tx: Sender<SuggestionRequest>,
        response_rx: Receiver<SuggestionResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    /// Ask for suggestions, superseding any earlier request
    pub fn request(&mut self, query: &str) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        let request = SuggestionRequest {
            query: query.to_string(),
            request_id: self.request_id,
        };

        if self.request_tx.send(request).is_err() {
            log::warn!("Suggestion worker is gone; request {} dropped", self.request_id);
            self.in_flight_request_id = None;
        } else {
            self.in_flight_request_id = Some(self.request_id);
        }
        self.request_id
    }

    /// Forget the in-flight request so its response is treated as stale
    pub fn invalidate(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = None;
    }

    /// Drain responses, returning the one for the latest request if it arrived
    pub fn poll(&mut self) -> Option<SuggestionResponse> {
        let mut latest = None;
        while let Ok(response) = self.response_rx.try_recv() {
            if Some(response.request_id) == self.in_flight_request_id {
                self.in_flight_request_id = None;
                latest = Some(response);
            } else {
                log::debug!(
                    "Dropping stale suggestions for request {} (current: {})",
                    response.request_id,
                    self.request_id
                );
            }
        }
        latest
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
