//! Fetch worker thread
//!
//! Runs suggestion requests on a background thread with its own current-thread
//! tokio runtime so the UI thread never waits on the network. Every request is
//! spawned as its own task: requests are never aborted once sent, and
//! responses arrive in completion order, each tagged with its request id.

use std::sync::mpsc::{self, Receiver, Sender};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::{FetchError, SuggestClient, Suggestion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: u64,
    /// Raw input value, untrimmed
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub request_id: u64,
    pub result: Result<Vec<Suggestion>, FetchError>,
}

/// UI-side end of the worker channels
///
/// Dropping the handle shuts the worker down.
#[derive(Debug)]
pub struct FetchHandle {
    request_tx: UnboundedSender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    shutdown: CancellationToken,
}

impl FetchHandle {
    pub fn new(
        request_tx: UnboundedSender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
            shutdown,
        }
    }

    /// Queue a request; returns false if the worker is gone
    pub fn send(&self, request: FetchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Next completed response, without blocking
    pub fn try_recv(&self) -> Option<FetchResponse> {
        self.response_rx.try_recv().ok()
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Spawn the fetch worker thread and return the handle that owns it
pub fn spawn_worker(client: SuggestClient) -> FetchHandle {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let shutdown = CancellationToken::new();
    let worker_shutdown = shutdown.clone();

    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx, worker_shutdown);
    });

    FetchHandle::new(request_tx, response_rx, shutdown)
}

fn worker_loop(
    client: SuggestClient,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    shutdown: CancellationToken,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start fetch runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                request = request_rx.recv() => match request {
                    Some(request) => {
                        tokio::spawn(run_request(client.clone(), request, response_tx.clone()));
                    }
                    None => break,
                },
            }
        }
    });

    log::debug!("Fetch worker shutting down");
}

async fn run_request(client: SuggestClient, request: FetchRequest, response_tx: Sender<FetchResponse>) {
    let result = client.fetch(&request.query).await;
    if response_tx
        .send(FetchResponse {
            request_id: request.request_id,
            result,
        })
        .is_err()
    {
        log::debug!("Dropping response {} (UI gone)", request.request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
