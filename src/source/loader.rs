//! Background candidate loading.
//!
//! The fetch runs on a worker thread; its outcome comes back over an
//! `std::sync::mpsc` channel tagged with the [`LoadTicket`] it was started
//! with. The UI thread polls without blocking and hands the outcome to
//! [`SearchFilterEngine::finish_load`](crate::state::SearchFilterEngine::finish_load),
//! which drops anything stale.

use crate::model::FetchError;
use crate::source::CandidateSource;
use crate::state::LoadTicket;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Result of one fetch, tagged with the ticket that started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    pub result: Result<Vec<String>, FetchError>,
}

/// Runs a [`CandidateSource`] off the UI thread.
pub struct SourceLoader {
    source: Arc<dyn CandidateSource>,
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
}

impl SourceLoader {
    pub fn new(source: Arc<dyn CandidateSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Spawn a fetch for `ticket`. Returns immediately.
    pub fn start(&self, ticket: LoadTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        debug!(ticket = ticket.get(), "spawning candidate fetch");
        let spawned = thread::Builder::new()
            .name("candidate-fetch".to_string())
            .spawn(move || {
                let result = source.fetch_candidates();
                // Receiver gone means the screen was closed; nothing to deliver to.
                let _ = tx.send(LoadOutcome { ticket, result });
            });
        if let Err(err) = spawned {
            warn!(error = %err, "failed to spawn fetch thread");
            let _ = self.tx.send(LoadOutcome {
                ticket,
                result: Err(FetchError::new(format!("could not start fetch: {err}"))),
            });
        }
    }

    /// Next finished outcome, if any. Never blocks.
    pub fn poll(&self) -> Option<LoadOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for the next outcome.
    pub fn wait(&self, timeout: Duration) -> Option<LoadOutcome> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
