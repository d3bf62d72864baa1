//! Background search worker.
//!
//! Runs the fixed-depth search on its own thread so a caller (for
//! example a UI loop) stays responsive while the engine thinks. One
//! search at a time: callers must wait for or cancel the current
//! handle before spawning another.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::search::find_best_move;
use crate::board::{Board, Move};
use crate::sync::CancelToken;

/// Shared single-slot result cell. `None` while the worker is still
/// running, `Some(outcome)` once it has published.
type ResultSlot = Arc<Mutex<Option<Option<Move>>>>;

/// Handle to a search running on a worker thread.
pub struct SearchHandle {
    slot: ResultSlot,
    token: CancelToken,
    handle: Option<JoinHandle<()>>,
}

/// Start a search of `board` on a new worker thread.
///
/// The board is cloned into the worker, so the caller's board stays
/// usable while the search runs. `moves` must be the legal moves of
/// `board`'s current position.
#[must_use]
pub fn spawn_search(board: &Board, moves: Vec<Move>) -> SearchHandle {
    let slot: ResultSlot = Arc::new(Mutex::new(None));
    let token = CancelToken::new();

    let worker_slot = Arc::clone(&slot);
    let worker_token = token.clone();
    let mut worker_board = board.clone();

    let handle = thread::spawn(move || {
        log::debug!("search worker started");
        let best = find_best_move(&mut worker_board, moves);
        if worker_token.is_cancelled() {
            log::debug!("search cancelled, result discarded");
            return;
        }
        *worker_slot.lock() = Some(best);
        log::debug!("search worker finished");
    });

    SearchHandle {
        slot,
        token,
        handle: Some(handle),
    }
}

impl SearchHandle {
    /// Take the result if the worker has published one.
    ///
    /// Returns `None` while the search is still running (or was
    /// cancelled); the inner `Option<Move>` is the search outcome.
    pub fn poll(&self) -> Option<Option<Move>> {
        self.slot.lock().take()
    }

    /// Block until the worker exits and take its result.
    ///
    /// Returns `None` if the search was cancelled or found no move.
    pub fn wait(mut self) -> Option<Move> {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.slot.lock().take().flatten()
    }

    /// Mark the search as cancelled. The worker finishes its current
    /// search but will not publish the result.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the worker thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}
