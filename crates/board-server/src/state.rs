//! Application state

use std::sync::Arc;

use board_core::board::Seed;
use board_core::session::Session;

use crate::session::BoardHandle;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    board: BoardHandle,
    seed: Seed,
}

impl AppState {
    /// Start a board session from the given seed
    pub fn new(seed: Seed) -> Self {
        Self::with_session(Session::from_seed(seed), seed)
    }

    pub fn with_session(session: Session, seed: Seed) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                board: BoardHandle::spawn(session),
                seed,
            }),
        }
    }

    pub fn board(&self) -> &BoardHandle {
        &self.inner.board
    }

    /// The seed the session started from
    pub fn seed(&self) -> Seed {
        self.inner.seed
    }
}
