//! Board session task
//!
//! One tokio task owns the session. Handlers talk to it through a cloneable
//! [`BoardHandle`], so events are applied strictly one after another.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use board_core::event::BoardEvent;
use board_core::session::{Outcome, Session};
use board_core::view::BoardView;

const COMMAND_BUFFER: usize = 64;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Board session is closed")]
    Closed,
}

enum Command {
    Apply {
        event: BoardEvent,
        reply: oneshot::Sender<(Outcome, BoardView)>,
    },
    Snapshot {
        reply: oneshot::Sender<BoardView>,
    },
}

#[derive(Clone)]
pub struct BoardHandle {
    tx: mpsc::Sender<Command>,
}

impl BoardHandle {
    /// Spawn the task that owns `session`
    pub fn spawn(session: Session) -> Self {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(run(session, rx));
        Self { tx }
    }

    /// Apply an event and return its outcome with the re-rendered board
    pub async fn apply(&self, event: BoardEvent) -> Result<(Outcome, BoardView), SessionError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Apply { event, reply })
            .await
            .map_err(|_| SessionError::Closed)?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    /// A handle whose session task is already gone
    #[cfg(test)]
    pub fn closed() -> Self {
        let (tx, _) = mpsc::channel(1);
        Self { tx }
    }

    /// Render the current board
    pub async fn snapshot(&self) -> Result<BoardView, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot { reply })
            .await
            .map_err(|_| SessionError::Closed)?;
        rx.await.map_err(|_| SessionError::Closed)
    }
}

async fn run(mut session: Session, mut rx: mpsc::Receiver<Command>) {
    info!(
        "Board session started with {} lists, {} cards",
        session.board().lists().len(),
        session.board().card_count()
    );

    while let Some(command) = rx.recv().await {
        match command {
            Command::Apply { event, reply } => {
                let outcome = session.apply(event);
                if reply.send((outcome, BoardView::render(&session))).is_err() {
                    debug!("Caller went away before the event reply");
                }
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(BoardView::render(&session));
            }
        }
    }

    info!("Board session stopped");
}
