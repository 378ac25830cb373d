//! Socket.IO event handlers for the board front end
//!
//! The front end sends `board:event` for every user action and receives the
//! re-rendered board as `board:sync`.

use std::fmt::Display;

use serde::Serialize;
use socketioxide::extract::{SocketRef, State, TryData};
use socketioxide::{SocketIo, TransportType};
use tracing::{debug, info, warn};

use board_core::event::BoardEvent;
use board_core::session::Outcome;
use board_core::view::BoardView;

use crate::session::BoardHandle;

/// Shared state for Socket.IO handlers
#[derive(Clone)]
pub struct SocketState {
    pub board: BoardHandle,
}

impl SocketState {
    pub fn new(board: BoardHandle) -> Self {
        Self { board }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub message: String,
}

/// What a request sends back
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// `board:sync` to the sender, and to every other client when `broadcast`
    Sync { view: BoardView, broadcast: bool },
    /// `board:error` to the sender
    Error(String),
}

// ============ Event Handlers ============

/// Handle new socket connection
pub async fn on_connect(socket: SocketRef, State(_state): State<SocketState>) {
    info!("Client connected: {}", socket.id);

    socket.on(
        "board:request-sync",
        |socket: SocketRef, State(state): State<SocketState>| async move {
            debug!("Client {} requested sync", socket.id);
            let reply = route_request_sync(&state).await;
            deliver(&socket, reply);
        },
    );

    socket.on(
        "board:event",
        |socket: SocketRef, State(state): State<SocketState>, TryData(event): TryData<BoardEvent>| async move {
            let reply = route_event(&state, event).await;
            deliver(&socket, reply);
        },
    );

    socket.on_disconnect(|socket: SocketRef| async move {
        info!("Client disconnected: {}", socket.id);
    });
}

pub async fn route_request_sync(state: &SocketState) -> Reply {
    match state.board.snapshot().await {
        Ok(view) => Reply::Sync {
            view,
            broadcast: false,
        },
        Err(e) => Reply::Error(e.to_string()),
    }
}

/// Apply a decoded event. Interaction state belongs to the sender, so other
/// clients only hear about board changes.
pub async fn route_event<E: Display>(state: &SocketState, event: Result<BoardEvent, E>) -> Reply {
    let event = match event {
        Ok(event) => event,
        Err(e) => return Reply::Error(format!("Invalid board event: {}", e)),
    };

    let kind = event.kind();
    match state.board.apply(event).await {
        Ok((outcome, view)) => {
            debug!("Applied {}: {:?}", kind, outcome);
            Reply::Sync {
                view,
                broadcast: outcome == Outcome::BoardChanged,
            }
        }
        Err(e) => Reply::Error(e.to_string()),
    }
}

fn deliver(socket: &SocketRef, reply: Reply) {
    match reply {
        Reply::Sync { view, broadcast } => {
            if let Err(e) = socket.emit("board:sync", &view) {
                warn!("Failed to emit sync: {}", e);
            }
            if broadcast {
                broadcast_sync(socket, &view);
            }
        }
        Reply::Error(message) => {
            warn!("Board error for client {}: {}", socket.id, message);
            let _ = socket.emit("board:error", &ErrorPayload { message });
        }
    }
}

/// Broadcast board state to all other clients
fn broadcast_sync(socket: &SocketRef, view: &BoardView) {
    let _ = socket.broadcast().emit("board:sync", view);
}

/// Create and configure Socket.IO layer
pub fn create_socket_layer(state: SocketState) -> (socketioxide::layer::SocketIoLayer, SocketIo) {
    let (layer, io) = SocketIo::builder()
        .with_state(state)
        // Only allow WebSocket transport to avoid CORS issues with polling
        .transports([TransportType::Websocket])
        .build_layer();

    io.ns("/", on_connect);

    (layer, io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::board::Seed;
    use board_core::session::Session;

    fn state() -> SocketState {
        SocketState::new(BoardHandle::spawn(Session::from_seed(Seed::Demo)))
    }

    fn decode(json: &str) -> Result<BoardEvent, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[tokio::test]
    async fn request_sync_replies_to_sender_only() {
        match route_request_sync(&state()).await {
            Reply::Sync { view, broadcast } => {
                assert_eq!(view.card_count, 6);
                assert!(!broadcast);
            }
            Reply::Error(e) => panic!("Expected sync, got error: {}", e),
        }
    }

    #[tokio::test]
    async fn board_change_is_broadcast() {
        let reply = route_event(
            &state(),
            decode(r#"{"type":"card:delete","listId":"list-1","cardId":"card-1"}"#),
        )
        .await;

        match reply {
            Reply::Sync { view, broadcast } => {
                assert!(broadcast);
                assert_eq!(view.card_count, 5);
            }
            Reply::Error(e) => panic!("Expected sync, got error: {}", e),
        }
    }

    #[tokio::test]
    async fn interaction_and_ignored_events_reach_sender_only() {
        let state = state();

        let reply = route_event(&state, decode(r#"{"type":"list-form:open"}"#)).await;
        assert!(matches!(reply, Reply::Sync { broadcast: false, ref view } if view.list_form.is_some()));

        let reply = route_event(
            &state,
            decode(r#"{"type":"card:add","listId":"list-1","content":" "}"#),
        )
        .await;
        assert!(matches!(reply, Reply::Sync { broadcast: false, .. }));
    }

    #[tokio::test]
    async fn malformed_event_replies_with_error() {
        let state = state();
        let reply = route_event(&state, decode(r#"{"type":"board:explode"}"#)).await;

        match reply {
            Reply::Error(message) => assert!(message.starts_with("Invalid board event")),
            Reply::Sync { .. } => panic!("Expected error reply"),
        }

        let view = state.board.snapshot().await.unwrap();
        assert_eq!(view.card_count, 6);
    }

    #[tokio::test]
    async fn closed_session_replies_with_error() {
        let state = SocketState::new(BoardHandle::closed());

        assert!(matches!(route_request_sync(&state).await, Reply::Error(_)));
        let reply = route_event(&state, decode(r#"{"type":"edit:cancel"}"#)).await;
        assert_eq!(reply, Reply::Error("Board session is closed".to_string()));
    }
}
