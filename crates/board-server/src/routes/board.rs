//! Board API endpoints
//!
//! The front end reads the rendered board and posts input events.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::warn;

use board_core::event::BoardEvent;
use board_core::session::Outcome;
use board_core::view::BoardView;

use crate::session::SessionError;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub outcome: Outcome,
    pub board: BoardView,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn session_error(e: SessionError) -> ApiError {
    warn!("Board request failed: {}", e);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/board - Render the current board
async fn get_board(State(state): State<AppState>) -> Result<Json<BoardView>, ApiError> {
    let view = state.board().snapshot().await.map_err(session_error)?;
    Ok(Json(view))
}

/// POST /api/board/events - Apply one input event
async fn post_event(
    State(state): State<AppState>,
    Json(event): Json<BoardEvent>,
) -> Result<Json<EventResponse>, ApiError> {
    let (outcome, board) = state.board().apply(event).await.map_err(session_error)?;
    Ok(Json(EventResponse { outcome, board }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/board", get(get_board))
        .route("/api/board/events", post(post_event))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use board_core::board::Seed;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/board/events")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn get_board_renders_seed() {
        let app = router().with_state(AppState::new(Seed::Demo));
        let (status, payload) = send(
            app,
            Request::builder()
                .uri("/api/board")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["cardCount"], 6);
        assert_eq!(payload["lists"][1]["title"], "In Progress");
    }

    #[tokio::test]
    async fn post_move_event_updates_board() {
        let state = AppState::new(Seed::Demo);
        let app = router().with_state(state.clone());

        let (status, payload) = send(
            app,
            post_json(json!({
                "type": "card:move",
                "cardId": "card-1",
                "sourceListId": "list-1",
                "destListId": "list-3",
                "destIndex": 0
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["outcome"], "board_changed");
        assert_eq!(payload["board"]["lists"][0]["cards"][0]["id"], "card-2");
        assert_eq!(payload["board"]["lists"][2]["cards"][0]["id"], "card-1");
        assert_eq!(payload["board"]["lists"][2]["cards"][1]["id"], "card-6");

        let view = state.board().snapshot().await.unwrap();
        assert_eq!(view.lists[2].cards.len(), 2);
    }

    #[tokio::test]
    async fn post_blank_card_is_ignored() {
        let app = router().with_state(AppState::new(Seed::Demo));
        let (status, payload) = send(
            app,
            post_json(json!({ "type": "card:add", "listId": "list-1", "content": "  " })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["outcome"], "ignored");
        assert_eq!(payload["board"]["lists"][0]["cards"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn post_unknown_event_is_rejected() {
        let app = router().with_state(AppState::new(Seed::Demo));
        let (status, _) = send(app, post_json(json!({ "type": "board:explode" }))).await;

        assert!(status.is_client_error());
    }
}
