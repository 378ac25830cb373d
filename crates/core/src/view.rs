//! Rendered board view
//!
//! The view is a pure function of the session. Front ends draw it as-is.

use serde::Serialize;

use crate::drag::DragSource;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub index: usize,
    pub content: String,
    /// Draft text while this card is being edited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing: Option<String>,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub id: String,
    pub title: String,
    pub cards: Vec<CardView>,
    /// Draft text while the add-card form is open on this list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_form: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub lists: Vec<ListView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragging: Option<DragSource>,
    pub card_count: usize,
}

impl BoardView {
    pub fn render(session: &Session) -> Self {
        let board = session.board();
        let editor = session.editor();
        let drag = session.drag().active();

        let lists = board
            .lists()
            .iter()
            .map(|list| ListView {
                id: list.id.clone(),
                title: list.title.clone(),
                cards: list
                    .cards
                    .iter()
                    .enumerate()
                    .map(|(index, card)| CardView {
                        id: card.id.clone(),
                        index,
                        content: card.content.clone(),
                        editing: editor
                            .editing()
                            .filter(|e| e.list_id == list.id && e.card_id == card.id)
                            .map(|_| editor.edit_draft().to_string()),
                        dragging: drag.is_some_and(|d| d.card_id == card.id),
                    })
                    .collect(),
                card_form: (editor.adding_card_to() == Some(list.id.as_str()))
                    .then(|| editor.card_draft().to_string()),
            })
            .collect();

        Self {
            lists,
            list_form: editor
                .is_adding_list()
                .then(|| editor.list_draft().to_string()),
            dragging: drag.cloned(),
            card_count: board.card_count(),
        }
    }
}

impl From<&Session> for BoardView {
    fn from(session: &Session) -> Self {
        Self::render(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Seed;
    use crate::event::BoardEvent;

    #[test]
    fn test_render_demo_board() {
        let session = Session::from_seed(Seed::Demo);
        let view = BoardView::render(&session);

        assert_eq!(view.lists.len(), 3);
        assert_eq!(view.card_count, 6);
        assert_eq!(view.lists[0].cards[2].index, 2);
        assert!(view.list_form.is_none());
        assert!(view.dragging.is_none());
        assert!(view.lists.iter().all(|l| l.card_form.is_none()));
    }

    #[test]
    fn test_render_interaction_state() {
        let mut session = Session::from_seed(Seed::Demo);
        session.apply(BoardEvent::OpenCardForm {
            list_id: "list-2".to_string(),
        });
        session.apply(BoardEvent::CardDraftChanged {
            text: "New".to_string(),
        });
        session.apply(BoardEvent::BeginEdit {
            list_id: "list-1".to_string(),
            card_id: "card-2".to_string(),
        });
        session.apply(BoardEvent::DragStart {
            card_id: "card-6".to_string(),
        });
        session.apply(BoardEvent::OpenListForm);

        let view = BoardView::from(&session);
        assert_eq!(view.lists[1].card_form.as_deref(), Some("New"));
        assert!(view.lists[0].card_form.is_none());
        assert_eq!(view.lists[0].cards[1].editing.as_deref(), Some("Task 2"));
        assert!(view.lists[0].cards[0].editing.is_none());
        assert!(view.lists[2].cards[0].dragging);
        assert_eq!(view.dragging.as_ref().unwrap().list_id, "list-3");
        assert_eq!(view.list_form.as_deref(), Some(""));
    }

    #[test]
    fn test_render_is_pure() {
        let session = Session::from_seed(Seed::Demo);
        assert_eq!(BoardView::render(&session), BoardView::render(&session));
    }

    #[test]
    fn test_view_json_shape() {
        let session = Session::from_seed(Seed::Demo);
        let value = serde_json::to_value(BoardView::render(&session)).unwrap();

        assert_eq!(value["cardCount"], 6);
        assert_eq!(value["lists"][0]["cards"][0]["id"], "card-1");
        assert!(value.get("listForm").is_none());
        assert!(value["lists"][0]["cards"][0].get("editing").is_none());
    }
}
