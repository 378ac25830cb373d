//! Transient form and edit state
//!
//! Tracks the add-list form, the add-card form and the card being edited,
//! along with their draft text. Submitting a blank draft keeps the form open.

use serde::Serialize;
use tracing::debug;

use crate::board::{is_blank, Board};

/// A card addressed by its list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRef {
    pub list_id: String,
    pub card_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    adding_card_to: Option<String>,
    card_draft: String,
    adding_list: bool,
    list_draft: String,
    editing: Option<CardRef>,
    edit_draft: String,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// List whose add-card form is open
    pub fn adding_card_to(&self) -> Option<&str> {
        self.adding_card_to.as_deref()
    }

    pub fn card_draft(&self) -> &str {
        &self.card_draft
    }

    pub fn is_adding_list(&self) -> bool {
        self.adding_list
    }

    pub fn list_draft(&self) -> &str {
        &self.list_draft
    }

    pub fn editing(&self) -> Option<&CardRef> {
        self.editing.as_ref()
    }

    pub fn edit_draft(&self) -> &str {
        &self.edit_draft
    }

    // ---- add card ----

    /// Open the add-card form on a list, replacing any form open elsewhere
    pub fn open_card_form(&mut self, board: &Board, list_id: &str) -> bool {
        if board.list(list_id).is_none() {
            return false;
        }
        self.adding_card_to = Some(list_id.to_string());
        self.card_draft.clear();
        true
    }

    pub fn set_card_draft(&mut self, text: &str) -> bool {
        if self.adding_card_to.is_none() {
            return false;
        }
        self.card_draft = text.to_string();
        true
    }

    /// Add the drafted card. On success the form closes; otherwise it stays
    /// open with its draft.
    pub fn submit_card_form(&mut self, board: &mut Board) -> Option<String> {
        let list_id = self.adding_card_to.as_deref()?;
        let id = board.add_card(list_id, &self.card_draft)?;
        self.close_card_form();
        Some(id)
    }

    pub fn close_card_form(&mut self) -> bool {
        let was_open = self.adding_card_to.take().is_some();
        self.card_draft.clear();
        was_open
    }

    // ---- add list ----

    pub fn open_list_form(&mut self) -> bool {
        self.adding_list = true;
        self.list_draft.clear();
        true
    }

    pub fn set_list_draft(&mut self, text: &str) -> bool {
        if !self.adding_list {
            return false;
        }
        self.list_draft = text.to_string();
        true
    }

    pub fn submit_list_form(&mut self, board: &mut Board) -> Option<String> {
        if !self.adding_list {
            return None;
        }
        let id = board.add_list(&self.list_draft)?;
        self.close_list_form();
        Some(id)
    }

    pub fn close_list_form(&mut self) -> bool {
        let was_open = self.adding_list;
        self.adding_list = false;
        self.list_draft.clear();
        was_open
    }

    // ---- edit card ----

    /// Start editing a card, loading its current content into the draft
    pub fn begin_edit(&mut self, board: &Board, list_id: &str, card_id: &str) -> bool {
        let Some(card) = board.card(list_id, card_id) else {
            return false;
        };
        self.editing = Some(CardRef {
            list_id: list_id.to_string(),
            card_id: card_id.to_string(),
        });
        self.edit_draft = card.content.clone();
        true
    }

    pub fn set_edit_draft(&mut self, text: &str) -> bool {
        if self.editing.is_none() {
            return false;
        }
        self.edit_draft = text.to_string();
        true
    }

    /// Save the draft into the card. A blank draft keeps the editor open.
    pub fn commit_edit(&mut self, board: &mut Board) -> bool {
        let Some(target) = &self.editing else {
            return false;
        };
        if is_blank(&self.edit_draft) {
            return false;
        }
        if !board.edit_card(&target.list_id, &target.card_id, &self.edit_draft) {
            return false;
        }
        self.cancel_edit();
        true
    }

    pub fn cancel_edit(&mut self) -> bool {
        let was_editing = self.editing.take().is_some();
        self.edit_draft.clear();
        was_editing
    }

    // ---- housekeeping after board changes ----

    /// Close anything that refers to a deleted list
    pub fn forget_list(&mut self, list_id: &str) {
        if self.adding_card_to.as_deref() == Some(list_id) {
            debug!("Closing add-card form of deleted list {}", list_id);
            self.close_card_form();
        }
        if self.editing.as_ref().is_some_and(|e| e.list_id == list_id) {
            self.cancel_edit();
        }
    }

    /// Stop editing a deleted card
    pub fn forget_card(&mut self, card_id: &str) {
        if self.editing.as_ref().is_some_and(|e| e.card_id == card_id) {
            debug!("Stopping edit of deleted card {}", card_id);
            self.cancel_edit();
        }
    }

    /// Keep the edit target pointing at a card that moved lists
    pub fn follow_card(&mut self, card_id: &str, list_id: &str) {
        if let Some(editing) = self.editing.as_mut() {
            if editing.card_id == card_id {
                editing.list_id = list_id.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Card, List};

    fn board() -> Board {
        Board::from_lists(vec![
            List::new("todo", "Todo").with_cards(vec![Card::new("c1", "one")]),
            List::new("done", "Done"),
        ])
        .unwrap()
    }

    #[test]
    fn test_card_form_flow() {
        let mut board = board();
        let mut editor = Editor::new();

        assert!(editor.open_card_form(&board, "done"));
        assert!(editor.set_card_draft("Write docs"));
        let id = editor.submit_card_form(&mut board).unwrap();

        assert_eq!(board.card("done", &id).unwrap().content, "Write docs");
        assert!(editor.adding_card_to().is_none());
        assert_eq!(editor.card_draft(), "");
    }

    #[test]
    fn test_blank_card_draft_keeps_form_open() {
        let mut board = board();
        let before = board.clone();
        let mut editor = Editor::new();

        editor.open_card_form(&board, "todo");
        editor.set_card_draft("   ");
        assert!(editor.submit_card_form(&mut board).is_none());

        assert_eq!(board, before);
        assert_eq!(editor.adding_card_to(), Some("todo"));
        assert_eq!(editor.card_draft(), "   ");
    }

    #[test]
    fn test_card_form_requires_known_list() {
        let board = board();
        let mut editor = Editor::new();
        assert!(!editor.open_card_form(&board, "missing"));
        assert!(!editor.set_card_draft("text"));
    }

    #[test]
    fn test_reopening_card_form_clears_draft() {
        let board = board();
        let mut editor = Editor::new();

        editor.open_card_form(&board, "todo");
        editor.set_card_draft("half typed");
        editor.open_card_form(&board, "done");

        assert_eq!(editor.adding_card_to(), Some("done"));
        assert_eq!(editor.card_draft(), "");
    }

    #[test]
    fn test_list_form_flow() {
        let mut board = board();
        let mut editor = Editor::new();

        assert!(editor.submit_list_form(&mut board).is_none());
        assert!(!editor.set_list_draft("ignored"));

        editor.open_list_form();
        editor.set_list_draft("");
        assert!(editor.submit_list_form(&mut board).is_none());
        assert!(editor.is_adding_list());

        editor.set_list_draft("Review");
        let id = editor.submit_list_form(&mut board).unwrap();
        assert_eq!(board.lists().last().unwrap().id, id);
        assert!(!editor.is_adding_list());

        editor.open_list_form();
        editor.set_list_draft("Later");
        assert!(editor.close_list_form());
        assert_eq!(editor.list_draft(), "");
        assert_eq!(board.lists().len(), 3);
    }

    #[test]
    fn test_edit_flow() {
        let mut board = board();
        let mut editor = Editor::new();

        assert!(editor.begin_edit(&board, "todo", "c1"));
        assert_eq!(editor.edit_draft(), "one");

        editor.set_edit_draft("");
        assert!(!editor.commit_edit(&mut board));
        assert!(editor.editing().is_some());

        editor.set_edit_draft("one, edited");
        assert!(editor.commit_edit(&mut board));
        assert_eq!(board.card("todo", "c1").unwrap().content, "one, edited");
        assert!(editor.editing().is_none());
    }

    #[test]
    fn test_cancel_edit_leaves_card() {
        let board = board();
        let mut editor = Editor::new();

        editor.begin_edit(&board, "todo", "c1");
        editor.set_edit_draft("discarded");
        assert!(editor.cancel_edit());
        assert_eq!(board.card("todo", "c1").unwrap().content, "one");
        assert!(!editor.begin_edit(&board, "done", "c1"));
    }

    #[test]
    fn test_housekeeping() {
        let mut board = board();
        let mut editor = Editor::new();

        editor.open_card_form(&board, "todo");
        editor.begin_edit(&board, "todo", "c1");
        editor.forget_list("done");
        assert!(editor.adding_card_to().is_some());

        board.move_card("c1", "todo", "done", 0);
        editor.follow_card("c1", "done");
        editor.set_edit_draft("moved");
        assert!(editor.commit_edit(&mut board));
        assert_eq!(board.card("done", "c1").unwrap().content, "moved");

        editor.forget_list("todo");
        assert!(editor.adding_card_to().is_none());

        editor.begin_edit(&board, "done", "c1");
        editor.forget_card("c1");
        assert!(editor.editing().is_none());
    }
}
