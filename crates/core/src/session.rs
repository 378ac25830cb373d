//! Board session
//!
//! A session is the board plus its interaction state. Events are applied one
//! at a time and each runs to completion before the next.

use serde::Serialize;
use tracing::debug;

use crate::board::{Board, Seed};
use crate::drag::{DragCoordinator, DropOutcome};
use crate::editor::Editor;
use crate::event::BoardEvent;

/// What applying an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Lists or cards changed
    BoardChanged,
    /// Only forms, drafts or drag state changed
    InteractionChanged,
    /// Nothing applied: blank text, unknown id, or an event out of turn
    Ignored,
}

impl Outcome {
    fn from_flags(board_changed: bool, interaction_changed: bool) -> Self {
        if board_changed {
            Self::BoardChanged
        } else if interaction_changed {
            Self::InteractionChanged
        } else {
            Self::Ignored
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
    editor: Editor,
    drag: DragCoordinator,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            editor: Editor::new(),
            drag: DragCoordinator::new(),
        }
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self::new(seed.build())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn drag(&self) -> &DragCoordinator {
        &self.drag
    }

    /// Apply a single input event
    pub fn apply(&mut self, event: BoardEvent) -> Outcome {
        let kind = event.kind();
        let outcome = self.dispatch(event);
        if outcome == Outcome::Ignored {
            debug!("Event {} ignored", kind);
        } else {
            debug!("Event {} applied: {:?}", kind, outcome);
        }
        outcome
    }

    fn dispatch(&mut self, event: BoardEvent) -> Outcome {
        match event {
            BoardEvent::AddList { title } => {
                Outcome::from_flags(self.board.add_list(&title).is_some(), false)
            }
            BoardEvent::RenameList { list_id, title } => {
                Outcome::from_flags(self.board.rename_list(&list_id, &title), false)
            }
            BoardEvent::DeleteList { list_id } => {
                let removed = self.board.delete_list(&list_id);
                if let Some(list) = &removed {
                    self.editor.forget_list(&list.id);
                    if self.drag.active().is_some_and(|d| d.list_id == list.id) {
                        self.drag.cancel();
                    }
                }
                Outcome::from_flags(removed.is_some(), false)
            }
            BoardEvent::AddCard { list_id, content } => {
                Outcome::from_flags(self.board.add_card(&list_id, &content).is_some(), false)
            }
            BoardEvent::EditCard {
                list_id,
                card_id,
                content,
            } => Outcome::from_flags(self.board.edit_card(&list_id, &card_id, &content), false),
            BoardEvent::DeleteCard { list_id, card_id } => {
                let removed = self.board.delete_card(&list_id, &card_id);
                if removed.is_some() {
                    self.editor.forget_card(&card_id);
                    if self.drag.active().is_some_and(|d| d.card_id == card_id) {
                        self.drag.cancel();
                    }
                }
                Outcome::from_flags(removed.is_some(), false)
            }
            BoardEvent::MoveCard {
                card_id,
                source_list_id,
                dest_list_id,
                dest_index,
            } => {
                let moved =
                    self.board
                        .move_card(&card_id, &source_list_id, &dest_list_id, dest_index);
                if moved {
                    self.editor.follow_card(&card_id, &dest_list_id);
                    self.drag.refresh(&self.board);
                }
                Outcome::from_flags(moved, false)
            }

            BoardEvent::OpenListForm => Outcome::from_flags(false, self.editor.open_list_form()),
            BoardEvent::ListDraftChanged { text } => {
                Outcome::from_flags(false, self.editor.set_list_draft(&text))
            }
            BoardEvent::SubmitListForm => Outcome::from_flags(
                self.editor.submit_list_form(&mut self.board).is_some(),
                false,
            ),
            BoardEvent::CloseListForm => Outcome::from_flags(false, self.editor.close_list_form()),

            BoardEvent::OpenCardForm { list_id } => {
                Outcome::from_flags(false, self.editor.open_card_form(&self.board, &list_id))
            }
            BoardEvent::CardDraftChanged { text } => {
                Outcome::from_flags(false, self.editor.set_card_draft(&text))
            }
            BoardEvent::SubmitCardForm => Outcome::from_flags(
                self.editor.submit_card_form(&mut self.board).is_some(),
                false,
            ),
            BoardEvent::CloseCardForm => Outcome::from_flags(false, self.editor.close_card_form()),

            BoardEvent::BeginEdit { list_id, card_id } => Outcome::from_flags(
                false,
                self.editor.begin_edit(&self.board, &list_id, &card_id),
            ),
            BoardEvent::EditDraftChanged { text } => {
                Outcome::from_flags(false, self.editor.set_edit_draft(&text))
            }
            BoardEvent::CommitEdit => {
                Outcome::from_flags(self.editor.commit_edit(&mut self.board), false)
            }
            BoardEvent::CancelEdit => Outcome::from_flags(false, self.editor.cancel_edit()),

            BoardEvent::DragStart { card_id } => {
                Outcome::from_flags(false, self.drag.begin(&self.board, &card_id))
            }
            BoardEvent::Drop { target } => {
                let dragged = self.drag.active().map(|d| d.card_id.clone());
                match self.drag.drop(&mut self.board, target) {
                    DropOutcome::Moved => {
                        if let Some(card_id) = dragged {
                            if let Some((list_id, _)) = self.board.locate_card(&card_id) {
                                self.editor.follow_card(&card_id, list_id);
                            }
                        }
                        Outcome::BoardChanged
                    }
                    DropOutcome::Unchanged | DropOutcome::Cancelled => {
                        Outcome::InteractionChanged
                    }
                    DropOutcome::NotDragging => Outcome::Ignored,
                }
            }
            BoardEvent::DragCancel => Outcome::from_flags(false, self.drag.cancel()),
        }
    }
}
