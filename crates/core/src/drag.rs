//! Drag-and-drop coordination
//!
//! A drag lives from the gesture start until the drop or cancel. Only one
//! drag can be in flight; the board is touched only on drop.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;

/// Where the dragged card came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSource {
    pub card_id: String,
    pub list_id: String,
    pub index: usize,
}

/// The list and insertion index under the pointer when the card is released
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    pub list_id: String,
    pub index: usize,
}

impl DropTarget {
    pub fn new(list_id: impl Into<String>, index: usize) -> Self {
        Self {
            list_id: list_id.into(),
            index,
        }
    }

    /// Compute the insertion index from the pointer position over a list.
    ///
    /// `card_midpoints` are the vertical midpoints of the cards currently laid
    /// out in the list, top to bottom, without the dragged card. The card is
    /// inserted before the first card whose midpoint is below the pointer.
    pub fn at_pointer(list_id: impl Into<String>, card_midpoints: &[f64], pointer: f64) -> Self {
        let index = card_midpoints
            .iter()
            .take_while(|midpoint| **midpoint < pointer)
            .count();
        Self::new(list_id, index)
    }
}

/// Result of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropOutcome {
    Moved,
    /// Dropped back where it started, or the move was rejected
    Unchanged,
    /// Released outside of any list
    Cancelled,
    NotDragging,
}

#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    active: Option<DragSource>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&DragSource> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Start dragging a card. Refused while another drag is in flight or when
    /// the card is not on the board.
    pub fn begin(&mut self, board: &Board, card_id: &str) -> bool {
        if let Some(active) = &self.active {
            debug!(
                "Drag of {} refused, {} is already being dragged",
                card_id, active.card_id
            );
            return false;
        }
        let Some((list_id, index)) = board.locate_card(card_id) else {
            debug!("Drag refused, card {} not found", card_id);
            return false;
        };

        debug!("Drag started: {} from {}[{}]", card_id, list_id, index);
        self.active = Some(DragSource {
            card_id: card_id.to_string(),
            list_id: list_id.to_string(),
            index,
        });
        true
    }

    /// Finish the drag, moving the card to `target` when there is one.
    /// Drag state is cleared in every case.
    pub fn drop(&mut self, board: &mut Board, target: Option<DropTarget>) -> DropOutcome {
        let Some(source) = self.active.take() else {
            return DropOutcome::NotDragging;
        };
        let Some(target) = target else {
            debug!("Drag of {} released outside any list", source.card_id);
            return DropOutcome::Cancelled;
        };

        // The card may have been moved by another event since the drag began
        let Some((list_id, _)) = board.locate_card(&source.card_id) else {
            debug!("Dragged card {} is no longer on the board", source.card_id);
            return DropOutcome::Unchanged;
        };
        let list_id = list_id.to_string();

        if board.move_card(&source.card_id, &list_id, &target.list_id, target.index) {
            DropOutcome::Moved
        } else {
            DropOutcome::Unchanged
        }
    }

    /// Abandon the current drag. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Re-read the dragged card's position after the board changed. A drag
    /// whose card is gone is cancelled.
    pub fn refresh(&mut self, board: &Board) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        match board.locate_card(&active.card_id) {
            Some((list_id, index)) => {
                active.list_id = list_id.to_string();
                active.index = index;
            }
            None => {
                debug!("Dragged card {} removed, cancelling drag", active.card_id);
                self.active = None;
            }
        }
    }
}
