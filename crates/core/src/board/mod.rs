//! Board state management
//!
//! This module owns the list/card model and the mutation algorithm: list and
//! card CRUD plus the move used by drag-and-drop.

mod ids;
mod model;
mod seed;
mod state;

pub use ids::{generate_id, CARD_ID_PREFIX, LIST_ID_PREFIX};
pub use model::*;
pub(crate) use model::is_blank;
pub use seed::Seed;
pub use state::Board;
