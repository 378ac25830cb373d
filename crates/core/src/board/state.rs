//! Board state and its mutation algorithm
//!
//! Every operation is total: an unknown list or card id, or blank text, leaves
//! the board untouched and is reported through the return value only.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::error::Error;
use crate::Result;

use super::ids::{generate_id, CARD_ID_PREFIX, LIST_ID_PREFIX};
use super::model::{is_blank, Card, List};

/// The complete board: an ordered sequence of lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    lists: Vec<List>,
}

#[derive(Deserialize)]
struct BoardFile {
    #[serde(default)]
    lists: Vec<List>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from existing lists, checking that every id is present
    /// and unique across lists and cards.
    pub fn from_lists(lists: Vec<List>) -> Result<Self> {
        let mut seen = HashSet::new();
        let ids = lists
            .iter()
            .flat_map(|list| std::iter::once(&list.id).chain(list.cards.iter().map(|c| &c.id)));
        for id in ids {
            if is_blank(id) {
                return Err(Error::InvalidInput("Empty list or card id".to_string()));
            }
            if !seen.insert(id.as_str()) {
                return Err(Error::DuplicateId(id.clone()));
            }
        }
        Ok(Self { lists })
    }

    /// Parse a board from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let file: BoardFile = serde_json::from_str(json)?;
        Self::from_lists(file.lists)
    }

    pub(crate) fn from_trusted(lists: Vec<List>) -> Self {
        Self { lists }
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    fn list_index(&self, list_id: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    fn list_mut(&mut self, list_id: &str) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == list_id)
    }

    pub fn card(&self, list_id: &str, card_id: &str) -> Option<&Card> {
        self.list(list_id)?.card(card_id)
    }

    /// Find which list holds a card and at what index
    pub fn locate_card(&self, card_id: &str) -> Option<(&str, usize)> {
        self.lists.iter().find_map(|list| {
            list.position(card_id)
                .map(|index| (list.id.as_str(), index))
        })
    }

    /// Whether any list or card already uses this id
    pub fn contains_id(&self, id: &str) -> bool {
        self.lists
            .iter()
            .any(|list| list.id == id || list.cards.iter().any(|card| card.id == id))
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }

    /// Append a new list. Returns its id, or `None` for a blank title.
    pub fn add_list(&mut self, title: &str) -> Option<String> {
        if is_blank(title) {
            trace!("Ignoring list with blank title");
            return None;
        }

        let id = generate_id(LIST_ID_PREFIX, |id| self.contains_id(id));
        debug!("Adding list {} ({})", id, title);
        self.lists.push(List::new(id.clone(), title));
        Some(id)
    }

    /// Change a list's title. Blank titles are rejected.
    pub fn rename_list(&mut self, list_id: &str, title: &str) -> bool {
        if is_blank(title) {
            return false;
        }
        let Some(list) = self.list_mut(list_id) else {
            trace!("Rename ignored, list {} not found", list_id);
            return false;
        };

        debug!("Renaming list {} to {}", list_id, title);
        list.title = title.to_string();
        true
    }

    /// Remove a list together with all of its cards
    pub fn delete_list(&mut self, list_id: &str) -> Option<List> {
        let index = self.list_index(list_id)?;
        let list = self.lists.remove(index);
        debug!("Deleted list {} with {} cards", list.id, list.cards.len());
        Some(list)
    }

    /// Append a card to a list. Returns its id, or `None` for blank content or
    /// an unknown list.
    pub fn add_card(&mut self, list_id: &str, content: &str) -> Option<String> {
        if is_blank(content) {
            trace!("Ignoring card with blank content");
            return None;
        }
        if self.list_index(list_id).is_none() {
            trace!("Add card ignored, list {} not found", list_id);
            return None;
        }

        let id = generate_id(CARD_ID_PREFIX, |id| self.contains_id(id));
        let list = self.list_mut(list_id)?;
        debug!("Adding card {} to list {}", id, list_id);
        list.cards.push(Card::new(id.clone(), content));
        Some(id)
    }

    /// Replace a card's content. Blank content is rejected.
    pub fn edit_card(&mut self, list_id: &str, card_id: &str, content: &str) -> bool {
        if is_blank(content) {
            return false;
        }
        let Some(card) = self
            .list_mut(list_id)
            .and_then(|list| list.cards.iter_mut().find(|card| card.id == card_id))
        else {
            trace!("Edit ignored, card {} not found in list {}", card_id, list_id);
            return false;
        };

        debug!("Editing card {}", card_id);
        card.content = content.to_string();
        true
    }

    pub fn delete_card(&mut self, list_id: &str, card_id: &str) -> Option<Card> {
        let list = self.list_mut(list_id)?;
        let index = list.position(card_id)?;
        debug!("Deleting card {} from list {}", card_id, list_id);
        Some(list.cards.remove(index))
    }

    /// Move a card out of `source_list_id` and insert it at `dest_index` of
    /// `dest_list_id`. The index is clamped to the destination length (after
    /// removal for moves within one list). Returns whether the board changed.
    pub fn move_card(
        &mut self,
        card_id: &str,
        source_list_id: &str,
        dest_list_id: &str,
        dest_index: usize,
    ) -> bool {
        let (Some(source), Some(dest)) = (
            self.list_index(source_list_id),
            self.list_index(dest_list_id),
        ) else {
            trace!(
                "Move ignored, list {} or {} not found",
                source_list_id,
                dest_list_id
            );
            return false;
        };
        let Some(source_index) = self.lists[source].position(card_id) else {
            trace!("Move ignored, card {} not in list {}", card_id, source_list_id);
            return false;
        };

        let dest_len = if source == dest {
            self.lists[dest].cards.len() - 1
        } else {
            self.lists[dest].cards.len()
        };
        let index = dest_index.min(dest_len);
        if source == dest && index == source_index {
            return false;
        }

        let card = self.lists[source].cards.remove(source_index);
        self.lists[dest].cards.insert(index, card);
        debug!(
            "Moved card {} from {}[{}] to {}[{}]",
            card_id, source_list_id, source_index, dest_list_id, index
        );
        true
    }
}
