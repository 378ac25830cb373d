//! Initial board contents

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

use super::model::{Card, List};
use super::state::Board;

/// Which board a new session starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seed {
    /// Three lists with a handful of sample cards
    #[default]
    Demo,
    Empty,
}

impl Seed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Empty => "empty",
        }
    }

    pub fn build(self) -> Board {
        match self {
            Self::Demo => Board::from_trusted(demo_lists()),
            Self::Empty => Board::new(),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "empty" => Ok(Self::Empty),
            other => Err(Error::InvalidInput(format!("Unknown seed: {}", other))),
        }
    }
}

fn demo_lists() -> Vec<List> {
    vec![
        List::new("list-1", "To Do").with_cards(vec![
            Card::new("card-1", "Task 1"),
            Card::new("card-2", "Task 2"),
            Card::new("card-3", "Task 3"),
        ]),
        List::new("list-2", "In Progress").with_cards(vec![
            Card::new("card-4", "Task 4"),
            Card::new("card-5", "Task 5"),
        ]),
        List::new("list-3", "Done").with_cards(vec![Card::new("card-6", "Task 6")]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_lists_satisfy_board_invariants() {
        let board = Board::from_lists(demo_lists()).unwrap();
        assert_eq!(board, Seed::Demo.build());
        assert_eq!(board.lists().len(), 3);
        assert_eq!(board.card_count(), 6);
        assert_eq!(board.list("list-1").unwrap().card_ids(), vec!["card-1", "card-2", "card-3"]);
    }

    #[test]
    fn test_empty_seed() {
        assert!(Seed::Empty.build().lists().is_empty());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!("demo".parse::<Seed>().unwrap(), Seed::Demo);
        assert_eq!(" EMPTY ".parse::<Seed>().unwrap(), Seed::Empty);
        assert!(matches!("trello".parse::<Seed>(), Err(Error::InvalidInput(_))));
        assert_eq!(Seed::default().to_string(), "demo");
    }
}
