//! Core library for the kanban board
//!
//! This crate contains the board state and everything that mutates it:
//! - List and card management with drag-and-drop moves
//! - Form and edit state for the front end
//! - Input events, the session that applies them, and the rendered view

pub mod board;
pub mod drag;
pub mod editor;
pub mod error;
pub mod event;
pub mod session;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
