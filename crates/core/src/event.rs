//! Board input events
//!
//! Every user action on the board arrives as one of these. The wire form is
//! a JSON object tagged by `type`.

use serde::{Deserialize, Serialize};

use crate::drag::DropTarget;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardEvent {
    // ---- direct board operations ----
    #[serde(rename = "list:add")]
    AddList { title: String },
    #[serde(rename = "list:rename")]
    RenameList {
        #[serde(rename = "listId")]
        list_id: String,
        title: String,
    },
    #[serde(rename = "list:delete")]
    DeleteList {
        #[serde(rename = "listId")]
        list_id: String,
    },
    #[serde(rename = "card:add")]
    AddCard {
        #[serde(rename = "listId")]
        list_id: String,
        content: String,
    },
    #[serde(rename = "card:edit")]
    EditCard {
        #[serde(rename = "listId")]
        list_id: String,
        #[serde(rename = "cardId")]
        card_id: String,
        content: String,
    },
    #[serde(rename = "card:delete")]
    DeleteCard {
        #[serde(rename = "listId")]
        list_id: String,
        #[serde(rename = "cardId")]
        card_id: String,
    },
    #[serde(rename = "card:move")]
    MoveCard {
        #[serde(rename = "cardId")]
        card_id: String,
        #[serde(rename = "sourceListId")]
        source_list_id: String,
        #[serde(rename = "destListId")]
        dest_list_id: String,
        #[serde(rename = "destIndex")]
        dest_index: usize,
    },

    // ---- add-list form ----
    #[serde(rename = "list-form:open")]
    OpenListForm,
    #[serde(rename = "list-form:input")]
    ListDraftChanged { text: String },
    #[serde(rename = "list-form:submit")]
    SubmitListForm,
    #[serde(rename = "list-form:close")]
    CloseListForm,

    // ---- add-card form ----
    #[serde(rename = "card-form:open")]
    OpenCardForm {
        #[serde(rename = "listId")]
        list_id: String,
    },
    #[serde(rename = "card-form:input")]
    CardDraftChanged { text: String },
    #[serde(rename = "card-form:submit")]
    SubmitCardForm,
    #[serde(rename = "card-form:close")]
    CloseCardForm,

    // ---- card editing ----
    #[serde(rename = "edit:begin")]
    BeginEdit {
        #[serde(rename = "listId")]
        list_id: String,
        #[serde(rename = "cardId")]
        card_id: String,
    },
    #[serde(rename = "edit:input")]
    EditDraftChanged { text: String },
    #[serde(rename = "edit:commit")]
    CommitEdit,
    #[serde(rename = "edit:cancel")]
    CancelEdit,

    // ---- drag and drop ----
    #[serde(rename = "drag:start")]
    DragStart {
        #[serde(rename = "cardId")]
        card_id: String,
    },
    /// `target` is absent when the card is released outside every list
    #[serde(rename = "drag:drop")]
    Drop {
        #[serde(default)]
        target: Option<DropTarget>,
    },
    #[serde(rename = "drag:cancel")]
    DragCancel,
}

impl BoardEvent {
    /// The wire name of this event
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddList { .. } => "list:add",
            Self::RenameList { .. } => "list:rename",
            Self::DeleteList { .. } => "list:delete",
            Self::AddCard { .. } => "card:add",
            Self::EditCard { .. } => "card:edit",
            Self::DeleteCard { .. } => "card:delete",
            Self::MoveCard { .. } => "card:move",
            Self::OpenListForm => "list-form:open",
            Self::ListDraftChanged { .. } => "list-form:input",
            Self::SubmitListForm => "list-form:submit",
            Self::CloseListForm => "list-form:close",
            Self::OpenCardForm { .. } => "card-form:open",
            Self::CardDraftChanged { .. } => "card-form:input",
            Self::SubmitCardForm => "card-form:submit",
            Self::CloseCardForm => "card-form:close",
            Self::BeginEdit { .. } => "edit:begin",
            Self::EditDraftChanged { .. } => "edit:input",
            Self::CommitEdit => "edit:commit",
            Self::CancelEdit => "edit:cancel",
            Self::DragStart { .. } => "drag:start",
            Self::Drop { .. } => "drag:drop",
            Self::DragCancel => "drag:cancel",
        }
    }
}
