use thiserror::Error;

use crate::app::models::TaskId;

// Why a store operation left the collection untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("No task with id {0}")]
    UnknownId(TaskId),
    #[error("No task ids left to issue")]
    IdsExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown status `{0}` (expected pending, in_progress or completed)")]
    UnknownStatus(String),
    #[error("unknown priority `{0}` (expected low, medium or high)")]
    UnknownPriority(String),
}
