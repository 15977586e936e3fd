//! Errors - エラー型と分類
//!
//! - `StoreError`: store 層の唯一の失敗（対象 task が存在しない）
//! - `ServiceError`: 入力検証エラー + store エラーの文脈付きラップ
//! - `ErrorKind`: 呼び出し側（HTTP 境界）が分岐に使うフラットな分類

use thiserror::Error;

use super::TaskId;
use super::task::MAX_TITLE_LENGTH;

/// ErrorKind はエラーの分類
///
/// 全て呼び出し側の入力に起因し、入力を直せば回復できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyTitle,
    TitleTooLong,
    InvalidPriority,
    InvalidColor,
    TaskNotFound,
}

impl ErrorKind {
    /// Rejected by create-time validation (as opposed to a missing task).
    pub fn is_validation(&self) -> bool {
        !matches!(self, ErrorKind::TaskNotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("task not found: id={0}")]
    TaskNotFound(TaskId),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::TaskNotFound(_) => ErrorKind::TaskNotFound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("task title cannot exceed {max} characters (got {length})", max = MAX_TITLE_LENGTH)]
    TitleTooLong { length: usize },

    #[error("invalid priority emoticon: {0:?}")]
    InvalidPriority(String),

    #[error("invalid color code: {0:?}")]
    InvalidColor(String),

    #[error("failed to {operation} task")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::EmptyTitle => ErrorKind::EmptyTitle,
            ServiceError::TitleTooLong { .. } => ErrorKind::TitleTooLong,
            ServiceError::InvalidPriority(_) => ErrorKind::InvalidPriority,
            ServiceError::InvalidColor(_) => ErrorKind::InvalidColor,
            ServiceError::Store { source, .. } => source.kind(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::TaskNotFound
    }
}
