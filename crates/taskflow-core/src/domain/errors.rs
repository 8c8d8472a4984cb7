//! Errors - 入力検証エラー
//!
//! コレクション操作が返す唯一のエラー。
//! どちらも呼び出し側で修正可能な入力ミスで、リトライや復旧の概念はない。

use thiserror::Error;

/// ValidationError は新規タスクの入力検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// description が空、または trim 後に空白のみ
    #[error("task description is required")]
    EmptyDescription,

    /// high / medium / low 以外の priority
    #[error("invalid priority '{0}', use high, medium or low")]
    InvalidPriority(String),
}
