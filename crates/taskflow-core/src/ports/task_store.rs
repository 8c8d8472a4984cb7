//! TaskStore port - コレクションのスナップショット保存
//!
//! TaskStore は「現在のタスク一覧」を丸ごと読み書きするだけの口です。
//! 部分更新・履歴・トランザクションは持ちません。
//!
//! # 実装
//! - `impls::InMemoryTaskStore`（テスト・demo 用）
//! - `impls::JsonFileTaskStore`（CLI 用、JSON 配列をファイルに保存）

use thiserror::Error;

use crate::domain::Task;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// TaskStore はタスク一覧の full snapshot を保存する
///
/// # 設計原則
/// - `load`: 何も保存されていなければ空の一覧
/// - `save`: 呼び出しのたびに一覧全体を上書き
pub trait TaskStore {
    fn load(&self) -> Result<Vec<Task>, StoreError>;

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}
