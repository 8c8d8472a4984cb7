//! Task identifiers.
//!
//! # ULID ベースの ID
//! - **時刻でソート可能**: timestamp が先頭にあるため、生成順序でソートできる
//! - **調整不要**: 既存のコレクションを見ずに生成でき、衝突はごく稀
//! - 衝突した場合は `collection::add_task` 側で再生成する
//!
//! Display は `task-` プレフィックス付き（例: `task-01HN...`）。
//! シリアライズ時はプレフィックスなしの ULID 文字列。
//!
//! # 旧形式
//! 以前のスナップショットは数値 ID（ミリ秒タイムスタンプ + 乱数）を持つ。
//! 読み込み時は `TaskId::from_legacy` で同じ数値が常に同じ ULID になるよう変換し、
//! 次の保存からは ULID 文字列で書き出す。

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

const PREFIX: &str = "task-";

/// Identifier of a Task, unique within a collection.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(Ulid);

impl TaskId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }

    /// Maps a numeric id from an older snapshot onto a ULID.
    /// Distinct numbers always give distinct ids.
    pub fn from_legacy(value: u64) -> Self {
        Self(Ulid::from(u128::from(value)))
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Ulid(Ulid),
            Legacy(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Ulid(ulid) => TaskId::from_ulid(ulid),
            Raw::Legacy(value) => TaskId::from_legacy(value),
        })
    }
}

impl From<Ulid> for TaskId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.0)
    }
}

#[derive(Debug, Error)]
#[error("invalid task id: {input}")]
pub struct ParseTaskIdError {
    input: String,
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    /// Accepts both `task-<ULID>` and a bare ULID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix(PREFIX).unwrap_or(raw);
        Ulid::from_string(raw)
            .map(TaskId::from_ulid)
            .map_err(|_| ParseTaskIdError {
                input: s.to_string(),
            })
    }
}
