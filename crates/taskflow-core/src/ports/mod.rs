//! Ports - 抽象化レイヤー
//!
//! 各 trait はコア外の関心事（時刻、ID 生成、永続化）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//! コレクション操作そのものはこれらに依存せず、引数として受け取るだけです。

pub mod clock;
pub mod id_generator;
pub mod task_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::task_store::{StoreError, TaskStore};
