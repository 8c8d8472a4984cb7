//! App - アプリケーション層
//!
//! ports とコレクション操作を組み合わせて、呼び出し側が使う表面を提供します。
//!
//! # 主要コンポーネント
//! - **TaskBoard**: 現在の一覧を所有し、変更のたびにスナップショットを保存
//! - **view**: 一覧フィルタ、1 行表示、pending カウンタ

pub mod board;
pub mod view;

pub use self::board::TaskBoard;
pub use self::view::{ParseViewFilterError, ViewFilter, pending_summary, render_task};
