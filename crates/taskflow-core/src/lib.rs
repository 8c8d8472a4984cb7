//! taskflow-core
//!
//! Core building blocks for the taskflow task list manager.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, priority, task, stats, errors）
//! - **collection**: タスク一覧に対する純粋関数（add / toggle / filter / sort / search / stats）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, TaskStore）
//! - **impls**: ports の実装（InMemoryTaskStore, JsonFileTaskStore）
//! - **app**: アプリケーション層（TaskBoard, view）
//! - **config**: TOML 設定
//! - **error**: クレート全体のエラー型

pub mod app;
pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;

pub use app::{TaskBoard, ViewFilter};
pub use config::Config;
pub use domain::{Priority, Task, TaskId, TaskStats, ValidationError};
pub use error::{Result, TaskflowError};
