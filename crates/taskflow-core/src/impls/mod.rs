//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryTaskStore**: テスト・demo 用
//! - **JsonFileTaskStore**: CLI が使うファイル保存

pub mod inmem_store;
pub mod json_file_store;

pub use self::inmem_store::InMemoryTaskStore;
pub use self::json_file_store::JsonFileTaskStore;
