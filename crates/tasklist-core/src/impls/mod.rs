//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryTaskStore**: プロセス内メモリの TaskStore

pub mod inmem_store;

// 主要な型を再エクスポート
pub use self::inmem_store::InMemoryTaskStore;
