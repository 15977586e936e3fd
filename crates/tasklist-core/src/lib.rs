//! tasklist-core
//!
//! Core building blocks for the task list application.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, marker, task, errors）
//! - **ports**: 抽象化レイヤー（TaskStore, Clock）
//! - **impls**: 実装（InMemoryTaskStore）
//! - **app**: アプリケーションロジック（TaskService）
//!
//! 制御の流れは常に HTTP 境界 → TaskService → TaskStore です。
//! store が service を呼び返すことはありません。

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::TaskService;
pub use domain::{Color, ErrorKind, Priority, ServiceError, StoreError, Task, TaskId};
pub use impls::InMemoryTaskStore;
pub use ports::TaskStore;
