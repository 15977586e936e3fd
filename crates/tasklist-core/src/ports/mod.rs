//! Ports - 抽象化レイヤー
//!
//! service が依存するのはここで定義する trait だけです。
//! 実装（in-memory store など）は `impls` に置きます。

pub mod clock;
pub mod task_store;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::task_store::TaskStore;
