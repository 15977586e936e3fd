//! App - アプリケーション層
//!
//! ports を組み合わせて業務ルールを実装します。
//!
//! # 主要コンポーネント
//! - **TaskService**: 入力の検証・正規化・デフォルト適用を行い、TaskStore に委譲

pub mod service;

// 主要な型を再エクスポート
pub use self::service::TaskService;
