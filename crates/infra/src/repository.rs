//! # リポジトリ
//!
//! 永続化の抽象（トレイト）と PostgreSQL 実装を提供する。
//!
//! ユースケース層はトレイトにのみ依存し、実装はアプリケーション起動時に
//! 注入する。

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
