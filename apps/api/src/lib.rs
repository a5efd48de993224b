//! # TodoFlow API ライブラリ
//!
//! API サーバーのルーター・ハンドラ・ユースケースを公開する。
//! バイナリ（`main.rs`）と統合テストの双方から利用される。

pub mod app_builder;
pub mod error;
pub mod handler;
pub mod usecase;
