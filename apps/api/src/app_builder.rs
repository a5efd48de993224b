//! # ルーター構築
//!
//! アプリケーションのルーターを組み立てる。
//! `main.rs` と統合テストの双方から同じ構成で利用する。

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, patch, post},
};
use todoflow_infra::repository::TodoRepository;
use tower_http::trace::TraceLayer;

use crate::handler::{TodoState, add_todo, health_check, hello, list_todos, toggle_todo};

/// ルーターを構築する
///
/// Todo API は `/api` 配下にマウントする。リポジトリ実装は
/// 型パラメータで注入する（本番は Postgres、テストはモック）。
pub fn build_router<R: TodoRepository + 'static>(state: Arc<TodoState<R>>) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .route("/api/hello", get(hello))
      .route("/api/todos/get", get(list_todos::<R>))
      .route("/api/todos/add", post(add_todo::<R>))
      .route("/api/todos/update/{id}", patch(toggle_todo::<R>))
      .with_state(state)
      .layer(TraceLayer::new_for_http())
}
