//! # Todo ハンドラ
//!
//! Todo の一覧・作成・完了フラグ反転 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/todos/get` - 全 Todo の一覧
//! - `POST /api/todos/add` - Todo の作成
//! - `PATCH /api/todos/update/{id}` - 完了フラグの反転
//!
//! ## ワイヤ互換性
//!
//! レスポンスの JSON キーは旧実装に合わせて camelCase
//! （`isCompleted` / `createdAt` / `updatedAt`）。成功メッセージの文言も
//! 旧実装のまま維持する。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todoflow_domain::todo::{Todo, TodoId};
use todoflow_infra::repository::TodoRepository;

use crate::{
   error::ApiError,
   usecase::todo::{AddTodoInput, TodoUseCaseImpl},
};

/// Todo API の共有状態
///
/// プロセス起動時に一度だけ構築し、全リクエストで共有する。
pub struct TodoState<R: TodoRepository> {
   pub usecase: TodoUseCaseImpl<R>,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
///
/// フィールドの欠落は検証せず、そのままストレージに渡す
/// （NOT NULL 制約違反は 500 として返る）。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
   pub title:       Option<String>,
   pub description: Option<String>,
}

/// Todo 1 件の DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
   pub id:           i32,
   pub title:        String,
   pub description:  String,
   pub is_completed: bool,
   pub created_at:   DateTime<Utc>,
   pub updated_at:   DateTime<Utc>,
}

impl From<&Todo> for TodoDto {
   fn from(todo: &Todo) -> Self {
      Self {
         id:           todo.id().as_i32(),
         title:        todo.title().to_string(),
         description:  todo.description().to_string(),
         is_completed: todo.is_completed(),
         created_at:   todo.created_at(),
         updated_at:   todo.updated_at(),
      }
   }
}

/// 一覧レスポンス
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
   pub message: String,
   pub todos:   Vec<TodoDto>,
}

/// 単一 Todo レスポンス（作成・更新で共用）
#[derive(Debug, Serialize)]
pub struct TodoResponse {
   pub message: String,
   pub todo:    TodoDto,
}

// --- ハンドラ ---

/// GET /api/todos/get
///
/// 全 Todo を取得する。フィルタ・ページングなし、順序は実装定義。
pub async fn list_todos<R: TodoRepository>(
   State(state): State<Arc<TodoState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
   let todos = state.usecase.list_todos().await?;

   let response = TodoListResponse {
      message: "Todos retrieved successfully".to_string(),
      todos:   todos.iter().map(TodoDto::from).collect(),
   };
   Ok((StatusCode::OK, Json(response)))
}

/// POST /api/todos/add
///
/// Todo を作成する。完了フラグはクライアント入力に関わらず `false`。
///
/// ## レスポンス
///
/// - `201 Created`: 採番済みの Todo
/// - `500 Internal Server Error`: ボディ不正・制約違反・DB エラー
pub async fn add_todo<R: TodoRepository>(
   State(state): State<Arc<TodoState<R>>>,
   WithRejection(Json(req), _): WithRejection<Json<CreateTodoRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
   let todo = state
      .usecase
      .add_todo(AddTodoInput {
         title:       req.title,
         description: req.description,
      })
      .await?;

   let response = TodoResponse {
      message: "Todo added successfully".to_string(),
      todo:    TodoDto::from(&todo),
   };
   Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /api/todos/update/{id}
///
/// 完了フラグを現在値の論理否定に反転する。他のフィールドは変更しない。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の Todo
/// - `404 Not Found`: 対象が存在しない（数値化できない ID を含む）
/// - `500 Internal Server Error`: DB エラー
pub async fn toggle_todo<R: TodoRepository>(
   State(state): State<Arc<TodoState<R>>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   // 数値化できないパスセグメントは、どの行にも一致しない ID と同じ扱い
   let id = TodoId::parse(&id).ok_or(ApiError::TodoNotFound)?;

   let todo = state.usecase.toggle_todo(&id).await?;

   let response = TodoResponse {
      message: "Todo updated successfully".to_string(),
      todo:    TodoDto::from(&todo),
   };
   Ok((StatusCode::OK, Json(response)))
}
