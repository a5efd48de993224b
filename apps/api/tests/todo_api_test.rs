//! # Todo API 統合テスト
//!
//! 実際のルーター構成（`build_router`）に対して oneshot リクエストを送り、
//! ステータスコードとレスポンスボディのワイヤ形状を検証する。
//! リポジトリはインメモリモックで、データベースは不要。

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{Method, Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use todoflow_api::{app_builder::build_router, handler::TodoState, usecase::TodoUseCaseImpl};
use todoflow_infra::mock::MockTodoRepository;
use tower::ServiceExt;

/// モックリポジトリ入りのテスト用アプリを構築する
fn test_app() -> (Router, MockTodoRepository) {
   let repo = MockTodoRepository::new();
   let state = Arc::new(TodoState {
      usecase: TodoUseCaseImpl::new(repo.clone()),
   });
   (build_router(state), repo)
}

/// リクエストを送信し、ステータスコードと JSON ボディを返す
async fn send(
   app: &Router,
   method: Method,
   uri: &str,
   body: Option<Value>,
) -> (StatusCode, Value) {
   let request = match body {
      Some(json_body) => Request::builder()
         .method(method)
         .uri(uri)
         .header(header::CONTENT_TYPE, "application/json")
         .body(Body::from(json_body.to_string()))
         .unwrap(),
      None => Request::builder()
         .method(method)
         .uri(uri)
         .body(Body::empty())
         .unwrap(),
   };

   let response = app.clone().oneshot(request).await.unwrap();
   let status = response.status();
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   let json = serde_json::from_slice(&bytes).unwrap();
   (status, json)
}

/// Todo を 1 件作成して作成レスポンスの `todo` を返す
async fn add_todo(app: &Router, title: &str, description: &str) -> Value {
   let (status, body) = send(
      app,
      Method::POST,
      "/api/todos/add",
      Some(json!({ "title": title, "description": description })),
   )
   .await;
   assert_eq!(status, StatusCode::CREATED);
   body["todo"].clone()
}

#[tokio::test]
async fn test_helloは固定メッセージを返す() {
   let (app, _) = test_app();

   let (status, body) = send(&app, Method::GET, "/api/hello", None).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body, json!({ "message": "Hello Next.js!" }));
}

#[tokio::test]
async fn test_ヘルスチェックはhealthyを返す() {
   let (app, _) = test_app();

   let (status, body) = send(&app, Method::GET, "/health", None).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_作成は201と未完了のtodoを返す() {
   let (app, _) = test_app();

   let (status, body) = send(
      &app,
      Method::POST,
      "/api/todos/add",
      Some(json!({ "title": "Buy milk", "description": "2%" })),
   )
   .await;

   assert_eq!(status, StatusCode::CREATED);
   assert_eq!(body["message"], "Todo added successfully");
   assert_eq!(body["todo"]["isCompleted"], json!(false));
   assert_eq!(body["todo"]["title"], "Buy milk");
   assert_eq!(body["todo"]["description"], "2%");
   assert!(body["todo"]["id"].is_i64(), "id が採番されていること: {body}");
   assert!(body["todo"]["createdAt"].is_string());
   assert!(body["todo"]["updatedAt"].is_string());
}

#[tokio::test]
async fn test_完了フラグはクライアント入力に関わらずfalseで作成される() {
   let (app, _) = test_app();

   let (status, body) = send(
      &app,
      Method::POST,
      "/api/todos/add",
      Some(json!({ "title": "a", "description": "b", "isCompleted": true })),
   )
   .await;

   assert_eq!(status, StatusCode::CREATED);
   assert_eq!(body["todo"]["isCompleted"], json!(false));
}

#[tokio::test]
async fn test_作成直後の一覧に作成したtodoが含まれる() {
   let (app, _) = test_app();
   add_todo(&app, "Buy milk", "2%").await;

   let (status, body) = send(&app, Method::GET, "/api/todos/get", None).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body["message"], "Todos retrieved successfully");
   let todos = body["todos"].as_array().unwrap();
   assert!(
      todos.iter().any(|t| t["title"] == "Buy milk" && t["description"] == "2%"),
      "作成した Todo が一覧に含まれること: {body}"
   );
}

#[tokio::test]
async fn test_作成と一覧のラウンドトリップでフィールドが一致する() {
   let (app, _) = test_app();
   let created = add_todo(&app, "Buy milk", "2%").await;

   let (_, body) = send(&app, Method::GET, "/api/todos/get", None).await;
   let listed = body["todos"]
      .as_array()
      .unwrap()
      .iter()
      .find(|t| t["id"] == created["id"])
      .cloned()
      .unwrap();

   assert_eq!(listed["id"], created["id"]);
   assert_eq!(listed["title"], created["title"]);
   assert_eq!(listed["description"], created["description"]);
   assert_eq!(listed["isCompleted"], created["isCompleted"]);
}

#[tokio::test]
async fn test_トグルで完了フラグが反転し再トグルで戻る() {
   let (app, _) = test_app();
   let created = add_todo(&app, "a", "b").await;
   let uri = format!("/api/todos/update/{}", created["id"]);

   let (status, body) = send(&app, Method::PATCH, &uri, None).await;
   assert_eq!(status, StatusCode::OK);
   assert_eq!(body["message"], "Todo updated successfully");
   assert_eq!(body["todo"]["isCompleted"], json!(true));

   let (status, body) = send(&app, Method::PATCH, &uri, None).await;
   assert_eq!(status, StatusCode::OK);
   assert_eq!(body["todo"]["isCompleted"], json!(false));
}

#[tokio::test]
async fn test_トグルはupdated_atを再設定しない() {
   let (app, _) = test_app();
   let created = add_todo(&app, "a", "b").await;
   let uri = format!("/api/todos/update/{}", created["id"]);

   let (_, body) = send(&app, Method::PATCH, &uri, None).await;

   assert_eq!(body["todo"]["updatedAt"], created["updatedAt"]);
   assert_eq!(body["todo"]["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_存在しないidのトグルは404でテーブルを変更しない() {
   let (app, repo) = test_app();
   add_todo(&app, "a", "b").await;
   let before = repo.snapshot();

   let (status, body) = send(&app, Method::PATCH, "/api/todos/update/999", None).await;

   assert_eq!(status, StatusCode::NOT_FOUND);
   assert_eq!(body, json!({ "message": "Todo not found" }));
   assert_eq!(repo.snapshot(), before);
}

#[tokio::test]
async fn test_数値でないidのトグルは404を返す() {
   let (app, _) = test_app();
   add_todo(&app, "a", "b").await;

   let (status, body) = send(&app, Method::PATCH, "/api/todos/update/abc", None).await;

   assert_eq!(status, StatusCode::NOT_FOUND);
   assert_eq!(body, json!({ "message": "Todo not found" }));
}

#[tokio::test]
async fn test_書き込みなしの一覧は同一結果を返す() {
   let (app, _) = test_app();
   add_todo(&app, "a", "1").await;
   add_todo(&app, "b", "2").await;

   let (_, first) = send(&app, Method::GET, "/api/todos/get", None).await;
   let (_, second) = send(&app, Method::GET, "/api/todos/get", None).await;

   assert_eq!(first, second);
}

#[tokio::test]
async fn test_タイトル欠落の作成は500で共通メッセージを返す() {
   let (app, repo) = test_app();

   let (status, body) = send(
      &app,
      Method::POST,
      "/api/todos/add",
      Some(json!({ "description": "2%" })),
   )
   .await;

   assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(body["message"], "Error adding todo");
   assert!(body["error"].is_string(), "error に詳細が入ること: {body}");
   assert!(repo.snapshot().is_empty());
}

#[tokio::test]
async fn test_不正なjsonボディの作成は500を返す() {
   let (app, _) = test_app();

   let request = Request::builder()
      .method(Method::POST)
      .uri("/api/todos/add")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("not json"))
      .unwrap();
   let response = app.clone().oneshot(request).await.unwrap();

   let status = response.status();
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   let body: Value = serde_json::from_slice(&bytes).unwrap();

   assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(body["message"], "Error adding todo");
}
