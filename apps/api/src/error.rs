//! # API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## 設計方針
//!
//! エラーから HTTP レスポンスへの変換はこの `IntoResponse` 実装の
//! 一箇所に集約する。ハンドラ側は `?` で伝播させるだけでよい。
//!
//! ## ワイヤ互換性
//!
//! レスポンスボディの形状と文言は旧実装のまま維持する:
//!
//! - 404: `{ "message": "Todo not found" }`
//! - 500: `{ "message": "Error adding todo", "error": "<詳細>" }`
//!
//! 500 の `message` はどの操作が失敗しても同一リテラル（旧実装の
//! 全ハンドラがこの文言を共有していた）。

use axum::{
   Json,
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use todoflow_infra::InfraError;

/// 全失敗レスポンスが共有する `message` リテラル
const ERROR_MESSAGE: &str = "Error adding todo";

/// エラーレスポンスボディ
///
/// 404 は `message` のみ、500 は `message` + `error` を持つ。
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
   pub message: String,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub error:   Option<String>,
}

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 対象の Todo が存在しない（数値化できない ID を含む）
   #[error("todo が見つかりません")]
   TodoNotFound,

   /// リクエストボディが JSON として解釈できない
   #[error("リクエストボディの読み取りに失敗しました: {0}")]
   InvalidBody(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::TodoNotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse {
               message: "Todo not found".to_string(),
               error:   None,
            },
         ),
         ApiError::InvalidBody(detail) => {
            tracing::error!("リクエストボディの読み取りに失敗しました: {}", detail);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse {
                  message: ERROR_MESSAGE.to_string(),
                  error:   Some(detail),
               },
            )
         }
         ApiError::Database(e) => {
            tracing::error!(span_trace = %e.span_trace(), "データベースエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse {
                  message: ERROR_MESSAGE.to_string(),
                  error:   Some(e.to_string()),
               },
            )
         }
      };

      (status, Json(body)).into_response()
   }
}

// Json エクストラクタの rejection を 500 に差し替える。
// axum デフォルトの 422/400 ではなく、不正な入力をデータベース層の
// 失敗と同じ経路で返す（旧実装のふるまい）。
impl From<JsonRejection> for ApiError {
   fn from(rejection: JsonRejection) -> Self {
      Self::InvalidBody(rejection.body_text())
   }
}
