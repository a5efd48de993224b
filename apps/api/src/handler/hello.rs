//! # 挨拶ハンドラ
//!
//! `/api` 配下の疎通確認用エンドポイント。

use axum::Json;
use serde::Serialize;

/// 挨拶レスポンス
#[derive(Debug, Serialize)]
pub struct HelloResponse {
   pub message: String,
}

/// GET /api/hello
///
/// 固定の挨拶メッセージを返す。文言は旧実装のクライアントと互換。
pub async fn hello() -> Json<HelloResponse> {
   Json(HelloResponse {
      message: "Hello Next.js!".to_string(),
   })
}
