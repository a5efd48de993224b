//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host:         String,
   /// ポート番号
   pub port:         u16,
   /// データベース接続 URL
   pub database_url: String,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   ///
   /// `DATABASE_URL` のみ必須。`API_HOST` / `API_PORT` は
   /// 未設定時にデフォルト値を使用する。
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host:         env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port:         env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("API_PORT は有効なポート番号である必要があります"),
         database_url: env::var("DATABASE_URL")?,
      })
   }
}
