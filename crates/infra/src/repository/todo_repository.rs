//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 メソッド 1 ステートメント**: 各メソッドは単一の SQL 文のみを発行し、
//!   トランザクション制御を行わない。単一文の原子性はデータベースが保証する
//! - **RETURNING 句**: 挿入・更新後の行をそのまま返し、読み直しを省く
//! - **順序は実装定義**: 一覧取得に ORDER BY を付けない

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use todoflow_domain::todo::{NewTodo, Todo, TodoId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// Todo の一覧・検索・挿入・完了フラグ更新を定義する。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全 Todo を取得する（フィルタ・ページングなし）
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError>;

    /// Todo を挿入し、採番済みの行を返す
    ///
    /// `id` / `created_at` / `updated_at` はストレージのデフォルトが付与する。
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError>;

    /// 完了フラグのみを更新し、更新後の行を返す
    ///
    /// 他のカラムには触れない（`updated_at` も再設定しない）。
    /// 対象行が存在しない場合は `None` を返す。
    async fn update_is_completed(
        &self,
        id: &TodoId,
        is_completed: bool,
    ) -> Result<Option<Todo>, InfraError>;
}

/// `todo_table` の行
///
/// `"isCompleted"` のみ camelCase のクォート付きカラム（旧実装由来の
/// スキーマをそのまま引き継いでいる）。
#[derive(Debug, FromRow)]
struct TodoRow {
    id:           i32,
    title:        String,
    description:  String,
    #[sqlx(rename = "isCompleted")]
    is_completed: bool,
    created_at:   DateTime<Utc>,
    updated_at:   DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::from_db(
            TodoId::from_i32(row.id),
            row.title,
            row.description,
            row.is_completed,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, "isCompleted", created_at, updated_at
            FROM todo_table
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, "isCompleted", created_at, updated_at
            FROM todo_table
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        // title / description は未検証のままバインドする。NULL は
        // NOT NULL 制約違反としてここでエラーになる。
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todo_table (title, description, "isCompleted")
            VALUES ($1, $2, $3)
            RETURNING id, title, description, "isCompleted", created_at, updated_at
            "#,
        )
        .bind(new_todo.title())
        .bind(new_todo.description())
        .bind(new_todo.is_completed())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id, is_completed))]
    async fn update_is_completed(
        &self,
        id: &TodoId,
        is_completed: bool,
    ) -> Result<Option<Todo>, InfraError> {
        // updated_at は再設定しない。作成時の値を保つ
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todo_table
            SET "isCompleted" = $2
            WHERE id = $1
            RETURNING id, title, description, "isCompleted", created_at, updated_at
            "#,
        )
        .bind(id.as_i32())
        .bind(is_completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresTodoRepository>();
    }
}
