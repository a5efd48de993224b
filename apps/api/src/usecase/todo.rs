//! # Todo ユースケース
//!
//! Todo の一覧・作成・完了フラグ反転のロジックを実装する。
//!
//! 各操作はリポジトリ呼び出し 1〜2 回の直列な処理で、トランザクションは
//! 張らない。反転の検索と更新の間に別リクエストが割り込んだ場合は
//! 後勝ち（last-write-wins）。

use todoflow_domain::todo::{NewTodo, Todo, TodoId};
use todoflow_infra::repository::TodoRepository;

use crate::error::ApiError;

/// Todo 作成の入力
///
/// フィールドは受け取った値のまま保持する。欠落はストレージの
/// NOT NULL 制約で検出される。
#[derive(Debug)]
pub struct AddTodoInput {
   pub title:       Option<String>,
   pub description: Option<String>,
}

/// Todo ユースケース実装
///
/// R: TodoRepository
pub struct TodoUseCaseImpl<R> {
   todo_repo: R,
}

impl<R> TodoUseCaseImpl<R>
where
   R: TodoRepository,
{
   pub fn new(todo_repo: R) -> Self {
      Self { todo_repo }
   }

   /// 全 Todo を取得する
   pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
      Ok(self.todo_repo.find_all().await?)
   }

   /// Todo を作成する
   ///
   /// 完了フラグはクライアント入力に関わらず `false` で挿入する。
   pub async fn add_todo(&self, input: AddTodoInput) -> Result<Todo, ApiError> {
      let new_todo = NewTodo::new(input.title, input.description);
      Ok(self.todo_repo.insert(&new_todo).await?)
   }

   /// 完了フラグを反転する
   ///
   /// 1. ID で現在の行を検索（存在しなければ `TodoNotFound`）
   /// 2. 現在値の論理否定で更新し、更新後の行を返す
   ///
   /// 検索と更新の間に行が消えた場合も `TodoNotFound` を返す。
   pub async fn toggle_todo(&self, id: &TodoId) -> Result<Todo, ApiError> {
      let Some(current) = self.todo_repo.find_by_id(id).await? else {
         return Err(ApiError::TodoNotFound);
      };

      self
         .todo_repo
         .update_is_completed(id, !current.is_completed())
         .await?
         .ok_or(ApiError::TodoNotFound)
   }
}
