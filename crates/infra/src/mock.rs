//! # テスト用モックリポジトリ
//!
//! ルーター統合テストやユースケーステストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todoflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use todoflow_domain::todo::{NewTodo, Todo, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

struct MockState {
   todos:   Vec<Todo>,
   next_id: i32,
}

/// インメモリ実装の TodoRepository
///
/// SERIAL の採番を模して 1 始まりの連番 ID を振る。
/// `NewTodo` の欠落フィールドは PostgreSQL と同様に
/// NOT NULL 制約違反として扱う。
#[derive(Clone)]
pub struct MockTodoRepository {
   state: Arc<Mutex<MockState>>,
}

impl MockTodoRepository {
   pub fn new() -> Self {
      Self {
         state: Arc::new(Mutex::new(MockState {
            todos:   Vec::new(),
            next_id: 1,
         })),
      }
   }

   /// 現在保持している全 Todo のスナップショットを返す
   ///
   /// テストの事後検証用。リポジトリトレイトの一部ではない。
   pub fn snapshot(&self) -> Vec<Todo> {
      self.state.lock().unwrap().todos.clone()
   }
}

impl Default for MockTodoRepository {
   fn default() -> Self {
      Self::new()
   }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
   async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
      Ok(self.state.lock().unwrap().todos.clone())
   }

   async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
      Ok(self
         .state
         .lock()
         .unwrap()
         .todos
         .iter()
         .find(|t| t.id() == id)
         .cloned())
   }

   async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
      let Some(title) = new_todo.title() else {
         return Err(InfraError::unexpected(
            "null value in column \"title\" of relation \"todo_table\" violates not-null constraint",
         ));
      };
      let Some(description) = new_todo.description() else {
         return Err(InfraError::unexpected(
            "null value in column \"description\" of relation \"todo_table\" violates not-null constraint",
         ));
      };

      let mut state = self.state.lock().unwrap();
      let now = Utc::now();
      let todo = Todo::from_db(
         TodoId::from_i32(state.next_id),
         title.to_string(),
         description.to_string(),
         new_todo.is_completed(),
         now,
         now,
      );
      state.next_id += 1;
      state.todos.push(todo.clone());
      Ok(todo)
   }

   async fn update_is_completed(
      &self,
      id: &TodoId,
      is_completed: bool,
   ) -> Result<Option<Todo>, InfraError> {
      let mut state = self.state.lock().unwrap();
      let Some(current) = state.todos.iter_mut().find(|t| t.id() == id) else {
         return Ok(None);
      };

      // updated_at は据え置き、完了フラグのみ差し替える
      let updated = Todo::from_db(
         *current.id(),
         current.title().to_string(),
         current.description().to_string(),
         is_completed,
         current.created_at(),
         current.updated_at(),
      );
      *current = updated.clone();
      Ok(Some(updated))
   }
}
