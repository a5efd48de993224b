//! # Todo
//!
//! Todo エンティティとそれに関連する型を定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`TodoId`] は SERIAL 由来の i32 をラップし、
//!   他の整数値との取り違えをコンパイル時に防ぐ
//! - **不変性**: エンティティのフィールドは不変。完了フラグの反転も
//!   ストレージ側の UPDATE で行い、更新後の行から再構築する
//! - **検証なし**: `title` / `description` は入力をそのまま保持する。
//!   欠落（`None`）はストレージの NOT NULL 制約で検出される
//!
//! ## 使用例
//!
//! ```rust
//! use todoflow_domain::todo::{NewTodo, TodoId};
//!
//! let new_todo = NewTodo::new(Some("牛乳を買う".to_string()), Some("低脂肪".to_string()));
//! assert!(!new_todo.is_completed());
//!
//! // パスパラメータの数値化。数値でなければ「どの行にも一致しない」扱い
//! assert_eq!(TodoId::parse("42"), Some(TodoId::from_i32(42)));
//! assert_eq!(TodoId::parse("abc"), None);
//! ```

use chrono::{DateTime, Utc};
use derive_more::Display;

/// Todo ID（一意識別子）
///
/// ストレージが採番する SERIAL 値をラップする。
/// Newtype パターンで型安全性を確保。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct TodoId(i32);

impl TodoId {
    /// 既存の i32 から Todo ID を作成する
    pub fn from_i32(id: i32) -> Self {
        Self(id)
    }

    /// 内部の i32 値を取得する
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// パスパラメータ文字列を Todo ID に数値化する
    ///
    /// 整数として解釈できない入力は `None` を返す。呼び出し側は
    /// 「どの行にも一致しない ID」と同じに扱う（存在しない ID と
    /// 区別しない）。
    pub fn parse(value: &str) -> Option<Self> {
        value.parse::<i32>().ok().map(Self)
    }
}

/// Todo エンティティ
///
/// ID とタイムスタンプはストレージが採番・付与するため、
/// インスタンスは常に DB 行から [`Todo::from_db`] で再構築される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:           TodoId,
    title:        String,
    description:  String,
    is_completed: bool,
    created_at:   DateTime<Utc>,
    updated_at:   DateTime<Utc>,
}

impl Todo {
    /// DB 行からエンティティを再構築する
    pub fn from_db(
        id: TodoId,
        title: String,
        description: String,
        is_completed: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            is_completed,
            created_at,
            updated_at,
        }
    }

    /// Todo ID を取得する
    pub fn id(&self) -> &TodoId {
        &self.id
    }

    /// タイトルを取得する
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 説明を取得する
    pub fn description(&self) -> &str {
        &self.description
    }

    /// 完了フラグを取得する
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// 作成日時を取得する
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 更新日時を取得する
    ///
    /// 完了フラグの反転では再設定されないため、作成日時と同じ値を
    /// 保ち続ける。
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Todo の挿入形（クライアントが指定できるフィールド）
///
/// `title` / `description` は受け取った値をそのまま保持する。`None` は
/// SQL の NULL として挿入され、NOT NULL 制約違反としてストレージ側で
/// エラーになる。事前検証は行わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title:        Option<String>,
    description:  Option<String>,
    is_completed: bool,
}

impl NewTodo {
    /// 新しい挿入形を作成する
    ///
    /// 完了フラグはクライアント入力に関わらず `false` に固定する。
    pub fn new(title: Option<String>, description: Option<String>) -> Self {
        Self {
            title,
            description,
            is_completed: false,
        }
    }

    /// タイトルを取得する
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// 説明を取得する
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// 完了フラグを取得する
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", Some(1))]
    #[case("42", Some(42))]
    #[case("0", Some(0))]
    #[case("-7", Some(-7))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("12.5", None)]
    #[case("1e3", None)]
    #[case(" 1", None)]
    fn test_parseは整数のみを受け付ける(#[case] input: &str, #[case] expected: Option<i32>) {
        assert_eq!(TodoId::parse(input), expected.map(TodoId::from_i32));
    }

    #[test]
    fn test_todo_idのdisplayは内部値を出力する() {
        assert_eq!(TodoId::from_i32(42).to_string(), "42");
    }

    #[test]
    fn test_from_dbで構築したエンティティはフィールドをそのまま返す() {
        let now = Utc::now();
        let todo = Todo::from_db(
            TodoId::from_i32(1),
            "牛乳を買う".to_string(),
            "低脂肪".to_string(),
            false,
            now,
            now,
        );

        assert_eq!(todo.id(), &TodoId::from_i32(1));
        assert_eq!(todo.title(), "牛乳を買う");
        assert_eq!(todo.description(), "低脂肪");
        assert!(!todo.is_completed());
        assert_eq!(todo.created_at(), now);
        assert_eq!(todo.updated_at(), now);
    }

    #[test]
    fn test_new_todoは完了フラグをfalseに固定する() {
        let new_todo = NewTodo::new(Some("a".to_string()), Some("b".to_string()));
        assert!(!new_todo.is_completed());
    }

    #[test]
    fn test_new_todoは欠落フィールドをnoneのまま保持する() {
        let new_todo = NewTodo::new(None, None);
        assert_eq!(new_todo.title(), None);
        assert_eq!(new_todo.description(), None);
    }
}
