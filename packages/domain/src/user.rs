//! # ユーザーエンティティ
//!
//! ユーザー（User）と、その作成入力（[`UserDraft`]）の検証を定義する。
//!
//! 検証は `email` → `name` → `age` の順に行い、最初の違反で打ち切る。
//!
//! ```rust
//! use catalog_domain::{
//!     DomainError,
//!     user::{User, UserDraft},
//! };
//!
//! let draft = UserDraft {
//!     name:  String::new(),
//!     email: "not-an-email".to_string(),
//!     age:   Some(-1),
//! };
//!
//! // 3 つとも不正だが、最初に検証される email のエラーだけが返る
//! assert!(matches!(
//!     User::try_from(draft),
//!     Err(DomainError::Validation { field: "email", .. })
//! ));
//! ```

use crate::{
    DomainError,
    value_objects::{Age, Email, Name},
};

/// ユーザーの作成入力（未検証）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name:  String,
    pub email: String,
    pub age:   Option<i64>,
}

/// ユーザーエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name:  Name,
    email: Email,
    age:   Option<Age>,
}

impl User {
    pub fn new(name: Name, email: Email, age: Option<Age>) -> Self {
        Self { name, email, age }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn age(&self) -> Option<Age> {
        self.age
    }
}

impl TryFrom<UserDraft> for User {
    type Error = DomainError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        let email = Email::new(draft.email)?;
        let name = Name::new(draft.name)?;
        let age = draft.age.map(Age::new).transpose()?;

        Ok(Self::new(name, email, age))
    }
}
