//! # テスト用スタブリポジトリ
//!
//! すべての操作が失敗するリポジトリ。予期しない障害が 500 として返ることを
//! API 層のテストで確認するために使う。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! catalog-infra = { workspace = true, features = ["test-utils"] }
//! ```

use async_trait::async_trait;
use catalog_domain::{item::Item, user::User, value_objects::RecordIndex};

use crate::{
    InfraError,
    repository::{ItemRepository, UserRepository},
};

// ===== FailingItemRepository =====

#[derive(Debug, Clone, Copy, Default)]
pub struct FailingItemRepository;

#[async_trait]
impl ItemRepository for FailingItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
        Err(InfraError::unexpected("items: find_all に失敗しました"))
    }

    async fn find_by_index(&self, _index: RecordIndex) -> Result<Option<Item>, InfraError> {
        Err(InfraError::unexpected("items: find_by_index に失敗しました"))
    }

    async fn insert(&self, _item: Item) -> Result<usize, InfraError> {
        Err(InfraError::unexpected("items: insert に失敗しました"))
    }

    async fn count(&self) -> Result<usize, InfraError> {
        Err(InfraError::unexpected("items: count に失敗しました"))
    }
}

// ===== FailingUserRepository =====

#[derive(Debug, Clone, Copy, Default)]
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        Err(InfraError::unexpected("users: find_all に失敗しました"))
    }

    async fn find_by_index(&self, _index: RecordIndex) -> Result<Option<User>, InfraError> {
        Err(InfraError::unexpected("users: find_by_index に失敗しました"))
    }

    async fn insert(&self, _user: User) -> Result<usize, InfraError> {
        Err(InfraError::unexpected("users: insert に失敗しました"))
    }

    async fn count(&self) -> Result<usize, InfraError> {
        Err(InfraError::unexpected("users: count に失敗しました"))
    }
}
