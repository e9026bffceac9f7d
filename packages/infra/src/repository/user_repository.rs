//! # UserRepository
//!
//! ユーザーの一覧・追加・位置指定取得を行うリポジトリ。

use async_trait::async_trait;
use catalog_domain::{user::User, value_objects::RecordIndex};

use crate::{InfraError, RecordStore};

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 全ユーザーを追加順で取得する
    async fn find_all(&self) -> Result<Vec<User>, InfraError>;

    /// 位置でユーザーを検索する
    async fn find_by_index(&self, index: RecordIndex) -> Result<Option<User>, InfraError>;

    /// ユーザーを末尾に追加し、追加後の件数を返す
    async fn insert(&self, user: User) -> Result<usize, InfraError>;

    /// ユーザーの件数を取得する
    async fn count(&self) -> Result<usize, InfraError>;
}

/// プロセス内メモリに保持するユーザーリポジトリ
#[derive(Debug)]
pub struct InMemoryUserRepository {
    store: RecordStore<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new("users"),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        self.store.list()
    }

    async fn find_by_index(&self, index: RecordIndex) -> Result<Option<User>, InfraError> {
        self.store.get(index)
    }

    async fn insert(&self, user: User) -> Result<usize, InfraError> {
        let count = self.store.append(user)?;
        tracing::debug!(store = self.store.name(), count, "ユーザーを追加しました");
        Ok(count)
    }

    async fn count(&self) -> Result<usize, InfraError> {
        self.store.count()
    }
}

#[cfg(test)]
mod tests {
    use catalog_domain::user::UserDraft;
    use pretty_assertions::assert_eq;

    use super::*;

    fn user(name: &str) -> User {
        User::try_from(UserDraft {
            name:  name.to_string(),
            email: format!("{name}@example.com"),
            age:   None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_追加したユーザーは位置で取得できる() {
        let sut = InMemoryUserRepository::new();

        assert_eq!(sut.insert(user("alice")).await.unwrap(), 1);
        assert_eq!(sut.insert(user("bob")).await.unwrap(), 2);

        assert_eq!(
            sut.find_by_index(RecordIndex::new(1)).await.unwrap(),
            Some(user("bob"))
        );
        assert_eq!(sut.find_by_index(RecordIndex::new(2)).await.unwrap(), None);
        assert_eq!(sut.count().await.unwrap(), 2);
    }
}
