//! ユーザーユースケース

use std::sync::Arc;

use catalog_domain::{
    DomainError,
    user::{User, UserDraft},
    value_objects::RecordIndex,
};
use catalog_infra::repository::UserRepository;

use super::Created;
use crate::error::ApiError;

/// ユーザーユースケース
pub struct UserUseCaseImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserUseCaseImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.user_repository.find_all().await?)
    }

    /// ユーザーを作成する
    ///
    /// 検証は email → name → age の順。
    pub async fn create_user(&self, draft: UserDraft) -> Result<Created<User>, ApiError> {
        let user = User::try_from(draft)?;
        let count = self.user_repository.insert(user.clone()).await?;

        let created = Created {
            record: user,
            count,
        };
        tracing::info!(index = created.index(), count, "ユーザーを作成しました");
        Ok(created)
    }

    pub async fn get_user(&self, index: RecordIndex) -> Result<User, ApiError> {
        let user = self
            .user_repository
            .find_by_index(index)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "User",
                index:       index.as_usize(),
            })?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use catalog_infra::{mock::FailingUserRepository, repository::InMemoryUserRepository};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sut() -> UserUseCaseImpl {
        UserUseCaseImpl::new(Arc::new(InMemoryUserRepository::new()))
    }

    #[tokio::test]
    async fn test_空のストアの一覧は空() {
        assert!(sut().list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_作成したユーザーを位置で取得できる() {
        let sut = sut();
        let draft = UserDraft {
            name:  "Alice".to_string(),
            email: "a@b.c".to_string(),
            age:   Some(20),
        };

        let created = sut.create_user(draft).await.unwrap();
        let found = sut.get_user(RecordIndex::new(created.index())).await.unwrap();

        assert_eq!(created.count, 1);
        assert_eq!(found, created.record);
    }

    #[tokio::test]
    async fn test_不正なメールアドレスは拒否されストアは変更されない() {
        let sut = sut();
        let draft = UserDraft {
            name:  "Alice".to_string(),
            email: "not-an-email".to_string(),
            age:   None,
        };

        let result = sut.create_user(draft).await;

        assert!(matches!(
            result,
            Err(ApiError::Validation { field: "email", .. })
        ));
        assert!(sut.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_存在しない位置はnot_foundになる() {
        assert!(matches!(
            sut().get_user(RecordIndex::new(0)).await,
            Err(ApiError::NotFound {
                entity_type: "User",
                index:       0,
            })
        ));
    }

    #[tokio::test]
    async fn test_リポジトリの障害はインフラエラーになる() {
        let sut = UserUseCaseImpl::new(Arc::new(FailingUserRepository));

        assert!(matches!(sut.get_user(RecordIndex::new(0)).await, Err(ApiError::Infra(_))));
    }
}
