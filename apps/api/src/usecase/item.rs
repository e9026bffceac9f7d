//! 商品ユースケース

use std::sync::Arc;

use catalog_domain::{
    DomainError,
    item::{Item, ItemDraft},
    value_objects::RecordIndex,
};
use catalog_infra::repository::ItemRepository;

use super::Created;
use crate::error::ApiError;

/// 商品ユースケース
pub struct ItemUseCaseImpl {
    item_repository: Arc<dyn ItemRepository>,
}

impl ItemUseCaseImpl {
    pub fn new(item_repository: Arc<dyn ItemRepository>) -> Self {
        Self { item_repository }
    }

    /// 商品一覧を追加順で取得する
    pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        Ok(self.item_repository.find_all().await?)
    }

    /// 商品を作成する
    ///
    /// 1. 入力検証（price → name → tax）
    /// 2. 末尾に追加し、追加後の件数を返す
    pub async fn create_item(&self, draft: ItemDraft) -> Result<Created<Item>, ApiError> {
        let item = Item::try_from(draft)?;
        let count = self.item_repository.insert(item.clone()).await?;

        let created = Created {
            record: item,
            count,
        };
        tracing::info!(index = created.index(), count, "商品を作成しました");
        Ok(created)
    }

    /// 位置を指定して商品を取得する
    pub async fn get_item(&self, index: RecordIndex) -> Result<Item, ApiError> {
        let item = self
            .item_repository
            .find_by_index(index)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Item",
                index:       index.as_usize(),
            })?;

        Ok(item)
    }
}
