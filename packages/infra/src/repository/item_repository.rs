//! # ItemRepository
//!
//! 商品の一覧・追加・位置指定取得を行うリポジトリ。

use async_trait::async_trait;
use catalog_domain::{item::Item, value_objects::RecordIndex};

use crate::{InfraError, RecordStore};

/// 商品リポジトリトレイト
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// 全商品を追加順で取得する
    async fn find_all(&self) -> Result<Vec<Item>, InfraError>;

    /// 位置で商品を検索する
    async fn find_by_index(&self, index: RecordIndex) -> Result<Option<Item>, InfraError>;

    /// 商品を末尾に追加し、追加後の件数を返す
    async fn insert(&self, item: Item) -> Result<usize, InfraError>;

    /// 商品の件数を取得する
    async fn count(&self) -> Result<usize, InfraError>;
}

/// プロセス内メモリに保持する商品リポジトリ
#[derive(Debug)]
pub struct InMemoryItemRepository {
    store: RecordStore<Item>,
}

impl InMemoryItemRepository {
    /// 空のリポジトリを作成する
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// 初期データ付きのリポジトリを作成する
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            store: RecordStore::with_records("items", items),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
        self.store.list()
    }

    async fn find_by_index(&self, index: RecordIndex) -> Result<Option<Item>, InfraError> {
        self.store.get(index)
    }

    async fn insert(&self, item: Item) -> Result<usize, InfraError> {
        let count = self.store.append(item)?;
        tracing::debug!(store = self.store.name(), count, "商品を追加しました");
        Ok(count)
    }

    async fn count(&self) -> Result<usize, InfraError> {
        self.store.count()
    }
}
