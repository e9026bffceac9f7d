//! # 商品エンティティ
//!
//! 商品（Item）と、その作成入力（[`ItemDraft`]）の検証を定義する。
//!
//! ## 検証順序
//!
//! 1. `price`: 0 以上の有限値
//! 2. `name`: 空・空白のみでない
//! 3. `tax`: 指定時は有限値
//!
//! 最初に違反したフィールドでエラーを返し、以降は検証しない。
//!
//! ## 初期データ
//!
//! 起動時に [`seed_items`] の 3 件（`tomato`, `potato`, `carrot`）を投入できる。
//! 作成された商品と同じ形の完全なレコードで、価格は 0、説明・税額はなし。

use crate::{
    DomainError,
    value_objects::{Name, Price, Tax},
};

/// 起動時に投入する商品名
pub const SEED_ITEM_NAMES: [&str; 3] = ["tomato", "potato", "carrot"];

/// 商品の作成入力（未検証）
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name:        String,
    pub description: Option<String>,
    pub price:       f64,
    pub tax:         Option<f64>,
}

/// 商品エンティティ
///
/// 識別子は持たない。ストア内の位置が同一性を表す。
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name:        Name,
    description: Option<String>,
    price:       Price,
    tax:         Option<Tax>,
}

impl Item {
    /// 検証済みの値から商品を作成する
    pub fn new(name: Name, description: Option<String>, price: Price, tax: Option<Tax>) -> Self {
        Self {
            name,
            description,
            price,
            tax,
        }
    }

    /// 名前だけを持つ初期データ用の商品を作成する
    pub fn placeholder(name: Name) -> Self {
        Self::new(name, None, Price::zero(), None)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn tax(&self) -> Option<Tax> {
        self.tax
    }
}

impl TryFrom<ItemDraft> for Item {
    type Error = DomainError;

    fn try_from(draft: ItemDraft) -> Result<Self, Self::Error> {
        let price = Price::new(draft.price)?;
        let name = Name::new(draft.name)?;
        let tax = draft.tax.map(Tax::new).transpose()?;

        Ok(Self::new(name, draft.description, price, tax))
    }
}

/// 起動時に投入する初期データを作成する
pub fn seed_items() -> Result<Vec<Item>, DomainError> {
    SEED_ITEM_NAMES
        .iter()
        .map(|name| Name::new(*name).map(Item::placeholder))
        .collect()
}
