//! # API レスポンスエンベロープ
//!
//! 公開 API の統一レスポンス形式を提供する。
//!
//! | 型 | JSON 形状 | 用途 |
//! |---|-----------|------|
//! | [`CollectionResponse`] | `{ "data": [T], "count": n }` | 一覧 |
//! | [`CreatedResponse`] | `{ "message": "...", "data": T, "count": n }` | 作成結果 |
//! | [`IndexedResponse`] | `{ "data": T, "index": i }` | 位置指定の取得結果 |

use serde::{Deserialize, Serialize};

/// 件数付きの一覧レスポンス
///
/// 空の一覧でも `count` を省略せず `{ "data": [], "count": 0 }` を返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CollectionResponse<T> {
    pub data:  Vec<T>,
    pub count: usize,
}

impl<T> CollectionResponse<T> {
    /// 一覧から作成する（件数は一覧の長さ）
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// 作成結果レスポンス
///
/// 作成されたレコードと、作成後のコレクション総数を返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatedResponse<T> {
    pub message: String,
    pub data:    T,
    pub count:   usize,
}

impl<T> CreatedResponse<T> {
    pub fn new(message: impl Into<String>, data: T, count: usize) -> Self {
        Self {
            message: message.into(),
            data,
            count,
        }
    }
}

/// 位置（0 始まりのインデックス）付きの取得結果レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IndexedResponse<T> {
    pub data:  T,
    pub index: usize,
}

impl<T> IndexedResponse<T> {
    pub fn new(data: T, index: usize) -> Self {
        Self { data, index }
    }
}
