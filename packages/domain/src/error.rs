//! # ドメイン層エラー定義
//!
//! 入力検証の失敗と、存在しない位置の参照を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | フィールド制約の違反 |
//! | `NotFound` | 404 Not Found | 指定位置にレコードが存在しない |
//!
//! どちらも利用者の入力に起因する想定内の結果であり、障害ではない。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// `field` には違反したフィールド名（`"price"`, `"name"`, `"email"`, `"age"`, `"id"`）を入れる。
    #[error("バリデーションエラー（{field}）: {message}")]
    Validation {
        /// 違反したフィールド名
        field:   &'static str,
        /// 人間可読なメッセージ
        message: String,
    },

    /// 指定位置にレコードが存在しない
    #[error("{entity_type} が見つかりません: {index}")]
    NotFound {
        /// エンティティの種類（"Item", "User"）
        entity_type: &'static str,
        /// 参照された位置
        index:       usize,
    },
}

impl DomainError {
    /// フィールド制約違反を作成する
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// 違反したフィールド名を返す（バリデーションエラー以外は `None`）
    #[cfg(test)]
    pub(crate) fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::NotFound { .. } => None,
        }
    }
}
