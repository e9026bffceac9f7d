//! # ユースケース層
//!
//! 入力検証とリポジトリ操作を組み立てる。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//! - **検証が先**: 検証に失敗した入力でストアを変更しない

pub mod item;
pub mod user;

pub use item::ItemUseCaseImpl;
pub use user::UserUseCaseImpl;

/// 作成結果
///
/// 作成したレコードと、作成後のコレクション総数の組。
#[derive(Debug, Clone, PartialEq)]
pub struct Created<T> {
    pub record: T,
    pub count:  usize,
}

impl<T> Created<T> {
    /// 作成したレコードの位置（0 始まり）
    pub fn index(&self) -> usize {
        self.count.saturating_sub(1)
    }
}
