//! # Catalog インフラ層
//!
//! レコードの保存先を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトと、そのプロセス内メモリ実装を提供する。
//! ユースケースはトレイト経由でリポジトリを受け取るため、テストではケースごとに
//! 独立したストアや失敗するスタブを注入できる。
//!
//! ## 責務
//!
//! - **レコードストア**: 追記専用・位置でアクセスする順序付きコレクション
//! - **リポジトリ実装**: 商品・ユーザーのリポジトリトレイトとインメモリ実装
//!
//! 永続化は行わない。ストアの寿命はプロセスの寿命と同じ。
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`store`] - 追記専用のレコードストア
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust
//! use catalog_infra::repository::{InMemoryItemRepository, ItemRepository};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), catalog_infra::InfraError> {
//! let repository = InMemoryItemRepository::new();
//! assert_eq!(repository.count().await?, 0);
//! # Ok(())
//! # }
//! ```

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;
pub mod store;

pub use error::{InfraError, InfraErrorKind};
pub use store::RecordStore;
