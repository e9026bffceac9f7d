//! # リポジトリ
//!
//! 商品・ユーザーのリポジトリトレイトと、レコードストアを使ったインメモリ実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケースはトレイトにのみ依存する
//! - **テスタビリティ**: トレイト経由でスタブに差し替え可能

pub mod item_repository;
pub mod user_repository;

pub use item_repository::{InMemoryItemRepository, ItemRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};
