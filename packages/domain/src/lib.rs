//! # Catalog ドメイン層
//!
//! 商品（Item）とユーザー（User）のドメインモデルと入力検証を定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: フィールドごとの制約は生成時に検証し、不正な値の存在を型で排除
//! - **検証順序の固定**: エンティティの組み立ては決まった順でフィールドを検証し、
//!   最初の違反で打ち切る（複数違反時に返るメッセージが一意に決まる）
//! - **位置による同一性**: レコードの識別子はストア内の 0 始まりの位置
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//!   ↘            ↗
//!     shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`value_objects`] - 名前・価格・メールアドレスなどの値オブジェクト
//! - [`item`] - 商品エンティティ
//! - [`user`] - ユーザーエンティティ
//!
//! ## 使用例
//!
//! ```rust
//! use catalog_domain::{DomainError, item::{Item, ItemDraft}};
//!
//! let draft = ItemDraft {
//!     name:        "tomato".to_string(),
//!     description: None,
//!     price:       -5.0,
//!     tax:         None,
//! };
//!
//! let err = Item::try_from(draft).unwrap_err();
//! assert!(matches!(err, DomainError::Validation { field: "price", .. }));
//! ```

pub mod error;
pub mod item;
pub mod user;
pub mod value_objects;

pub use error::DomainError;
