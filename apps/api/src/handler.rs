//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証とストア操作はユースケースに委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── fallback.rs # 未定義ルート
//!     ├── health.rs   # ヘルスチェック
//!     ├── item.rs     # 商品
//!     ├── root.rs     # バナー
//!     └── user.rs     # ユーザー
//! ```

pub mod fallback;
pub mod health;
pub mod item;
pub mod root;
pub mod user;

pub use fallback::route_not_found;
pub use health::{HealthState, health_check};
pub use item::{ItemState, create_item, get_item, list_items};
pub use root::root;
pub use user::{UserState, create_user, get_user, list_users};
