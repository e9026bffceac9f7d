//! # Catalog API サーバー
//!
//! 商品（items）とユーザー（users）をプロセス内メモリに保持し、
//! 一覧・作成・位置指定取得を提供する HTTP API。
//!
//! ## モジュール構成
//!
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`openapi`] - OpenAPI 仕様定義
//! - [`usecase`] - 入力検証とリポジトリ操作の組み立て
//! - [`app_builder`] - State の初期化とルーター構築
//!
//! ## 依存関係
//!
//! - `catalog_domain`: エンティティ、値オブジェクト、ドメインエラー
//! - `catalog_infra`: レコードストア、リポジトリ
//! - `catalog_shared`: レスポンス型、Observability
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use catalog_api::app_builder::build_app;
//! use catalog_infra::repository::{InMemoryItemRepository, InMemoryUserRepository};
//!
//! let app = build_app(
//!     Arc::new(InMemoryItemRepository::new()),
//!     Arc::new(InMemoryUserRepository::new()),
//! );
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;
