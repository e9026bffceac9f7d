//! # Catalog API サーバー
//!
//! 商品とユーザーをプロセス内メモリに保持する HTTP API サーバー。
//! データは永続化せず、プロセスの終了とともに失われる。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p catalog-api
//!
//! # 本番環境
//! API_PORT=8080 LOG_FORMAT=json ./catalog-api
//! ```
//!
//! 環境変数の一覧は [`catalog_api::config`] を参照。

use std::sync::Arc;

use anyhow::Context as _;
use catalog_api::{app_builder::build_app, config::AppConfig};
use catalog_domain::item::seed_items;
use catalog_infra::repository::{InMemoryItemRepository, InMemoryUserRepository};
use catalog_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ストアの初期化（必要なら初期データを投入）
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("catalog-api");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "catalog-api").entered();

    // 設定読み込み
    let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Catalog API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // ストア初期化
    let item_repository = if config.seed_items {
        let items = seed_items().context("初期データの構築に失敗しました")?;
        tracing::info!(count = items.len(), "商品の初期データを投入しました");
        InMemoryItemRepository::with_items(items)
    } else {
        InMemoryItemRepository::new()
    };
    let user_repository = InMemoryUserRepository::new();

    let app = build_app(Arc::new(item_repository), Arc::new(user_repository));

    // サーバー起動
    // ホスト名（例: localhost）はバインド時に名前解決される
    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("{bind_address} へのバインドに失敗しました"))?;
    tracing::info!(
        "Catalog API サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
