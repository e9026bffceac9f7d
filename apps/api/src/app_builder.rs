//! # ルーター構築
//!
//! リポジトリを受け取り、各 API の State を初期化して axum ルーターを組み立てる。
//! `main.rs` と統合テストの両方から使う。

use std::sync::Arc;

use axum::{Router, routing::get};
use catalog_infra::repository::{ItemRepository, UserRepository};
use catalog_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handler::{
        HealthState,
        ItemState,
        UserState,
        create_item,
        create_user,
        get_item,
        get_user,
        health_check,
        list_items,
        list_users,
        root,
        route_not_found,
    },
    openapi::{ApiDoc, DOCS_PATH, OPENAPI_JSON_PATH},
    usecase::{ItemUseCaseImpl, UserUseCaseImpl},
};

/// アプリケーションのルーターを構築する
///
/// コレクションのパスは末尾スラッシュの有無どちらでも受け付ける。
/// OpenAPI 仕様は `/openapi.json`、Swagger UI は `/docs` で公開する。
pub fn build_app(
    item_repository: Arc<dyn ItemRepository>,
    user_repository: Arc<dyn UserRepository>,
) -> Router {
    let health_state = Arc::new(HealthState {
        item_repository: item_repository.clone(),
        user_repository: user_repository.clone(),
    });
    let item_state = Arc::new(ItemState {
        usecase: ItemUseCaseImpl::new(item_repository),
    });
    let user_state = Arc::new(UserState {
        usecase: UserUseCaseImpl::new(user_repository),
    });

    Router::new()
        .route("/", get(root))
        // ヘルスチェック
        .route("/health", get(health_check))
        .route("/health/", get(health_check))
        .with_state(health_state)
        // 商品 API
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item))
        .with_state(item_state)
        // ユーザー API
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .with_state(user_state)
        // API ドキュメント
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .fallback(route_not_found)
        // レイヤーは下から上の順に適用される:
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: request_id を含むスパンを作成
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
