//! Catalog API 統合テスト
//!
//! `build_app` で組み立てたルーター全体に対してリクエストを送り、
//! 複数操作を横断したレスポンスの整合性を検証する。
//!
//! ## テストケース
//!
//! - バナーとヘルスチェック
//! - 作成 → 一覧 → 位置指定取得で内容が一致
//! - 範囲外・負数・整数でない位置の扱い
//! - フィールド検証と検証順序
//! - 解釈できないボディ、未定義ルート、ストア障害
//! - リクエスト ID ヘッダー

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, StatusCode, header},
};
use catalog_api::app_builder::build_app;
use catalog_domain::item::seed_items;
use catalog_infra::{
    mock::{FailingItemRepository, FailingUserRepository},
    repository::{InMemoryItemRepository, InMemoryUserRepository},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

// --- テストヘルパー ---

/// 空のストアでアプリケーションを構築する
fn create_test_app() -> Router {
    build_app(
        Arc::new(InMemoryItemRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
    )
}

/// 商品の初期データを投入したアプリケーションを構築する
fn create_seeded_app() -> Router {
    build_app(
        Arc::new(InMemoryItemRepository::with_items(seed_items().unwrap())),
        Arc::new(InMemoryUserRepository::new()),
    )
}

/// レスポンスボディを JSON として解析する
async fn parse_body(response: Response<Body>) -> JsonValue {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: &Router, uri: &str, body: &JsonValue) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

async fn post_raw(app: &Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

// --- バナー・ヘルスチェック ---

#[tokio::test]
async fn test_ルートはバナーとバージョンを返す() {
    let app = create_test_app();

    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        parse_body(response).await,
        json!({
            "message": "Welcome to the Catalog API!",
            "version": env!("CARGO_PKG_VERSION"),
        })
    );
}

#[tokio::test]
async fn test_ヘルスチェックは作成の都度件数を反映する() {
    let app = create_test_app();

    post_json(&app, "/items/", &json!({"name": "apple", "price": 1.0})).await;
    post_json(&app, "/users/", &json!({"name": "Alice", "email": "a@b.c"})).await;
    post_json(&app, "/items/", &json!({"name": "pear", "price": 2.0})).await;

    let response = get(&app, "/health/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        parse_body(response).await,
        json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "items_count": 2,
            "users_count": 1,
        })
    );
}

#[tokio::test]
async fn test_初期データ投入時は商品が3件ある() {
    let app = create_seeded_app();

    let body = parse_body(get(&app, "/items/").await).await;

    assert_eq!(body["count"], 3);
    assert_eq!(body["data"][0]["name"], "tomato");
    assert_eq!(body["data"][1]["name"], "potato");
    assert_eq!(body["data"][2]["name"], "carrot");
    assert_eq!(body["data"][0]["price"], 0.0);
}

// --- 一覧・作成・取得 ---

#[rstest]
#[case("/items/")]
#[case("/items")]
#[case("/users/")]
#[case("/users")]
#[tokio::test]
async fn test_空のコレクションの一覧はcount0を返す(#[case] uri: &str) {
    let app = create_test_app();

    let response = get(&app, uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await, json!({"data": [], "count": 0}));
}

#[tokio::test]
async fn test_商品を作成すると201と作成後の件数を返す() {
    let app = create_test_app();

    let response = post_json(
        &app,
        "/items/",
        &json!({"name": "Foo", "description": "desc", "price": 10.5, "tax": 1.5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        parse_body(response).await,
        json!({
            "message": "Item created",
            "data": {"name": "Foo", "description": "desc", "price": 10.5, "tax": 1.5},
            "count": 1,
        })
    );
}

#[tokio::test]
async fn test_省略した任意項目はnullとして返る() {
    let app = create_test_app();

    let body = parse_body(post_json(&app, "/items", &json!({"name": "Foo", "price": 0})).await).await;

    assert_eq!(
        body["data"],
        json!({"name": "Foo", "description": null, "price": 0.0, "tax": null})
    );
}

#[tokio::test]
async fn test_作成した商品は追加順に一覧と位置指定で取得できる() {
    let app = create_test_app();
    let names = ["a", "b", "c"];
    for name in names {
        post_json(&app, "/items/", &json!({"name": name, "price": 1.0})).await;
    }

    let list = parse_body(get(&app, "/items/").await).await;
    assert_eq!(list["count"], 3);

    for (index, name) in names.iter().enumerate() {
        let response = get(&app, &format!("/items/{index}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = parse_body(response).await;
        assert_eq!(body["index"], index);
        assert_eq!(body["data"]["name"], *name);
        assert_eq!(body["data"], list["data"][index]);
    }
}

#[tokio::test]
async fn test_ユーザーを作成して位置指定で取得できる() {
    let app = create_test_app();

    let created = post_json(
        &app,
        "/users/",
        &json!({"name": "Alice", "email": "a@b.c", "age": 30}),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(
        parse_body(created).await,
        json!({
            "message": "User created",
            "data": {"name": "Alice", "email": "a@b.c", "age": 30},
            "count": 1,
        })
    );

    let response = get(&app, "/users/0").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        parse_body(response).await,
        json!({
            "data": {"name": "Alice", "email": "a@b.c", "age": 30},
            "index": 0,
        })
    );
}

#[rstest]
#[case("/items/3", "Item")]
#[case("/items/100", "Item")]
#[case("/items/9223372036854775808", "Item")]
#[case("/users/99999999999999999999", "User")]
#[tokio::test]
async fn test_件数以上の位置は404を返す(#[case] uri: &str, #[case] entity: &str) {
    let app = create_seeded_app();

    let response = get(&app, uri).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_body(response).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Not Found");
    assert!(body["detail"].as_str().unwrap().contains(entity));
}

#[tokio::test]
async fn test_空のユーザーストアの位置0は404を返す() {
    let app = create_test_app();

    let response = get(&app, "/users/0").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(response).await["index"], 0);
}

#[rstest]
#[case("/items/-1")]
#[case("/users/-1")]
#[case("/items/-99999999999999999999")]
#[tokio::test]
async fn test_負の位置はidのバリデーションエラーになる(#[case] uri: &str) {
    let app = create_seeded_app();

    let response = get(&app, uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["title"], "Validation Error");
    assert_eq!(body["field"], "id");
}

#[rstest]
#[case("/items/abc")]
#[case("/items/1.5")]
#[case("/users/12abc")]
#[tokio::test]
async fn test_整数でない位置は400を返す(#[case] uri: &str) {
    let app = create_seeded_app();

    let response = get(&app, uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["field"], "id");
}

// --- 検証 ---

#[rstest]
#[case(json!({"name": "Foo", "price": -5}), "price")]
#[case(json!({"name": "", "price": 1}), "name")]
#[case(json!({"name": "   ", "price": 1}), "name")]
#[case(json!({"name": "", "price": -5}), "price")]
#[tokio::test]
async fn test_不正な商品は拒否されストアは変更されない(
    #[case] payload: JsonValue,
    #[case] field: &str,
) {
    let app = create_test_app();

    let response = post_json(&app, "/items/", &payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(response).await["field"], field);
    assert_eq!(parse_body(get(&app, "/items/").await).await["count"], 0);
}

#[rstest]
#[case(json!({"name": "Alice", "email": "not-an-email"}), "email")]
#[case(json!({"name": "", "email": "a@b.c"}), "name")]
#[case(json!({"name": "Alice", "email": "a@b.c", "age": -1}), "age")]
#[case(json!({"name": "", "email": "not-an-email", "age": -1}), "email")]
#[tokio::test]
async fn test_不正なユーザーは拒否されストアは変更されない(
    #[case] payload: JsonValue,
    #[case] field: &str,
) {
    let app = create_test_app();

    let response = post_json(&app, "/users/", &payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["title"], "Validation Error");
    assert_eq!(body["field"], field);
    assert_eq!(parse_body(get(&app, "/users/").await).await["count"], 0);
}

#[rstest]
#[case("{not json")]
#[case(r#"{"name": "Foo"}"#)]
#[case(r#"{"name": "Foo", "price": "cheap"}"#)]
#[tokio::test]
async fn test_解釈できないボディは400を返す(#[case] body: &str) {
    let app = create_test_app();

    let response = post_raw(&app, "/items/", body.to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(response).await["title"], "Bad Request");
    assert_eq!(parse_body(get(&app, "/items/").await).await["count"], 0);
}

// --- ルーティング・障害 ---

#[tokio::test]
async fn test_未定義ルートはjsonの404を返す() {
    let app = create_test_app();

    let response = get(&app, "/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_body(response).await;
    assert_eq!(body["title"], "Not Found");
    assert!(body["detail"].as_str().unwrap().contains("/nope"));
}

#[tokio::test]
async fn test_ストア障害は詳細を隠して500を返す() {
    let app = build_app(
        Arc::new(FailingItemRepository),
        Arc::new(FailingUserRepository),
    );

    for uri in ["/items/", "/users/0", "/health/"] {
        let response = get(&app, uri).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = parse_body(response).await;
        assert_eq!(body["title"], "Internal Server Error");
        assert_eq!(body["detail"], "内部エラーが発生しました");
    }
}

#[tokio::test]
async fn test_openapi仕様をjsonで公開する() {
    let app = create_test_app();

    let response = get(&app, "/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["info"]["title"], "Catalog API");
    for path in ["/", "/health/", "/items/", "/items/{id}", "/users/", "/users/{id}"] {
        assert!(
            body["paths"].get(path).is_some(),
            "{path} が仕様に含まれること"
        );
    }
}

#[tokio::test]
async fn test_swagger_uiを公開する() {
    let app = create_test_app();

    let response = get(&app, "/docs/").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
    let app = create_test_app();

    for uri in ["/", "/items/", "/nope"] {
        let response = get(&app, uri).await;

        assert!(
            response.headers().contains_key("x-request-id"),
            "{uri} のレスポンスに x-request-id ヘッダーが含まれること"
        );
    }
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
    let app = create_test_app();
    let custom_id = "client-provided-request-id-123";

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/")
                .header("x-request-id", custom_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap().to_str().unwrap(),
        custom_id
    );
}
