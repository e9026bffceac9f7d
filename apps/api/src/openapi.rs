//! # OpenAPI 仕様定義
//!
//! utoipa を使用して OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。
//!
//! 生成した仕様は `/openapi.json` で、Swagger UI は `/docs` で公開する。

use utoipa::OpenApi;

use crate::handler::{health, item, root, user};

/// 仕様 JSON のパス
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// Swagger UI のパス
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Catalog API",
      description = "商品とユーザーをプロセス内メモリに保持する HTTP API"
   ),
   paths(
      // root
      root::root,
      // health
      health::health_check,
      // items
      item::list_items,
      item::create_item,
      item::get_item,
      // users
      user::list_users,
      user::create_user,
      user::get_user,
   ),
   components(schemas(
      catalog_shared::ErrorResponse,
      catalog_shared::HealthResponse,
      root::RootResponse,
      item::ItemDto,
      item::CreateItemRequest,
      user::UserDto,
      user::CreateUserRequest,
   )),
   tags(
      (name = "root", description = "バナー"),
      (name = "health", description = "ヘルスチェック"),
      (name = "items", description = "商品"),
      (name = "users", description = "ユーザー"),
   )
)]
pub struct ApiDoc;
