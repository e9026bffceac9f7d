//! # バナーハンドラ
//!
//! `GET /` でサービス名とバージョンを返す。

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// バナーレスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct RootResponse {
    pub message: String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
}

/// GET /
#[utoipa::path(
   get,
   path = "/",
   tag = "root",
   responses((status = 200, description = "バナー", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the Catalog API!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
