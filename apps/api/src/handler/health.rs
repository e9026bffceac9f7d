//! # ヘルスチェックハンドラ
//!
//! アプリケーションの稼働状態と、各ストアの現在の件数を返す。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health/
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "1.0.0",
//!   "items_count": 3,
//!   "users_count": 0
//! }
//! ```

use std::sync::Arc;

use axum::{Json, extract::State};
use catalog_infra::repository::{ItemRepository, UserRepository};
use catalog_shared::{ErrorResponse, HealthResponse};

use crate::error::ApiError;

/// ヘルスチェック API の共有状態
pub struct HealthState {
    pub item_repository: Arc<dyn ItemRepository>,
    pub user_repository: Arc<dyn UserRepository>,
}

/// GET /health/
///
/// 件数はリクエスト時点の各ストアの長さ。
/// ストアを読めない場合は 500 を返す。
#[utoipa::path(
   get,
   path = "/health/",
   tag = "health",
   responses(
      (status = 200, description = "稼働中", body = HealthResponse),
      (status = 500, description = "ストア障害", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn health_check(
    State(state): State<Arc<HealthState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let items_count = state.item_repository.count().await?;
    let users_count = state.user_repository.count().await?;

    Ok(Json(HealthResponse::healthy(
        env!("CARGO_PKG_VERSION"),
        items_count,
        users_count,
    )))
}
