//! # 未定義ルートのハンドラ
//!
//! どのルートにも一致しないリクエストに、JSON の 404 を返す。

use axum::http::Uri;

use crate::error::ApiError;

/// ルーターの fallback
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
