//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (DomainError)   インフラ層エラー (InfraError)
//!                 ↘                 ↙
//!                  API エラー (ApiError)
//!                        ↓ IntoResponse
//!         HTTP レスポンス (StatusCode + Problem Details JSON)
//! ```
//!
//! ## ログ出力の方針
//!
//! バリデーションエラーと Not Found は利用者の入力に起因する想定内の結果なので
//! `warn` / `info` で記録する。`error` は予期しない障害にのみ使う。

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_domain::DomainError;
use catalog_infra::InfraError;
use catalog_shared::ErrorResponse;
use thiserror::Error;

/// API 層で発生するエラー
///
/// ハンドラから返されるエラー型。`IntoResponse` を実装しているため、
/// axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 解釈できないリクエスト（400 Bad Request）
    ///
    /// JSON の構文エラー、型不一致、必須フィールドの欠落など、
    /// ドメインの検証に到達する前に失敗した場合に使用する。
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// フィールド制約の違反（400 Bad Request）
    #[error("バリデーションエラー（{field}）: {message}")]
    Validation {
        field:   &'static str,
        message: String,
    },

    /// 指定位置にレコードが存在しない（404 Not Found）
    #[error("{entity_type} が見つかりません: {index}")]
    NotFound {
        entity_type: &'static str,
        index:       usize,
    },

    /// 存在しないルート（404 Not Found）
    #[error("ルートが見つかりません: {0}")]
    RouteNotFound(String),

    /// インフラ層の障害（500 Internal Server Error）
    ///
    /// 詳細はサーバーサイドのログにのみ出力し、クライアントには返さない。
    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => Self::Validation { field, message },
            DomainError::NotFound { entity_type, index } => Self::NotFound { entity_type, index },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    /// | ApiError | HTTP Status | ログレベル |
    /// |----------|-------------|-----------|
    /// | BadRequest | 400 | warn |
    /// | Validation | 400 | warn |
    /// | NotFound | 404 | info |
    /// | RouteNotFound | 404 | info |
    /// | Infra | 500 | error |
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(detail) => {
                tracing::warn!(%detail, "不正なリクエスト");
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(detail))
            }
            ApiError::Validation { field, message } => {
                tracing::warn!(field, %message, "バリデーションエラー");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::validation_error(field, message),
                )
            }
            ApiError::NotFound { entity_type, index } => {
                tracing::info!(entity_type, index, "レコードが見つかりません");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::record_not_found(
                        format!("{entity_type} が見つかりません: {index}"),
                        index,
                    ),
                )
            }
            ApiError::RouteNotFound(path) => {
                tracing::info!(%path, "ルートが見つかりません");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::not_found(format!("ルートが見つかりません: {path}")),
                )
            }
            ApiError::Infra(err) => {
                tracing::error!(
                    error = %err,
                    span_trace = %err.span_trace(),
                    "インフラエラー"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
