//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントのレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// `items_count` / `users_count` はリクエスト時点の各ストアの件数。
///
/// ## 使用例
///
/// ```
/// use catalog_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("1.0.0", 3, 0);
/// assert_eq!(response.status, "healthy");
/// assert_eq!(response.items_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// 稼働状態（`"healthy"` 固定）
    pub status:      String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version:     String,
    /// 商品ストアの件数
    pub items_count: usize,
    /// ユーザーストアの件数
    pub users_count: usize,
}

impl HealthResponse {
    /// 稼働中を示すレスポンスを作成する
    pub fn healthy(version: impl Into<String>, items_count: usize, users_count: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version.into(),
            items_count,
            users_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_件数を含むjsonにシリアライズされる() {
        let response = HealthResponse::healthy("1.0.0", 2, 1);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "healthy",
                "version": "1.0.0",
                "items_count": 2,
                "users_count": 1,
            })
        );
    }
}
