//! # 商品 API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /items/` - 商品一覧
//! - `POST /items/` - 商品作成
//! - `GET /items/{id}` - 位置を指定して商品を取得

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use catalog_domain::{
    item::{Item, ItemDraft},
    value_objects::RecordIndex,
};
use catalog_shared::{CollectionResponse, CreatedResponse, ErrorResponse, IndexedResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, usecase::ItemUseCaseImpl};

/// 商品 API の共有状態
pub struct ItemState {
    pub usecase: ItemUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 商品作成リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name:        String,
    #[serde(default)]
    pub description: Option<String>,
    pub price:       f64,
    #[serde(default)]
    pub tax:         Option<f64>,
}

impl From<CreateItemRequest> for ItemDraft {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name:        req.name,
            description: req.description,
            price:       req.price,
            tax:         req.tax,
        }
    }
}

/// 商品 DTO
///
/// `description` と `tax` は未設定でも `null` として出力する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub name:        String,
    pub description: Option<String>,
    pub price:       f64,
    pub tax:         Option<f64>,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            name:        item.name().as_str().to_string(),
            description: item.description().map(str::to_string),
            price:       item.price().as_f64(),
            tax:         item.tax().map(|tax| tax.as_f64()),
        }
    }
}

// --- ハンドラ ---

/// GET /items/
#[utoipa::path(
   get,
   path = "/items/",
   tag = "items",
   responses(
      (status = 200, description = "商品一覧", body = CollectionResponse<ItemDto>),
      (status = 500, description = "ストア障害", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_items(
    State(state): State<Arc<ItemState>>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state.usecase.list_items().await?;
    let data = items.iter().map(ItemDto::from).collect();

    Ok(Json(CollectionResponse::new(data)))
}

/// POST /items/
///
/// 検証を通過した商品を末尾に追加し、201 Created を返す。
#[utoipa::path(
   post,
   path = "/items/",
   tag = "items",
   request_body = CreateItemRequest,
   responses(
      (status = 201, description = "商品作成成功", body = CreatedResponse<ItemDto>),
      (status = 400, description = "バリデーションエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_item(
    State(state): State<Arc<ItemState>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let created = state.usecase.create_item(req.into()).await?;

    let response = CreatedResponse::new(
        "Item created",
        ItemDto::from(&created.record),
        created.count,
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /items/{id}
///
/// 負の位置はバリデーションエラー、範囲外の位置は 404 を返す。
#[utoipa::path(
   get,
   path = "/items/{id}",
   tag = "items",
   params(("id" = u64, Path, description = "0 始まりの位置")),
   responses(
      (status = 200, description = "商品", body = IndexedResponse<ItemDto>),
      (status = 400, description = "整数でない、または負の位置", body = ErrorResponse),
      (status = 404, description = "商品が存在しない", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn get_item(
    State(state): State<Arc<ItemState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let index: RecordIndex = id.parse()?;
    let item = state.usecase.get_item(index).await?;

    Ok(Json(IndexedResponse::new(
        ItemDto::from(&item),
        index.as_usize(),
    )))
}
