//! # ユーザー API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /users/` - ユーザー一覧
//! - `POST /users/` - ユーザー作成
//! - `GET /users/{id}` - 位置を指定してユーザーを取得

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
    user::{User, UserDraft},
    value_objects::RecordIndex,
};
use catalog_shared::{CollectionResponse, CreatedResponse, ErrorResponse, IndexedResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, usecase::UserUseCaseImpl};

/// ユーザー API の共有状態
pub struct UserState {
    pub usecase: UserUseCaseImpl,
}

/// ユーザー作成リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name:  String,
    pub email: String,
    #[serde(default)]
    pub age:   Option<i64>,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name:  req.name,
            email: req.email,
            age:   req.age,
        }
    }
}

/// ユーザー DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub name:  String,
    pub email: String,
    pub age:   Option<u64>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            name:  user.name().as_str().to_string(),
            email: user.email().as_str().to_string(),
            age:   user.age().map(|age| age.as_u64()),
        }
    }
}

/// GET /users/
#[utoipa::path(
   get,
   path = "/users/",
   tag = "users",
   responses(
      (status = 200, description = "ユーザー一覧", body = CollectionResponse<UserDto>),
      (status = 500, description = "ストア障害", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_users(
    State(state): State<Arc<UserState>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.usecase.list_users().await?;
    let data = users.iter().map(UserDto::from).collect();

    Ok(Json(CollectionResponse::new(data)))
}

/// POST /users/
#[utoipa::path(
   post,
   path = "/users/",
   tag = "users",
   request_body = CreateUserRequest,
   responses(
      (status = 201, description = "ユーザー作成成功", body = CreatedResponse<UserDto>),
      (status = 400, description = "バリデーションエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user(
    State(state): State<Arc<UserState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let created = state.usecase.create_user(req.into()).await?;

    let response = CreatedResponse::new(
        "User created",
        UserDto::from(&created.record),
        created.count,
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /users/{id}
#[utoipa::path(
   get,
   path = "/users/{id}",
   tag = "users",
   params(("id" = u64, Path, description = "0 始まりの位置")),
   responses(
      (status = 200, description = "ユーザー", body = IndexedResponse<UserDto>),
      (status = 400, description = "整数でない、または負の位置", body = ErrorResponse),
      (status = 404, description = "ユーザーが存在しない", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let index: RecordIndex = id.parse()?;
    let user = state.usecase.get_user(index).await?;

    Ok(Json(IndexedResponse::new(
        UserDto::from(&user),
        index.as_usize(),
    )))
}
