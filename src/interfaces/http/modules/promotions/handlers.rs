//! Promotion REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{CreatePromotionRequest, PromotionResponse, UpdatePromotionRequest};
use crate::domain::{Promotion, PromotionKind, RepositoryProvider};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

/// Shared state for the promotions module
#[derive(Clone)]
pub struct PromotionsState {
    pub repos: Arc<dyn RepositoryProvider>,
}

fn parse_promotion_kind(s: &str) -> PromotionKind {
    match s {
        "AmountOff" => PromotionKind::AmountOff,
        _ => PromotionKind::PercentOff,
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/promotions",
    tag = "Promotions",
    responses(
        (status = 200, description = "Promotion list", body = ApiResponse<Vec<PromotionResponse>>)
    )
)]
pub async fn list_promotions(
    State(state): State<PromotionsState>,
) -> Result<Json<ApiResponse<Vec<PromotionResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.promotions().find_all().await {
        Ok(promotions) => {
            let responses: Vec<PromotionResponse> =
                promotions.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to list promotions: {}",
                e
            ))),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/promotions/{id}",
    tag = "Promotions",
    params(("id" = i32, Path, description = "Promotion ID")),
    responses(
        (status = 200, description = "Promotion details", body = ApiResponse<PromotionResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_promotion(
    State(state): State<PromotionsState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PromotionResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.promotions().find_by_id(id).await {
        Ok(Some(promotion)) => Ok(Json(ApiResponse::success(promotion.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Promotion {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to get promotion: {}", e))),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/promotions",
    tag = "Promotions",
    request_body = CreatePromotionRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<PromotionResponse>),
        (status = 409, description = "Code already taken"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_promotion(
    State(state): State<PromotionsState>,
    ValidatedJson(req): ValidatedJson<CreatePromotionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PromotionResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let kind = parse_promotion_kind(req.kind.as_deref().unwrap_or("PercentOff"));
    if kind == PromotionKind::PercentOff && req.value > 100.0 {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error("Percent discount cannot exceed 100")),
        ));
    }

    // Reject duplicate codes before hitting the unique index
    match state.repos.promotions().find_by_code(&req.code).await {
        Ok(Some(_)) => {
            return Err((
                StatusCode::CONFLICT,
                Json(ApiResponse::error(format!(
                    "Promotion {} already exists",
                    req.code
                ))),
            ));
        }
        Ok(None) => {}
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!(
                    "Failed to check promotion: {}",
                    e
                ))),
            ));
        }
    }

    let now = Utc::now();
    let promotion = Promotion {
        id: 0,
        code: req.code,
        description: req.description,
        kind,
        value: req.value,
        valid_from: req.valid_from,
        valid_until: req.valid_until,
        is_active: req.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };

    match state.repos.promotions().save(promotion).await {
        Ok(saved) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(saved.into())),
        )),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Failed to create promotion: {}",
                e
            ))),
        )),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/promotions/{id}",
    tag = "Promotions",
    params(("id" = i32, Path, description = "Promotion ID")),
    request_body = UpdatePromotionRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<PromotionResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_promotion(
    State(state): State<PromotionsState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdatePromotionRequest>,
) -> Result<Json<ApiResponse<PromotionResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = match state.repos.promotions().find_by_id(id).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Promotion {} not found", id))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to get promotion: {}", e))),
            ));
        }
    };

    let kind = req
        .kind
        .map(|k| parse_promotion_kind(&k))
        .unwrap_or(existing.kind);
    let value = req.value.unwrap_or(existing.value);
    if kind == PromotionKind::PercentOff && value > 100.0 {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error("Percent discount cannot exceed 100")),
        ));
    }

    let updated = Promotion {
        id: existing.id,
        code: existing.code,
        description: req.description.or(existing.description),
        kind,
        value,
        valid_from: req.valid_from.or(existing.valid_from),
        valid_until: req.valid_until.or(existing.valid_until),
        is_active: req.is_active.unwrap_or(existing.is_active),
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };

    match state.repos.promotions().update(updated.clone()).await {
        Ok(()) => Ok(Json(ApiResponse::success(updated.into()))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to update promotion: {}",
                e
            ))),
        )),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/promotions/{id}",
    tag = "Promotions",
    params(("id" = i32, Path, description = "Promotion ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_promotion(
    State(state): State<PromotionsState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.promotions().delete(id).await {
        Ok(()) => Ok(Json(ApiResponse::success("Promotion deleted".to_string()))),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "Failed to delete promotion: {}",
                e
            ))),
        )),
    }
}
