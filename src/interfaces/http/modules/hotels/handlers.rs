//! Hotel REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateHotelRequest, HotelResponse, UpdateHotelRequest};
use crate::domain::{Hotel, RepositoryProvider};
use crate::interfaces::http::common::{
    ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};
use crate::shared::validations::validate_pagination;

/// Shared state for the hotels module
#[derive(Clone)]
pub struct HotelsState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = "Hotels",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of hotels", body = ApiResponse<PaginatedResponse<HotelResponse>>)
    )
)]
pub async fn list_hotels(
    State(state): State<HotelsState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<HotelResponse>>>, (StatusCode, Json<ApiResponse<()>>)>
{
    let (page, limit) = validate_pagination(Some(params.page), Some(params.limit));
    match state.repos.hotels().find_page(page, limit).await {
        Ok((hotels, total)) => {
            let items: Vec<HotelResponse> = hotels.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(PaginatedResponse::new(
                items, total, page, limit,
            ))))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to list hotels: {}", e))),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "Hotels",
    params(("hotel_id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = ApiResponse<HotelResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_hotel(
    State(state): State<HotelsState>,
    Path(hotel_id): Path<i32>,
) -> Result<Json<ApiResponse<HotelResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.hotels().find_by_id(hotel_id).await {
        Ok(Some(hotel)) => Ok(Json(ApiResponse::success(hotel.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Hotel {} not found", hotel_id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to get hotel: {}", e))),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/hotels",
    tag = "Hotels",
    request_body = CreateHotelRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<HotelResponse>),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_hotel(
    State(state): State<HotelsState>,
    ValidatedJson(req): ValidatedJson<CreateHotelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HotelResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    // Reject duplicate names before hitting the unique index
    match state.repos.hotels().find_by_name(&req.name).await {
        Ok(Some(_)) => {
            return Err((
                StatusCode::CONFLICT,
                Json(ApiResponse::error(format!(
                    "Hotel {} already exists",
                    req.name
                ))),
            ));
        }
        Ok(None) => {}
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to check hotel: {}", e))),
            ));
        }
    }

    let mut hotel = Hotel::new(req.name, req.city, req.stars);
    hotel.description = req.description;
    hotel.is_active = req.is_active.unwrap_or(true);

    match state.repos.hotels().save(hotel).await {
        Ok(saved) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(saved.into())),
        )),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!("Failed to create hotel: {}", e))),
        )),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "Hotels",
    params(("hotel_id" = i32, Path, description = "Hotel ID")),
    request_body = UpdateHotelRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<HotelResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_hotel(
    State(state): State<HotelsState>,
    Path(hotel_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateHotelRequest>,
) -> Result<Json<ApiResponse<HotelResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = match state.repos.hotels().find_by_id(hotel_id).await {
        Ok(Some(h)) => h,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Hotel {} not found", hotel_id))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to get hotel: {}", e))),
            ));
        }
    };

    let updated = Hotel {
        id: existing.id,
        name: req.name.unwrap_or(existing.name),
        city: req.city.unwrap_or(existing.city),
        stars: req.stars.unwrap_or(existing.stars),
        description: req.description.or(existing.description),
        is_active: req.is_active.unwrap_or(existing.is_active),
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };

    match state.repos.hotels().update(updated.clone()).await {
        Ok(()) => Ok(Json(ApiResponse::success(updated.into()))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to update hotel: {}", e))),
        )),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "Hotels",
    params(("hotel_id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_hotel(
    State(state): State<HotelsState>,
    Path(hotel_id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.hotels().delete(hotel_id).await {
        Ok(()) => Ok(Json(ApiResponse::success("Hotel deleted".to_string()))),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Failed to delete hotel: {}", e))),
        )),
    }
}
