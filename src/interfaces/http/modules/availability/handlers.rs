//! Availability REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{
    AvailabilityResponse, CreateAvailabilityRequest, ListAvailabilityParams,
    UpdateAvailabilityRequest,
};
use crate::domain::{Availability, RepositoryProvider, TransportType};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

/// Shared state for the availability module
#[derive(Clone)]
pub struct AvailabilityState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/availability",
    tag = "Availability",
    params(ListAvailabilityParams),
    responses(
        (status = 200, description = "Upcoming departures", body = ApiResponse<Vec<AvailabilityResponse>>)
    )
)]
pub async fn list_availability(
    State(state): State<AvailabilityState>,
    Query(params): Query<ListAvailabilityParams>,
) -> Result<Json<ApiResponse<Vec<AvailabilityResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let from = params.from.unwrap_or_else(|| Utc::now().date_naive());
    match state.repos.availability().find_upcoming(from).await {
        Ok(departures) => {
            let responses: Vec<AvailabilityResponse> =
                departures.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to list departures: {}",
                e
            ))),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}/availability",
    tag = "Availability",
    params(("hotel_id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Departures of one hotel", body = ApiResponse<Vec<AvailabilityResponse>>),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn list_for_hotel(
    State(state): State<AvailabilityState>,
    Path(hotel_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<AvailabilityResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.hotels().find_by_id(hotel_id).await {
        Ok(Some(_)) => {}
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
    }

    match state.repos.availability().find_by_hotel(hotel_id).await {
        Ok(departures) => {
            let responses: Vec<AvailabilityResponse> =
                departures.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to list departures: {}",
                e
            ))),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/availability/{id}",
    tag = "Availability",
    params(("id" = i32, Path, description = "Availability ID")),
    responses(
        (status = 200, description = "Departure details", body = ApiResponse<AvailabilityResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_availability(
    State(state): State<AvailabilityState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.availability().find_by_id(id).await {
        Ok(Some(departure)) => Ok(Json(ApiResponse::success(departure.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Availability {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to get departure: {}", e))),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/availability",
    tag = "Availability",
    request_body = CreateAvailabilityRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<AvailabilityResponse>),
        (status = 404, description = "Hotel not found"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_availability(
    State(state): State<AvailabilityState>,
    ValidatedJson(req): ValidatedJson<CreateAvailabilityRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AvailabilityResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    match state.repos.hotels().find_by_id(req.hotel_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!(
                    "Hotel {} not found",
                    req.hotel_id
                ))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to get hotel: {}", e))),
            ));
        }
    }

    let now = Utc::now();
    let departure = Availability {
        id: 0,
        hotel_id: req.hotel_id,
        travel_date: req.travel_date,
        nights: req.nights,
        transport: TransportType::from_raw(&req.transport),
        per_adult_rate: req.per_adult_rate,
        air_child_0_2: req.air_child_0_2.unwrap_or(0.0),
        air_child_2_5: req.air_child_2_5.unwrap_or(0.0),
        air_child_6_plus: req.air_child_6_plus.unwrap_or(0.0),
        air_fee_per_person: req.air_fee_per_person.unwrap_or(0.0),
        seats_total: req.seats_total,
        // New departures start with every seat free
        seats_left: req.seats_total,
        is_active: req.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };

    match state.repos.availability().save(departure).await {
        Ok(saved) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(saved.into())),
        )),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Failed to create departure: {}",
                e
            ))),
        )),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/availability/{id}",
    tag = "Availability",
    params(("id" = i32, Path, description = "Availability ID")),
    request_body = UpdateAvailabilityRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<AvailabilityResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_availability(
    State(state): State<AvailabilityState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateAvailabilityRequest>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = match state.repos.availability().find_by_id(id).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Availability {} not found", id))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to get departure: {}", e))),
            ));
        }
    };

    let updated = Availability {
        id: existing.id,
        hotel_id: existing.hotel_id,
        travel_date: req.travel_date.unwrap_or(existing.travel_date),
        nights: req.nights.unwrap_or(existing.nights),
        transport: req
            .transport
            .map(|t| TransportType::from_raw(&t))
            .unwrap_or(existing.transport),
        per_adult_rate: req.per_adult_rate.unwrap_or(existing.per_adult_rate),
        air_child_0_2: req.air_child_0_2.unwrap_or(existing.air_child_0_2),
        air_child_2_5: req.air_child_2_5.unwrap_or(existing.air_child_2_5),
        air_child_6_plus: req.air_child_6_plus.unwrap_or(existing.air_child_6_plus),
        air_fee_per_person: req
            .air_fee_per_person
            .unwrap_or(existing.air_fee_per_person),
        seats_total: req.seats_total.unwrap_or(existing.seats_total),
        seats_left: req.seats_left.unwrap_or(existing.seats_left),
        is_active: req.is_active.unwrap_or(existing.is_active),
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };

    match state.repos.availability().update(updated.clone()).await {
        Ok(()) => Ok(Json(ApiResponse::success(updated.into()))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to update departure: {}",
                e
            ))),
        )),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/availability/{id}",
    tag = "Availability",
    params(("id" = i32, Path, description = "Availability ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_availability(
    State(state): State<AvailabilityState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.availability().delete(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(
            "Availability deleted".to_string(),
        ))),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "Failed to delete departure: {}",
                e
            ))),
        )),
    }
}
