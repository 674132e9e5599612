//! Quote preview REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use super::dto::{QuotePreviewRequest, QuotePreviewResponse};
use crate::application::{QuoteRequest, QuoteService};
use crate::domain::DomainError;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

/// Shared state for the quotes module
#[derive(Clone)]
pub struct QuotesState {
    pub service: Arc<QuoteService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/quotes/preview",
    tag = "Quotes",
    request_body = QuotePreviewRequest,
    responses(
        (status = 200, description = "Priced quote", body = ApiResponse<QuotePreviewResponse>),
        (status = 400, description = "Departure not bookable or promo invalid"),
        (status = 404, description = "Departure not found"),
        (status = 422, description = "Invalid request data")
    )
)]
pub async fn preview_quote(
    State(state): State<QuotesState>,
    ValidatedJson(req): ValidatedJson<QuotePreviewRequest>,
) -> Result<Json<ApiResponse<QuotePreviewResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = QuoteRequest {
        availability_id: req.availability_id,
        rooms: req.rooms.into_iter().map(Into::into).collect(),
        promo_code: req.promo_code,
    };
    let today = Utc::now().date_naive();

    match state.service.preview(request, today).await {
        Ok(quote) => Ok(Json(ApiResponse::success(quote.into()))),
        Err(e) => {
            let status = match &e {
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::Conflict(_) => StatusCode::CONFLICT,
            };
            Err((status, Json(ApiResponse::error(e.to_string()))))
        }
    }
}
