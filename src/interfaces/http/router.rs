//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::QuoteService;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};

use super::modules::{availability, health, hotels, metrics, promotions, quotes, request_id};

/// Unified state for all hotel-scoped routes (hotel CRUD + the nested
/// availability listing). Axum extracts the specific handler state via
/// `FromRef`.
#[derive(Clone)]
pub struct HotelUnifiedState {
    pub repos: Arc<dyn RepositoryProvider>,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<HotelUnifiedState> for hotels::HotelsState {
    fn from_ref(s: &HotelUnifiedState) -> Self {
        hotels::HotelsState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<HotelUnifiedState> for availability::AvailabilityState {
    fn from_ref(s: &HotelUnifiedState) -> Self {
        availability::AvailabilityState {
            repos: Arc::clone(&s.repos),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Hotels
        hotels::list_hotels,
        hotels::get_hotel,
        hotels::create_hotel,
        hotels::update_hotel,
        hotels::delete_hotel,
        // Availability
        availability::list_availability,
        availability::list_for_hotel,
        availability::get_availability,
        availability::create_availability,
        availability::update_availability,
        availability::delete_availability,
        // Promotions
        promotions::list_promotions,
        promotions::get_promotion,
        promotions::create_promotion,
        promotions::update_promotion,
        promotions::delete_promotion,
        // Quotes
        quotes::preview_quote,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginationParams,
            PaginatedResponse<hotels::HotelResponse>,
            // Hotels
            hotels::HotelResponse,
            hotels::CreateHotelRequest,
            hotels::UpdateHotelRequest,
            // Availability
            availability::AvailabilityResponse,
            availability::CreateAvailabilityRequest,
            availability::UpdateAvailabilityRequest,
            // Promotions
            promotions::PromotionResponse,
            promotions::CreatePromotionRequest,
            promotions::UpdatePromotionRequest,
            // Quotes
            quotes::QuotePreviewRequest,
            quotes::QuotePreviewResponse,
            quotes::RoomOccupancyDto,
            quotes::RoomQuoteDto,
            quotes::InstallmentPlanDto,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Hotels", description = "Hotel catalogue management"),
        (name = "Availability", description = "Departure dates, transport rates and seat inventory"),
        (name = "Promotions", description = "Discount code management"),
        (name = "Quotes", description = "Package price previews with per-room occupancy breakdown"),
    ),
    info(
        title = "Viamar Tours API",
        version = "1.0.0",
        description = "REST API for managing tour packages, departures and package quotes",
        license(name = "MIT"),
        contact(name = "Viamar Tours", email = "support@viamartours.com")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    quote_service: Arc<QuoteService>,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    // ── Unified state for ALL hotel-scoped routes ───────────────────
    let hotel_unified = HotelUnifiedState {
        repos: repos.clone(),
    };

    // A SINGLE router for every /api/v1/hotels/* route, so Axum's
    // `matchit` sees every parametric segment in one tree and routes
    // correctly.
    let hotel_routes = Router::new()
        .route("/", get(hotels::list_hotels).post(hotels::create_hotel))
        .route(
            "/{hotel_id}",
            get(hotels::get_hotel)
                .put(hotels::update_hotel)
                .delete(hotels::delete_hotel),
        )
        .route(
            "/{hotel_id}/availability",
            get(availability::list_for_hotel),
        )
        .with_state(hotel_unified);

    // ── Other states / routers ─────────────────────────────────

    let availability_state = availability::AvailabilityState {
        repos: repos.clone(),
    };
    let availability_routes = Router::new()
        .route(
            "/",
            get(availability::list_availability).post(availability::create_availability),
        )
        .route(
            "/{id}",
            get(availability::get_availability)
                .put(availability::update_availability)
                .delete(availability::delete_availability),
        )
        .with_state(availability_state);

    let promotions_state = promotions::PromotionsState {
        repos: repos.clone(),
    };
    let promotion_routes = Router::new()
        .route(
            "/",
            get(promotions::list_promotions).post(promotions::create_promotion),
        )
        .route(
            "/{id}",
            get(promotions::get_promotion)
                .put(promotions::update_promotion)
                .delete(promotions::delete_promotion),
        )
        .with_state(promotions_state);

    let quotes_state = quotes::QuotesState {
        service: quote_service,
    };
    let quote_routes = Router::new()
        .route("/preview", post(quotes::preview_quote))
        .with_state(quotes_state);

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let metrics_state = metrics::MetricsState {
        handle: prometheus_handle,
    };
    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics_state);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health + Prometheus scrape endpoint
        .merge(health_routes)
        .merge(metrics_routes)
        // Hotels (CRUD + per-hotel availability)
        .nest("/api/v1/hotels", hotel_routes)
        // Availability (standalone)
        .nest("/api/v1/availability", availability_routes)
        // Promotions
        .nest("/api/v1/promotions", promotion_routes)
        // Quotes
        .nest("/api/v1/quotes", quote_routes)
        // Middleware. Request metrics are a route layer so the matched
        // path pattern is available for the `path` label.
        .route_layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
