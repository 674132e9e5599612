//! Quote preview request/response DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::PackageQuote;
use crate::domain::{InstallmentPlan, PriceQuote, RoomOccupancy};

/// Occupancy of a single room in a quote request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomOccupancyDto {
    /// Number of adults in the room
    pub adults: u32,
    /// Children aged 0 to 3
    #[serde(default)]
    pub children_0_3: u32,
    /// Children aged 4 to 5
    #[serde(default)]
    pub children_4_5: u32,
    /// Children aged 6 and older
    #[serde(default)]
    pub children_6_plus: u32,
}

impl From<RoomOccupancyDto> for RoomOccupancy {
    fn from(dto: RoomOccupancyDto) -> Self {
        RoomOccupancy::new(
            dto.adults,
            dto.children_0_3,
            dto.children_4_5,
            dto.children_6_plus,
        )
    }
}

/// Request to price a package without persisting anything
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct QuotePreviewRequest {
    /// Departure to quote against
    pub availability_id: i32,
    /// Rooms requested by the travelling party
    #[validate(length(min = 1, max = 10, message = "a quote needs 1 to 10 rooms"))]
    pub rooms: Vec<RoomOccupancyDto>,
    /// Optional discount code
    pub promo_code: Option<String>,
}

/// Priced breakdown for one room
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomQuoteDto {
    pub room_category: String,
    pub charged_adults: u32,
    pub reduced_fare_children: u32,
    pub promoted_children: u32,
    pub total_persons: u32,
    pub room_base_usd: f64,
}

impl From<PriceQuote> for RoomQuoteDto {
    fn from(quote: PriceQuote) -> Self {
        Self {
            room_category: quote.breakdown.room_category.as_str().to_string(),
            charged_adults: quote.breakdown.charged_adults,
            reduced_fare_children: quote.breakdown.reduced_fare_children,
            promoted_children: quote.breakdown.promoted_children,
            total_persons: quote.breakdown.total_persons,
            room_base_usd: quote.total_base_usd,
        }
    }
}

/// Payment schedule for the quoted package
#[derive(Debug, Serialize, ToSchema)]
pub struct InstallmentPlanDto {
    pub installments: u32,
    pub installment_value: f64,
}

impl From<InstallmentPlan> for InstallmentPlanDto {
    fn from(plan: InstallmentPlan) -> Self {
        Self {
            installments: plan.installments,
            installment_value: plan.installment_value,
        }
    }
}

/// Full quote preview returned to the caller
#[derive(Debug, Serialize, ToSchema)]
pub struct QuotePreviewResponse {
    pub rooms: Vec<RoomQuoteDto>,
    pub package_base_usd: f64,
    pub final_price_usd: f64,
    pub promo_savings_usd: f64,
    pub total_due_usd: f64,
    pub plan: InstallmentPlanDto,
    pub transport: String,
    pub travel_date: NaiveDate,
}

impl From<PackageQuote> for QuotePreviewResponse {
    fn from(quote: PackageQuote) -> Self {
        Self {
            rooms: quote.rooms.into_iter().map(Into::into).collect(),
            package_base_usd: quote.package_base,
            final_price_usd: quote.final_price,
            promo_savings_usd: quote.promo_savings,
            total_due_usd: quote.total_due,
            plan: quote.plan.into(),
            transport: quote.transport.as_str().to_string(),
            travel_date: quote.travel_date,
        }
    }
}
