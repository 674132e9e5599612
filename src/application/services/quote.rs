//! Quote service for pricing package requests

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{
    plan_installments, DomainError, DomainResult, InstallmentPlan, PriceQuote, RepositoryProvider,
    RoomOccupancy, TransportType,
};

/// A package quote request: one departure, one or more rooms,
/// optionally a promotional code
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub availability_id: i32,
    pub rooms: Vec<RoomOccupancy>,
    pub promo_code: Option<String>,
}

/// A fully priced package
#[derive(Debug, Clone)]
pub struct PackageQuote {
    pub rooms: Vec<PriceQuote>,
    pub package_base: f64,
    /// Base plus the transport-dependent fee
    pub final_price: f64,
    /// Discount taken by the promotion, zero without one
    pub promo_savings: f64,
    pub total_due: f64,
    pub plan: InstallmentPlan,
    pub transport: TransportType,
    pub travel_date: NaiveDate,
}

/// Service for pricing operations
pub struct QuoteService {
    repos: Arc<dyn RepositoryProvider>,
}

impl QuoteService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Price a package request against a stored departure.
    ///
    /// Looks up the departure, prices every room, applies the
    /// transport fee and an optional promotion, then spreads what is
    /// due over monthly installments up to the travel month.
    pub async fn preview(&self, request: QuoteRequest, today: NaiveDate) -> DomainResult<PackageQuote> {
        let availability = self
            .repos
            .availability()
            .find_by_id(request.availability_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Availability",
                field: "id",
                value: request.availability_id.to_string(),
            })?;

        if !availability.is_bookable(today) {
            return Err(DomainError::Validation(format!(
                "Departure {} is not bookable",
                availability.id
            )));
        }

        let tariff = availability.tariff();
        let rooms: Vec<PriceQuote> = request
            .rooms
            .iter()
            .map(|room| tariff.room_base(room))
            .collect();
        let package_base: f64 = rooms.iter().map(|quote| quote.total_base_usd).sum();
        let final_price = tariff.final_price(package_base);

        let promo_savings = match &request.promo_code {
            Some(code) => {
                let promotion = self
                    .repos
                    .promotions()
                    .find_by_code(code)
                    .await?
                    .ok_or_else(|| {
                        DomainError::Validation(format!("Unknown promo code: {}", code))
                    })?;
                if !promotion.is_valid_on(today) {
                    return Err(DomainError::Validation(format!(
                        "Promo code {} is not valid today",
                        code
                    )));
                }
                final_price - promotion.apply(final_price)
            }
            None => 0.0,
        };

        let total_due = final_price - promo_savings;
        let plan = plan_installments(total_due, availability.travel_date, today);

        info!(
            "Quoted departure {} ({} rooms): {:.2} USD due in {} installments",
            availability.id,
            rooms.len(),
            total_due,
            plan.installments
        );

        Ok(PackageQuote {
            rooms,
            package_base,
            final_price,
            promo_savings,
            total_due,
            plan,
            transport: availability.transport,
            travel_date: availability.travel_date,
        })
    }
}
