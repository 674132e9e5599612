//! Departure availability domain model

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::pricing::{AirRateTable, Tariff, TransportType};

/// One bookable departure: a hotel, a travel date and its rates
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub id: i32,
    pub hotel_id: i32,
    pub travel_date: NaiveDate,
    pub nights: i32,
    pub transport: TransportType,
    /// Price per adult in USD
    pub per_adult_rate: f64,
    /// Air child band rates, zero for bus departures
    pub air_child_0_2: f64,
    pub air_child_2_5: f64,
    pub air_child_6_plus: f64,
    /// Air fee charged once per traveler
    pub air_fee_per_person: f64,
    pub seats_total: i32,
    pub seats_left: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Availability {
    /// Pricing parameters for this departure.
    pub fn tariff(&self) -> Tariff {
        Tariff {
            transport: self.transport,
            per_adult: self.per_adult_rate,
            air: AirRateTable {
                child_0_2: self.air_child_0_2,
                child_2_5: self.air_child_2_5,
                child_6_plus: self.air_child_6_plus,
                fee_per_person: self.air_fee_per_person,
            },
        }
    }

    /// Whether this departure can still be quoted on the given date.
    pub fn is_bookable(&self, today: NaiveDate) -> bool {
        self.is_active && self.seats_left > 0 && self.travel_date >= today
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::RoomOccupancy;

    fn sample_departure() -> Availability {
        let now = Utc::now();
        Availability {
            id: 1,
            hotel_id: 1,
            travel_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            nights: 7,
            transport: TransportType::Bus,
            per_adult_rate: 561.0,
            air_child_0_2: 0.0,
            air_child_2_5: 0.0,
            air_child_6_plus: 0.0,
            air_fee_per_person: 0.0,
            seats_total: 40,
            seats_left: 12,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn tariff_carries_the_departure_rates() {
        let tariff = sample_departure().tariff();
        let quote = tariff.room_base(&RoomOccupancy::new(2, 0, 0, 0));
        assert_eq!(quote.total_base_usd, 1122.0);
    }

    #[test]
    fn bookable_until_the_travel_date() {
        let departure = sample_departure();
        let day_before = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
        let day_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let day_after = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
        assert!(departure.is_bookable(day_before));
        assert!(departure.is_bookable(day_of));
        assert!(!departure.is_bookable(day_after));
    }

    #[test]
    fn sold_out_or_inactive_departures_are_not_bookable() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        let mut sold_out = sample_departure();
        sold_out.seats_left = 0;
        assert!(!sold_out.is_bookable(today));

        let mut inactive = sample_departure();
        inactive.is_active = false;
        assert!(!inactive.is_bookable(today));
    }
}
