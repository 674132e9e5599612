//! Package tariff calculation
//!
//! Prices a classified room against a departure's rates. Bus and air
//! departures bill children differently: bus charges a flat reduced fee
//! per in-quota child, air substitutes per-band rates and adds a fee
//! once per traveler.

use std::fmt;

use super::occupancy::{OccupancyBreakdown, RoomOccupancy};

/// Flat fee billed for each reduced-fare child on bus departures (USD)
pub const REDUCED_CHILD_FEE: f64 = 50.0;
/// Flat per-package surcharge for air departures (USD)
pub const AIR_SURCHARGE: f64 = 200.0;
/// Administrative fee rate applied to bus departures
pub const ADMIN_FEE_RATE: f64 = 0.03;

/// Transport mode of a departure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportType {
    Bus,
    Aereo,
}

impl TransportType {
    /// Map a raw transport string. Only the exact literal "Aéreo"
    /// (accent included) selects the air branch; every other value,
    /// unaccented "Aereo" included, prices as bus.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "Aéreo" {
            Self::Aereo
        } else {
            Self::Bus
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Aereo => "Aéreo",
        }
    }
}

impl Default for TransportType {
    fn default() -> Self {
        Self::Bus
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-band child rates for air departures (USD)
///
/// Carried by the availability record; an unset band prices at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AirRateTable {
    pub child_0_2: f64,
    pub child_2_5: f64,
    pub child_6_plus: f64,
    /// Air fee added once per traveler
    pub fee_per_person: f64,
}

/// Pricing parameters for one departure
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tariff {
    pub transport: TransportType,
    pub per_adult: f64,
    pub air: AirRateTable,
}

/// Base price for one room together with its occupancy breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub total_base_usd: f64,
    pub breakdown: OccupancyBreakdown,
}

impl Tariff {
    pub fn bus(per_adult: f64) -> Self {
        Self {
            transport: TransportType::Bus,
            per_adult,
            air: AirRateTable::default(),
        }
    }

    pub fn air(per_adult: f64, air: AirRateTable) -> Self {
        Self {
            transport: TransportType::Aereo,
            per_adult,
            air,
        }
    }

    /// Base price for a single room.
    ///
    /// Bus bills every adult-rated occupant (children 6+ included) at
    /// the per-adult rate and each in-quota child at the flat reduced
    /// fee. Air swaps the child charges for per-band rates and adds the
    /// per-person fee for every traveler in the room.
    pub fn room_base(&self, counts: &RoomOccupancy) -> PriceQuote {
        let b = counts.classify();
        let total = match self.transport {
            TransportType::Bus => {
                (b.charged_adults + b.children_6_plus) as f64 * self.per_adult
                    + b.reduced_fare_children as f64 * REDUCED_CHILD_FEE
            }
            TransportType::Aereo => {
                // Quota slots fill youngest first: the 0-3 band before 4-5.
                let reduced_0_3 = counts.children_0_3.min(b.reduced_fare_children);
                let reduced_4_5 = b.reduced_fare_children - reduced_0_3;
                b.charged_adults as f64 * self.per_adult
                    + reduced_0_3 as f64 * self.air.child_0_2
                    + reduced_4_5 as f64 * self.air.child_2_5
                    + b.children_6_plus as f64 * self.air.child_6_plus
                    + b.total_persons as f64 * self.air.fee_per_person
            }
        };
        PriceQuote {
            total_base_usd: total,
            breakdown: b,
        }
    }

    /// Sum of room base prices across a whole package.
    pub fn package_base_total(&self, rooms: &[RoomOccupancy]) -> f64 {
        rooms
            .iter()
            .map(|room| self.room_base(room).total_base_usd)
            .sum()
    }

    /// Final selling price for a computed base. Bus departures carry
    /// the administrative fee, air departures a flat surcharge instead.
    pub fn final_price(&self, base_total: f64) -> f64 {
        match self.transport {
            TransportType::Bus => base_total * (1.0 + ADMIN_FEE_RATE),
            TransportType::Aereo => base_total + AIR_SURCHARGE,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_air_rates() -> AirRateTable {
        AirRateTable {
            child_0_2: 80.0,
            child_2_5: 150.0,
            child_6_plus: 400.0,
            fee_per_person: 35.0,
        }
    }

    #[test]
    fn bus_two_adults() {
        let quote = Tariff::bus(561.0).room_base(&RoomOccupancy::new(2, 0, 0, 0));
        assert_eq!(quote.total_base_usd, 1122.0);
        assert_eq!(quote.breakdown.charged_adults, 2);
    }

    #[test]
    fn bus_two_adults_one_young_child() {
        let quote = Tariff::bus(561.0).room_base(&RoomOccupancy::new(2, 1, 0, 0));
        assert_eq!(quote.total_base_usd, 1172.0);
        assert_eq!(quote.breakdown.reduced_fare_children, 1);
    }

    #[test]
    fn bus_promoted_child_pays_adult_rate() {
        let quote = Tariff::bus(561.0).room_base(&RoomOccupancy::new(2, 2, 0, 0));
        assert_eq!(quote.total_base_usd, 1733.0);
        assert_eq!(quote.breakdown.charged_adults, 3);
        assert_eq!(quote.breakdown.promoted_children, 1);
    }

    #[test]
    fn bus_older_child_pays_adult_rate() {
        let quote = Tariff::bus(561.0).room_base(&RoomOccupancy::new(2, 0, 0, 1));
        assert_eq!(quote.total_base_usd, 1683.0);
    }

    #[test]
    fn package_total_matches_aggregated_counts_on_bus() {
        let tariff = Tariff::bus(561.0);
        let rooms = [RoomOccupancy::new(2, 0, 0, 0), RoomOccupancy::new(2, 1, 0, 0)];
        let per_room = tariff.package_base_total(&rooms);
        let aggregated = tariff
            .room_base(&RoomOccupancy::new(4, 1, 0, 0))
            .total_base_usd;
        assert_eq!(per_room, 2294.0);
        assert_eq!(per_room, aggregated);
    }

    #[test]
    fn air_substitutes_band_rates_and_adds_per_person_fee() {
        let tariff = Tariff::air(561.0, sample_air_rates());
        // 2 adults + 1 in-quota child (0-3 band) + 1 child 6+:
        // 2*561 + 80 + 400 + 4*35 = 1742
        let quote = tariff.room_base(&RoomOccupancy::new(2, 1, 0, 1));
        assert_eq!(quote.total_base_usd, 1742.0);
    }

    #[test]
    fn air_quota_fills_youngest_band_first() {
        let tariff = Tariff::air(561.0, sample_air_rates());
        // Quota of one slot: the 0-3 child takes it, the 4-5 child is
        // promoted to the adult rate.
        // 3*561 + 80 + 400 + 5*35 = 2338
        let quote = tariff.room_base(&RoomOccupancy::new(2, 1, 1, 1));
        assert_eq!(quote.breakdown.promoted_children, 1);
        assert_eq!(
            quote.total_base_usd,
            3.0 * 561.0 + 80.0 + 400.0 + 5.0 * 35.0
        );
    }

    #[test]
    fn air_quota_spills_into_middle_band() {
        let tariff = Tariff::air(561.0, sample_air_rates());
        // Quota of two slots, one child per young band: both reduced,
        // one at each band rate.
        // 4*561 + 80 + 150 + 6*35 = 2684
        let quote = tariff.room_base(&RoomOccupancy::new(4, 1, 1, 0));
        assert_eq!(quote.breakdown.reduced_fare_children, 2);
        assert_eq!(quote.total_base_usd, 4.0 * 561.0 + 80.0 + 150.0 + 6.0 * 35.0);
    }

    #[test]
    fn final_price_bus_adds_admin_fee() {
        let tariff = Tariff::bus(561.0);
        assert_eq!(tariff.final_price(100.0), 103.0);
        assert!((tariff.final_price(1122.0) - 1155.66).abs() < 1e-9);
    }

    #[test]
    fn final_price_air_adds_flat_surcharge() {
        let tariff = Tariff::air(561.0, sample_air_rates());
        assert_eq!(tariff.final_price(100.0), 300.0);
        assert_eq!(tariff.final_price(0.0), 200.0);
    }

    #[test]
    fn only_the_accented_literal_selects_air() {
        assert_eq!(TransportType::from_raw("Aéreo"), TransportType::Aereo);
        assert_eq!(TransportType::from_raw("Aereo"), TransportType::Bus);
        assert_eq!(TransportType::from_raw("aéreo"), TransportType::Bus);
        assert_eq!(TransportType::from_raw("Bus"), TransportType::Bus);
        assert_eq!(TransportType::from_raw(""), TransportType::Bus);
    }

    #[test]
    fn transport_round_trips_through_its_label() {
        for transport in [TransportType::Bus, TransportType::Aereo] {
            assert_eq!(TransportType::from_raw(transport.as_str()), transport);
        }
    }

    #[test]
    fn empty_room_prices_to_zero_on_bus() {
        let quote = Tariff::bus(561.0).room_base(&RoomOccupancy::default());
        assert_eq!(quote.total_base_usd, 0.0);
    }

    #[test]
    fn raising_the_adult_rate_never_lowers_a_bus_price() {
        let room = RoomOccupancy::new(2, 2, 0, 1);
        let mut previous = 0.0;
        for rate in [100.0, 250.0, 561.0, 900.0] {
            let total = Tariff::bus(rate).room_base(&room).total_base_usd;
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn room_base_is_pure() {
        let tariff = Tariff::air(561.0, sample_air_rates());
        let room = RoomOccupancy::new(3, 2, 1, 1);
        let first = tariff.room_base(&room);
        let second = tariff.room_base(&room);
        assert_eq!(first, second);
    }
}
