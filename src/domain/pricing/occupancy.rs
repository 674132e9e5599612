//! Room occupancy classification
//!
//! Turns the raw person counts of one room into paying units and a room
//! category. Children aged 0-5 share a free-child quota of one slot per
//! two adults; children beyond the quota are billed at the adult rate.

use std::fmt;

/// Person counts for a single room, grouped by fare-relevant age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomOccupancy {
    pub adults: u32,
    pub children_0_3: u32,
    pub children_4_5: u32,
    pub children_6_plus: u32,
}

/// Room category label derived from the number of adult-billed units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomCategory {
    Single,
    Doble,
    Triple,
    Quadruple,
    Quintuple,
    Sextuple,
    SuiteFamiliar,
}

impl RoomCategory {
    /// Map adult-billed units to a category. Anything outside 1-6,
    /// an empty room included, falls back to the family suite.
    pub fn from_paying_units(units: u32) -> Self {
        match units {
            1 => Self::Single,
            2 => Self::Doble,
            3 => Self::Triple,
            4 => Self::Quadruple,
            5 => Self::Quintuple,
            6 => Self::Sextuple,
            _ => Self::SuiteFamiliar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Doble => "Doble",
            Self::Triple => "Triple",
            Self::Quadruple => "Quadruple",
            Self::Quintuple => "Quintuple",
            Self::Sextuple => "Sextuple",
            Self::SuiteFamiliar => "Suite Familiar",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying one room's occupants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyBreakdown {
    /// Occupants billed at the full adult rate (adults plus promoted children)
    pub charged_adults: u32,
    /// Children 0-5 inside the free-child quota, billed at the reduced tier
    pub reduced_fare_children: u32,
    /// Children 0-5 beyond the quota, promoted to the adult rate
    pub promoted_children: u32,
    /// Children 6 and older, billed by the tariff step
    pub children_6_plus: u32,
    /// Everyone in the room, for per-person fees
    pub total_persons: u32,
    pub room_category: RoomCategory,
}

impl RoomOccupancy {
    pub fn new(adults: u32, children_0_3: u32, children_4_5: u32, children_6_plus: u32) -> Self {
        Self {
            adults,
            children_0_3,
            children_4_5,
            children_6_plus,
        }
    }

    /// Classify this room's occupants into paying units.
    ///
    /// One reduced-fare slot is granted per two full adults. Children
    /// aged 0-5 fill the quota regardless of which of the two bands they
    /// belong to; the rest are promoted to the adult rate. Children 6+
    /// never consume quota slots.
    pub fn classify(&self) -> OccupancyBreakdown {
        let children_0_5 = self.children_0_3 + self.children_4_5;
        let free_quota = self.adults / 2;
        let reduced = children_0_5.min(free_quota);
        let promoted = children_0_5 - reduced;
        let charged_adults = self.adults + promoted;

        OccupancyBreakdown {
            charged_adults,
            reduced_fare_children: reduced,
            promoted_children: promoted,
            children_6_plus: self.children_6_plus,
            total_persons: self.adults + children_0_5 + self.children_6_plus,
            room_category: RoomCategory::from_paying_units(charged_adults),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_adults_alone_stay_two_charged() {
        let b = RoomOccupancy::new(2, 0, 0, 0).classify();
        assert_eq!(b.charged_adults, 2);
        assert_eq!(b.reduced_fare_children, 0);
        assert_eq!(b.promoted_children, 0);
        assert_eq!(b.room_category, RoomCategory::Doble);
    }

    #[test]
    fn one_young_child_fits_the_quota() {
        let b = RoomOccupancy::new(2, 1, 0, 0).classify();
        assert_eq!(b.charged_adults, 2);
        assert_eq!(b.reduced_fare_children, 1);
        assert_eq!(b.promoted_children, 0);
        assert_eq!(b.total_persons, 3);
        assert_eq!(b.room_category, RoomCategory::Doble);
    }

    #[test]
    fn second_young_child_is_promoted() {
        let b = RoomOccupancy::new(2, 2, 0, 0).classify();
        assert_eq!(b.charged_adults, 3);
        assert_eq!(b.reduced_fare_children, 1);
        assert_eq!(b.promoted_children, 1);
        assert_eq!(b.room_category, RoomCategory::Triple);
    }

    #[test]
    fn quota_pools_both_young_bands() {
        let b = RoomOccupancy::new(4, 1, 1, 0).classify();
        assert_eq!(b.charged_adults, 4);
        assert_eq!(b.reduced_fare_children, 2);
        assert_eq!(b.promoted_children, 0);
    }

    #[test]
    fn no_adults_promotes_every_young_child() {
        let b = RoomOccupancy::new(0, 2, 1, 0).classify();
        assert_eq!(b.charged_adults, 3);
        assert_eq!(b.reduced_fare_children, 0);
        assert_eq!(b.promoted_children, 3);
        assert_eq!(b.room_category, RoomCategory::Triple);
    }

    #[test]
    fn single_adult_grants_no_quota() {
        let b = RoomOccupancy::new(1, 1, 0, 0).classify();
        assert_eq!(b.charged_adults, 2);
        assert_eq!(b.reduced_fare_children, 0);
        assert_eq!(b.promoted_children, 1);
    }

    #[test]
    fn older_children_never_consume_quota() {
        let b = RoomOccupancy::new(2, 0, 0, 3).classify();
        assert_eq!(b.charged_adults, 2);
        assert_eq!(b.children_6_plus, 3);
        assert_eq!(b.total_persons, 5);
        assert_eq!(b.room_category, RoomCategory::Doble);
    }

    #[test]
    fn empty_room_is_a_family_suite() {
        let b = RoomOccupancy::default().classify();
        assert_eq!(b.charged_adults, 0);
        assert_eq!(b.total_persons, 0);
        assert_eq!(b.room_category, RoomCategory::SuiteFamiliar);
    }

    #[test]
    fn category_covers_every_unit_count() {
        let expected = [
            (0, RoomCategory::SuiteFamiliar),
            (1, RoomCategory::Single),
            (2, RoomCategory::Doble),
            (3, RoomCategory::Triple),
            (4, RoomCategory::Quadruple),
            (5, RoomCategory::Quintuple),
            (6, RoomCategory::Sextuple),
            (7, RoomCategory::SuiteFamiliar),
            (12, RoomCategory::SuiteFamiliar),
        ];
        for (units, category) in expected {
            assert_eq!(RoomCategory::from_paying_units(units), category);
        }
    }

    #[test]
    fn every_child_lands_in_exactly_one_bucket() {
        for adults in 0..=6 {
            for young in 0..=6 {
                let room = RoomOccupancy::new(adults, young, 0, 0);
                let b = room.classify();
                assert_eq!(b.reduced_fare_children + b.promoted_children, young);
                assert_eq!(b.charged_adults, adults + b.promoted_children);
                assert_eq!(b.total_persons, adults + young);
            }
        }
    }

    #[test]
    fn more_adults_never_promote_more_children() {
        for young in 0..=5 {
            let mut previous = u32::MAX;
            for adults in 0..=10 {
                let b = RoomOccupancy::new(adults, young, 0, 0).classify();
                assert!(b.promoted_children <= previous);
                previous = b.promoted_children;
            }
        }
    }

    #[test]
    fn family_suite_label_keeps_its_space() {
        assert_eq!(RoomCategory::SuiteFamiliar.to_string(), "Suite Familiar");
        assert_eq!(RoomCategory::Doble.to_string(), "Doble");
    }
}
