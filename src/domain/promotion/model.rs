//! Promotion domain model

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

/// How a promotion discounts a quoted price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionKind {
    /// Takes a percentage off the final price
    PercentOff,
    /// Subtracts a flat amount, floored at zero
    AmountOff,
}

impl Default for PromotionKind {
    fn default() -> Self {
        Self::PercentOff
    }
}

impl fmt::Display for PromotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PercentOff => write!(f, "PercentOff"),
            Self::AmountOff => write!(f, "AmountOff"),
        }
    }
}

/// A promotional code applied to package quotes
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    pub id: i32,
    /// Code customers type in, unique
    pub code: String,
    pub description: Option<String>,
    pub kind: PromotionKind,
    /// Percentage (0-100) or flat USD amount depending on the kind
    pub value: f64,
    /// Inclusive validity window; an open bound never restricts
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Promotion {
    /// Whether the promotion can be applied on the given date.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        if !self.is_active {
            return false;
        }
        if let Some(from) = self.valid_from {
            if date < from {
                return false;
            }
        }
        if let Some(until) = self.valid_until {
            if date > until {
                return false;
            }
        }
        true
    }

    /// Discounted total for a quoted price.
    pub fn apply(&self, total: f64) -> f64 {
        match self.kind {
            PromotionKind::PercentOff => total * (1.0 - self.value / 100.0),
            PromotionKind::AmountOff => (total - self.value).max(0.0),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_promotion(kind: PromotionKind, value: f64) -> Promotion {
        let now = Utc::now();
        Promotion {
            id: 1,
            code: "VERANO10".to_string(),
            description: None,
            kind,
            value,
            valid_from: NaiveDate::from_ymd_opt(2025, 6, 1),
            valid_until: NaiveDate::from_ymd_opt(2025, 8, 31),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn percent_off_scales_the_total() {
        let promo = sample_promotion(PromotionKind::PercentOff, 10.0);
        assert_eq!(promo.apply(1000.0), 900.0);
        assert_eq!(promo.apply(0.0), 0.0);
    }

    #[test]
    fn amount_off_subtracts_and_floors_at_zero() {
        let promo = sample_promotion(PromotionKind::AmountOff, 150.0);
        assert_eq!(promo.apply(1000.0), 850.0);
        assert_eq!(promo.apply(100.0), 0.0);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let promo = sample_promotion(PromotionKind::PercentOff, 10.0);
        assert!(promo.is_valid_on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
        assert!(promo.is_valid_on(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()));
        assert!(!promo.is_valid_on(NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()));
        assert!(!promo.is_valid_on(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
    }

    #[test]
    fn open_bounds_never_restrict() {
        let mut promo = sample_promotion(PromotionKind::PercentOff, 10.0);
        promo.valid_from = None;
        promo.valid_until = None;
        assert!(promo.is_valid_on(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()));
        assert!(promo.is_valid_on(NaiveDate::from_ymd_opt(2099, 1, 1).unwrap()));
    }

    #[test]
    fn inactive_promotions_never_apply() {
        let mut promo = sample_promotion(PromotionKind::PercentOff, 10.0);
        promo.is_active = false;
        assert!(!promo.is_valid_on(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    }
}
