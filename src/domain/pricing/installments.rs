//! Monthly installment planning

use chrono::{Datelike, NaiveDate};

/// Payment schedule for a quoted price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstallmentPlan {
    pub installments: u32,
    pub installment_value: f64,
}

/// Split a total into equal monthly installments covering every month
/// from `today` through the travel month, both inclusive. Dates compare
/// by calendar month only; travel in the current month or the past is
/// paid in a single installment.
pub fn plan_installments(total_price: f64, travel_date: NaiveDate, today: NaiveDate) -> InstallmentPlan {
    let months = (travel_date.year() - today.year()) * 12
        + (travel_date.month() as i32 - today.month() as i32);

    let installments = if months <= 0 { 1 } else { months as u32 + 1 };

    InstallmentPlan {
        installments,
        installment_value: total_price / installments as f64,
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn same_month_travel_pays_once() {
        let plan = plan_installments(1200.0, date(2025, 6, 28), date(2025, 6, 2));
        assert_eq!(plan.installments, 1);
        assert_eq!(plan.installment_value, 1200.0);
    }

    #[test]
    fn june_to_january_spans_eight_payments() {
        let plan = plan_installments(960.0, date(2026, 1, 15), date(2025, 6, 10));
        assert_eq!(plan.installments, 8);
        assert_eq!(plan.installment_value, 120.0);
    }

    #[test]
    fn next_month_travel_pays_twice() {
        let plan = plan_installments(500.0, date(2025, 7, 1), date(2025, 6, 30));
        assert_eq!(plan.installments, 2);
        assert_eq!(plan.installment_value, 250.0);
    }

    #[test]
    fn past_travel_collapses_to_one_payment() {
        let plan = plan_installments(800.0, date(2025, 3, 1), date(2025, 6, 15));
        assert_eq!(plan.installments, 1);
        assert_eq!(plan.installment_value, 800.0);
    }

    #[test]
    fn day_of_month_is_ignored() {
        let late = plan_installments(960.0, date(2026, 1, 1), date(2025, 6, 30));
        let early = plan_installments(960.0, date(2026, 1, 31), date(2025, 6, 1));
        assert_eq!(late.installments, 8);
        assert_eq!(early.installments, 8);
    }

    #[test]
    fn value_times_count_recovers_the_total() {
        let plan = plan_installments(1733.0, date(2026, 4, 5), date(2025, 11, 20));
        assert_eq!(plan.installments, 6);
        assert!((plan.installment_value * plan.installments as f64 - 1733.0).abs() < 1e-9);
    }
}
