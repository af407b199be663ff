//! Pricing derivation for a booking.
//!
//! `calculate_total` is a pure function of the booking value. It is
//! recomputed on every render and never cached or written back into
//! state; all arithmetic is in whole non-negative rupees.

use chrono::NaiveDate;

use crate::app::Booking;
use crate::models::PriceUnit;

/// Whole days between two dates, ignoring order.
///
/// A same-day start and end yields zero days, which in turn zeroes the
/// guide subtotal. Kept as-is: the confirmation page shows the same
/// number, so "fixing" it here would desynchronize price and display.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> u64 {
    (end - start).num_days().unsigned_abs()
}

/// Guide cost: daily rate × trek days × party size. Zero until a guide
/// and both dates are chosen.
pub fn guide_subtotal(booking: &Booking) -> u64 {
    match (&booking.guide, booking.start_date, booking.end_date) {
        (Some(guide), Some(start), Some(end)) => {
            guide.price_per_day * day_count(start, end) * u64::from(booking.group_size)
        }
        _ => 0,
    }
}

/// Sum of all selected add-ons. Per-person add-ons scale with the
/// group size; everything else is price × quantity.
pub fn add_on_subtotal(booking: &Booking) -> u64 {
    booking
        .add_ons
        .iter()
        .filter(|sel| sel.selected)
        .map(|sel| {
            let mut cost = sel.add_on.price * u64::from(sel.quantity.max(1));
            if sel.add_on.price_unit == PriceUnit::PerPerson {
                cost *= u64::from(booking.group_size);
            }
            cost
        })
        .sum()
}

/// Total price of the booking as currently composed.
pub fn calculate_total(booking: &Booking) -> u64 {
    guide_subtotal(booking) + add_on_subtotal(booking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{reduce, Action, AppState};
    use crate::catalog;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Kedarkantha, Rajesh Kumar (3500/day), Jan 25-29, party of 2.
    fn sample_booking() -> Booking {
        let mut state = reduce(
            AppState::default(),
            Action::StartBooking {
                trail: catalog::find_trail("kedarkantha").unwrap(),
            },
        );
        state = reduce(
            state,
            Action::SelectGuide(catalog::find_guide("rajesh-kumar").unwrap()),
        );
        state = reduce(
            state,
            Action::SetBookingDates {
                start: date("2025-01-25"),
                end: date("2025-01-29"),
            },
        );
        state = reduce(state, Action::SetGroupSize(2));
        state.booking
    }

    #[test]
    fn test_day_count() {
        assert_eq!(day_count(date("2025-01-25"), date("2025-01-29")), 4);
        assert_eq!(day_count(date("2025-01-25"), date("2025-01-25")), 0);
        // Inverted ranges count the same distance
        assert_eq!(day_count(date("2025-01-29"), date("2025-01-25")), 4);
    }

    #[test]
    fn test_guide_subtotal_kedarkantha_scenario() {
        // 3500/day × 4 days × 2 people
        assert_eq!(guide_subtotal(&sample_booking()), 28_000);
    }

    #[test]
    fn test_guide_subtotal_zero_when_any_input_missing() {
        let full = sample_booking();

        let mut no_guide = full.clone();
        no_guide.guide = None;
        assert_eq!(guide_subtotal(&no_guide), 0);

        let mut no_start = full.clone();
        no_start.start_date = None;
        assert_eq!(guide_subtotal(&no_start), 0);

        let mut no_end = full;
        no_end.end_date = None;
        assert_eq!(guide_subtotal(&no_end), 0);
    }

    #[test]
    fn test_same_day_trek_prices_to_zero() {
        // Boundary carried over from the source: a same-day start and
        // end means zero chargeable days, not a one-day minimum.
        let mut booking = sample_booking();
        booking.start_date = Some(date("2025-01-25"));
        booking.end_date = Some(date("2025-01-25"));
        assert_eq!(guide_subtotal(&booking), 0);
        assert_eq!(calculate_total(&booking), 0);
    }

    #[test]
    fn test_total_with_per_person_transport() {
        // Guide 28 000 + transport 1500 × 1 × 2 people = 31 000
        let mut booking = sample_booking();
        booking.add_ons = reduce(
            AppState {
                booking: booking.clone(),
                ..AppState::default()
            },
            Action::ToggleAddOn {
                id: "transport".to_string(),
                quantity: None,
            },
        )
        .booking
        .add_ons;
        assert_eq!(calculate_total(&booking), 31_000);
    }

    #[test]
    fn test_per_person_addon_scales_linearly_with_group_size() {
        let mut booking = sample_booking();
        booking.guide = None; // isolate the add-on contribution
        for sel in &mut booking.add_ons {
            if sel.add_on.id == "transport" {
                sel.selected = true;
            }
        }

        booking.group_size = 2;
        let at_two = add_on_subtotal(&booking);
        booking.group_size = 6;
        let at_six = add_on_subtotal(&booking);
        assert_eq!(at_two, 3_000);
        assert_eq!(at_six, 9_000);
        assert_eq!(at_six, at_two / 2 * 6);
    }

    #[test]
    fn test_non_per_person_addon_ignores_group_size() {
        let mut booking = sample_booking();
        booking.guide = None;
        for sel in &mut booking.add_ons {
            if sel.add_on.id == "photography" {
                sel.selected = true;
            }
        }
        booking.group_size = 1;
        let solo = add_on_subtotal(&booking);
        booking.group_size = 12;
        let full_party = add_on_subtotal(&booking);
        assert_eq!(solo, 3_000);
        assert_eq!(solo, full_party);
    }

    #[test]
    fn test_addon_quantity_multiplies_price() {
        let mut booking = sample_booking();
        booking.guide = None;
        booking.group_size = 1;
        for sel in &mut booking.add_ons {
            if sel.add_on.id == "accommodation" {
                sel.selected = true;
                sel.quantity = 3; // three nights at 2500
            }
        }
        assert_eq!(add_on_subtotal(&booking), 7_500);
    }

    #[test]
    fn test_empty_booking_totals_to_zero() {
        assert_eq!(calculate_total(&Booking::default()), 0);
    }

    #[test]
    fn test_calculate_total_does_not_mutate_booking() {
        let booking = sample_booking();
        let snapshot = booking.clone();
        let _ = calculate_total(&booking);
        assert_eq!(booking, snapshot);
    }
}
