//! The state container.
//!
//! `Store` owns the single `AppState` value, funnels every mutation
//! through the reducer, and notifies subscribers after each dispatch.
//! There is exactly one writer (the reducer) and any number of readers;
//! views read snapshots through `state()` and never mutate directly.

use chrono::NaiveDate;
use tracing::debug;

use crate::app::{reduce, Action, AppState, Page};
use crate::ids::BookingIdGenerator;
use crate::models::{Guide, Trail, UserProfile};
use crate::pricing;

type Listener = Box<dyn FnMut(&AppState) + Send>;

pub struct Store {
    state: AppState,
    listeners: Vec<Listener>,
    ids: Box<dyn BookingIdGenerator + Send>,
}

impl Store {
    pub fn new(ids: Box<dyn BookingIdGenerator + Send>) -> Self {
        Self::with_state(AppState::default(), ids)
    }

    pub fn with_state(state: AppState, ids: Box<dyn BookingIdGenerator + Send>) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            ids,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a callback invoked with the new state after every
    /// dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Run an action through the reducer and notify subscribers.
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.kind(), "dispatching");
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }

    // =========================================================================
    // Inbound operations
    // =========================================================================

    pub fn navigate_to(&mut self, page: Page, trail: Option<Trail>) {
        self.dispatch(Action::NavigateTo { page, trail });
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.dispatch(Action::SetSearchQuery(query.to_string()));
    }

    pub fn set_selected_trail(&mut self, trail: Trail) {
        self.dispatch(Action::SetSelectedTrail(trail));
    }

    pub fn toggle_bookmark(&mut self, trail_id: &str) {
        self.dispatch(Action::ToggleBookmark(trail_id.to_string()));
    }

    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.dispatch(Action::SetUser(user));
    }

    pub fn start_booking(&mut self, trail: Trail) {
        self.dispatch(Action::StartBooking { trail });
    }

    pub fn select_guide(&mut self, guide: Guide) {
        self.dispatch(Action::SelectGuide(guide));
    }

    pub fn set_booking_dates(&mut self, start: NaiveDate, end: NaiveDate) {
        self.dispatch(Action::SetBookingDates { start, end });
    }

    pub fn set_group_size(&mut self, size: u32) {
        self.dispatch(Action::SetGroupSize(size));
    }

    pub fn toggle_add_on(&mut self, id: &str, quantity: Option<u32>) {
        self.dispatch(Action::ToggleAddOn {
            id: id.to_string(),
            quantity,
        });
    }

    /// Draw a fresh id from the generator, confirm the booking, and
    /// return the id. Id generation happens before dispatch so the
    /// reducer stays deterministic.
    pub fn confirm_booking(&mut self) -> String {
        let booking_id = self.ids.next_id();
        self.dispatch(Action::ConfirmBooking {
            booking_id: booking_id.clone(),
        });
        booking_id
    }

    pub fn cancel_booking(&mut self) {
        self.dispatch(Action::CancelBooking);
    }

    pub fn reset_booking(&mut self) {
        self.dispatch(Action::ResetBooking);
    }

    // =========================================================================
    // Query surface
    // =========================================================================

    /// Derived total price of the current booking.
    pub fn calculate_total(&self) -> u64 {
        pricing::calculate_total(&self.state.booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Booking, BookingStatus};
    use crate::catalog;
    use crate::ids::SequenceIdGenerator;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn test_store() -> Store {
        Store::new(Box::new(SequenceIdGenerator::new("ADV-TEST-")))
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_subscribers_see_every_dispatch() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);

        let mut store = test_store();
        store.subscribe(move |state| {
            seen.fetch_add(1, Ordering::SeqCst);
            assert!(state.search_query.is_empty() || state.search_query == "snow");
        });

        store.set_search_query("snow");
        store.toggle_bookmark("rajmachi");
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_confirm_booking_uses_injected_generator() {
        let mut store = test_store();
        store.start_booking(catalog::find_trail("kedarkantha").unwrap());

        let id = store.confirm_booking();
        assert_eq!(id, "ADV-TEST-0001");
        assert_eq!(store.state().booking.booking_id.as_deref(), Some("ADV-TEST-0001"));
        assert_eq!(store.state().booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_double_confirm_draws_a_new_id() {
        let mut store = test_store();
        store.start_booking(catalog::find_trail("kedarkantha").unwrap());

        let first = store.confirm_booking();
        let second = store.confirm_booking();
        assert_ne!(first, second);
        assert_eq!(store.state().booking.booking_id, Some(second));
        assert_eq!(store.state().booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_full_flow_total_matches_manual_sum() {
        let mut store = test_store();
        store.start_booking(catalog::find_trail("kedarkantha").unwrap());
        store.select_guide(catalog::find_guide("rajesh-kumar").unwrap());
        store.set_booking_dates(date("2025-01-25"), date("2025-01-29"));
        store.set_group_size(2);
        store.toggle_add_on("transport", None);

        // 3500 × 4 × 2 + 1500 × 1 × 2
        assert_eq!(store.calculate_total(), 31_000);
    }

    #[test]
    fn test_reset_from_any_state_restores_default_booking() {
        let mut store = test_store();
        store.start_booking(catalog::find_trail("valley-of-flowers").unwrap());
        store.select_guide(catalog::find_guide("priya-mehta").unwrap());
        store.set_booking_dates(date("2025-07-01"), date("2025-07-06"));
        store.toggle_add_on("meals", Some(6));
        store.confirm_booking();

        store.reset_booking();
        assert_eq!(store.state().booking, Booking::default());
        assert_eq!(store.calculate_total(), 0);
    }

    #[test]
    fn test_cancel_is_terminal_for_the_session() {
        let mut store = test_store();
        store.start_booking(catalog::find_trail("rajmachi").unwrap());
        store.cancel_booking();
        assert_eq!(store.state().booking.status, BookingStatus::Cancelled);
        // The trail reference survives cancellation; only reset clears it
        assert!(store.state().booking.trail.is_some());
    }
}
