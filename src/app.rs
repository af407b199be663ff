//! Application state and the booking reducer.
//!
//! All state lives in a single immutable `AppState` value. The only way
//! to produce a new state is `reduce`, a pure function over
//! (state, action) pairs. Views never mutate state directly; they
//! dispatch `Action` values through the store and re-render from the
//! result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::models::{AddOnSelection, Guide, Trail, UserProfile};

// ============================================================================
// Pages
// ============================================================================

/// Logical page being displayed.
///
/// Navigation is unvalidated: an unrecognized page id is stored as-is in
/// `Other` and the render layer falls back to the home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Home,
    Trails,
    TrailDetail,
    TrailMap,
    AiGuide,
    Community,
    Gear,
    Parks,
    GuideSelection,
    BookingDates,
    BookingAddons,
    BookingConfirmation,
    Other(String),
}

impl Page {
    pub fn from_id(id: &str) -> Self {
        match id {
            "home" => Page::Home,
            "trails" => Page::Trails,
            "trail-detail" => Page::TrailDetail,
            "trail-map" => Page::TrailMap,
            "ai-guide" => Page::AiGuide,
            "community" => Page::Community,
            "gear" => Page::Gear,
            "parks" => Page::Parks,
            "guide-selection" => Page::GuideSelection,
            "booking-dates" => Page::BookingDates,
            "booking-addons" => Page::BookingAddons,
            "booking-confirmation" => Page::BookingConfirmation,
            other => Page::Other(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Page::Home => "home",
            Page::Trails => "trails",
            Page::TrailDetail => "trail-detail",
            Page::TrailMap => "trail-map",
            Page::AiGuide => "ai-guide",
            Page::Community => "community",
            Page::Gear => "gear",
            Page::Parks => "parks",
            Page::GuideSelection => "guide-selection",
            Page::BookingDates => "booking-dates",
            Page::BookingAddons => "booking-addons",
            Page::BookingConfirmation => "booking-confirmation",
            Page::Other(id) => id,
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================================
// Booking
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    #[default]
    Draft,
    Confirmed,
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Draft => write!(f, "draft"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The one mutable aggregate: an in-progress or completed trek
/// reservation. Owned exclusively by `AppState`; populated
/// incrementally by its own actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub trail: Option<Trail>,
    pub guide: Option<Guide>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub group_size: u32,
    pub add_ons: Vec<AddOnSelection>,
    pub booking_id: Option<String>,
    pub status: BookingStatus,
}

impl Default for Booking {
    fn default() -> Self {
        Self {
            trail: None,
            guide: None,
            start_date: None,
            end_date: None,
            group_size: 1,
            add_ons: Vec::new(),
            booking_id: None,
            status: BookingStatus::Draft,
        }
    }
}

impl Booking {
    /// True once trail, guide, and both dates are chosen. The
    /// confirmation page refuses to proceed without these.
    pub fn is_ready_to_confirm(&self) -> bool {
        self.trail.is_some()
            && self.guide.is_some()
            && self.start_date.is_some()
            && self.end_date.is_some()
    }
}

// ============================================================================
// Application state
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub current_page: Page,
    pub search_query: String,
    /// Trail being browsed in detail views. Independent of
    /// `booking.trail`: navigating sets this one, starting a booking
    /// copies from it.
    pub selected_trail: Option<Trail>,
    /// Bookmarked trail ids, in bookmark order
    pub bookmarks: Vec<String>,
    pub user: Option<UserProfile>,
    pub booking: Booking,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_page: Page::Home,
            search_query: String::new(),
            selected_trail: None,
            bookmarks: Vec::new(),
            user: None,
            booking: Booking::default(),
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Every state transition the application can make.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    NavigateTo { page: Page, trail: Option<Trail> },
    SetSearchQuery(String),
    SetSelectedTrail(Trail),
    ToggleBookmark(String),
    SetUser(Option<UserProfile>),
    StartBooking { trail: Trail },
    SelectGuide(Guide),
    SetBookingDates { start: NaiveDate, end: NaiveDate },
    SetGroupSize(u32),
    ToggleAddOn { id: String, quantity: Option<u32> },
    ConfirmBooking { booking_id: String },
    CancelBooking,
    ResetBooking,
}

impl Action {
    /// Short tag for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Action::NavigateTo { .. } => "navigate_to",
            Action::SetSearchQuery(_) => "set_search_query",
            Action::SetSelectedTrail(_) => "set_selected_trail",
            Action::ToggleBookmark(_) => "toggle_bookmark",
            Action::SetUser(_) => "set_user",
            Action::StartBooking { .. } => "start_booking",
            Action::SelectGuide(_) => "select_guide",
            Action::SetBookingDates { .. } => "set_booking_dates",
            Action::SetGroupSize(_) => "set_group_size",
            Action::ToggleAddOn { .. } => "toggle_add_on",
            Action::ConfirmBooking { .. } => "confirm_booking",
            Action::CancelBooking => "cancel_booking",
            Action::ResetBooking => "reset_booking",
        }
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Compute the next application state. Pure and total: no I/O, no
/// side effects, and every action produces a state (a `ToggleAddOn`
/// with an unknown id simply returns the state unchanged).
///
/// The input is consumed and a new value returned; callers never
/// observe intermediate mutation.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut next = state;
    match action {
        Action::NavigateTo { page, trail } => {
            next.current_page = page;
            // A navigation payload may carry a trail for detail views;
            // without one the current selection is kept.
            if let Some(trail) = trail {
                next.selected_trail = Some(trail);
            }
        }

        Action::SetSearchQuery(query) => next.search_query = query,

        Action::SetSelectedTrail(trail) => next.selected_trail = Some(trail),

        Action::ToggleBookmark(trail_id) => {
            match next.bookmarks.iter().position(|id| *id == trail_id) {
                Some(pos) => {
                    next.bookmarks.remove(pos);
                }
                None => next.bookmarks.push(trail_id),
            }
        }

        Action::SetUser(user) => next.user = user,

        // A new booking never carries over a prior booking's selections:
        // everything resets, then the chosen trail and a fresh add-on
        // overlay are applied.
        Action::StartBooking { trail } => {
            next.booking = Booking {
                trail: Some(trail),
                add_ons: catalog::default_add_ons(),
                ..Booking::default()
            };
        }

        Action::SelectGuide(guide) => next.booking.guide = Some(guide),

        // No ordering validation here; the view validates before dispatch.
        Action::SetBookingDates { start, end } => {
            next.booking.start_date = Some(start);
            next.booking.end_date = Some(end);
        }

        // Bounds are the caller's concern.
        Action::SetGroupSize(size) => next.booking.group_size = size,

        Action::ToggleAddOn { id, quantity } => {
            for sel in &mut next.booking.add_ons {
                if sel.add_on.id == id {
                    sel.selected = !sel.selected;
                    sel.quantity = quantity.unwrap_or(sel.quantity).max(1);
                }
            }
        }

        // Permissive by contract: a second confirmation overwrites the
        // booking id rather than being rejected.
        Action::ConfirmBooking { booking_id } => {
            next.booking.booking_id = Some(booking_id);
            next.booking.status = BookingStatus::Confirmed;
        }

        Action::CancelBooking => next.booking.status = BookingStatus::Cancelled,

        Action::ResetBooking => next.booking = Booking::default(),
    }
    next
}
