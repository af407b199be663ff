//! State snapshot printing.
//!
//! Every function here is a pure consumer: it reads state (or catalog
//! slices) and writes lines to stdout. No dispatching, no mutation.

use crate::app::{AppState, BookingStatus, Page};
use crate::models::{AddOn, AddOnSelection, Guide, Trail};
use crate::pricing;
use crate::sim::gps::{GpsFix, KEDARKANTHA_MARKERS};
use crate::sim::payment::PaymentReceipt;
use crate::utils::{format_date_range, format_rupees, truncate};

pub fn print_help() {
    println!(
        "\
Commands:
  trails                      list the trail catalog
  open <trail-id>             show a trail and select it
  bookmark <trail-id>         toggle a bookmark
  search <text>               filter trails by name or location
  goto <page-id>              navigate to a page
  book                        start a booking for the selected trail
  guides                      list available guides
  guide <guide-id>            choose a guide for the booking
  dates <start> <end>         set trek dates (YYYY-MM-DD)
  group <n>                   set the group size
  addons                      list add-ons on the booking
  addon <id> [quantity]       toggle an add-on
  summary | total             show the booking and its price
  confirm                     pay and confirm the booking
  cancel                      cancel the booking
  reset                       discard the booking entirely
  chat [question]             ask the AI trekking guide
  gps                         show simulated live tracking
  quit                        exit"
    );
}

pub fn print_trails(trails: &[Trail], bookmarks: &[String]) {
    if trails.is_empty() {
        println!("No trails match.");
        return;
    }
    for trail in trails {
        let mark = if bookmarks.iter().any(|b| *b == trail.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:<18} {:<22} {:<9} {:>6} {:>8}  {}  {}",
            mark,
            trail.id,
            truncate(&trail.name, 22),
            trail.difficulty.to_string(),
            trail.distance,
            trail.duration,
            trail.price_hint,
            trail.best_time,
        );
    }
}

pub fn print_trail_detail(trail: &Trail) {
    println!("{} — {}", trail.name, trail.location);
    println!(
        "  {} | {} | {} | up to {}",
        trail.difficulty, trail.distance, trail.duration, trail.elevation
    );
    println!(
        "  {:.1}★ ({} reviews) | from {} | best {}",
        trail.rating, trail.reviews, trail.price_hint, trail.best_time
    );
    println!("  {}", trail.features.join(" · "));
}

pub fn print_guides(guides: &[Guide]) {
    for guide in guides {
        println!(
            "  {:<14} {:<14} {:<24} {:.1}★ ({:>3})  {}/day",
            guide.id,
            guide.name,
            guide.experience,
            guide.rating,
            guide.reviews,
            format_rupees(guide.price_per_day),
        );
        println!(
            "     speaks {} | {}",
            guide.languages_display(),
            guide.specialties.join(", ")
        );
    }
}

pub fn print_add_on_templates(templates: &[AddOn]) {
    for addon in templates {
        println!(
            "  {:<14} {:<26} {:>8} {}  [{}]",
            addon.id,
            truncate(&addon.name, 26),
            format_rupees(addon.price),
            addon.price_unit,
            addon.category,
        );
    }
}

pub fn print_add_ons(add_ons: &[AddOnSelection]) {
    for sel in add_ons {
        println!(
            "  [{}] {:<14} {:<26} {:>8} {} × {}",
            if sel.selected { "x" } else { " " },
            sel.add_on.id,
            truncate(&sel.add_on.name, 26),
            format_rupees(sel.add_on.price),
            sel.add_on.price_unit,
            sel.quantity,
        );
    }
}

/// Render the current page. Unknown page ids fall back to a home hint.
pub fn print_page(state: &AppState) {
    match &state.current_page {
        Page::TrailDetail => match &state.selected_trail {
            Some(trail) => print_trail_detail(trail),
            None => println!("No trail selected."),
        },
        Page::BookingConfirmation
        | Page::BookingAddons
        | Page::BookingDates
        | Page::GuideSelection => {
            print_booking_summary(state, pricing::calculate_total(&state.booking))
        }
        Page::Other(id) => {
            println!("Unknown page `{}`; showing home.", id);
            println!("Welcome to Adventuro. Type `trails` to start exploring.");
        }
        _ => println!(
            "[{}] Type `trails`, `chat`, or `gps` to explore.",
            state.current_page
        ),
    }
}

pub fn print_booking_summary(state: &AppState, total: u64) {
    let booking = &state.booking;
    let Some(trail) = &booking.trail else {
        println!("Booking information not found. Start with `book`.");
        return;
    };

    println!("Booking ({})", booking.status);
    println!("  Trail: {} — {}", trail.name, trail.location);
    match &booking.guide {
        Some(guide) => println!(
            "  Guide: {} at {}/day",
            guide.name,
            format_rupees(guide.price_per_day)
        ),
        None => println!("  Guide: not chosen"),
    }
    match (booking.start_date, booking.end_date) {
        (Some(start), Some(end)) => {
            println!(
                "  Dates: {} ({} days)",
                format_date_range(start, end),
                pricing::day_count(start, end)
            );
        }
        _ => println!("  Dates: not chosen"),
    }
    println!("  Group: {} people", booking.group_size);

    let selected: Vec<&AddOnSelection> =
        booking.add_ons.iter().filter(|s| s.selected).collect();
    if selected.is_empty() {
        println!("  Add-ons: none");
    } else {
        println!("  Add-ons:");
        for sel in selected {
            println!(
                "    {} × {} ({} {})",
                sel.add_on.name,
                sel.quantity,
                format_rupees(sel.add_on.price),
                sel.add_on.price_unit
            );
        }
    }

    println!(
        "  Guide subtotal: {}",
        format_rupees(pricing::guide_subtotal(booking))
    );
    println!(
        "  Add-on subtotal: {}",
        format_rupees(pricing::add_on_subtotal(booking))
    );
    println!("  Total: {}", format_rupees(total));
    if let Some(id) = &booking.booking_id {
        println!("  Booking ID: {}", id);
    }
}

pub fn print_confirmation(state: &AppState, booking_id: &str, receipt: &PaymentReceipt) {
    debug_assert_eq!(state.booking.status, BookingStatus::Confirmed);
    println!("Payment of {} received.", format_rupees(receipt.amount));
    println!("Booking confirmed! ID: {}", booking_id);
    if let Some(user) = &state.user {
        println!("A confirmation has been sent to {}.", user.email);
    }
    print_booking_summary(state, receipt.amount);
}

pub fn print_trail_markers() {
    println!("Kedarkantha route:");
    for marker in &KEDARKANTHA_MARKERS {
        println!(
            "  {:<20} {:?} at {:.4}, {:.4} ({} m)",
            marker.name, marker.kind, marker.lat, marker.lon, marker.elevation_m
        );
    }
}

pub fn print_gps_fix(fix: &GpsFix) {
    println!(
        "  {:.4}, {:.4} | {:.0} m | {:.1} km/h | {:.2} km | {} min",
        fix.lat, fix.lon, fix.elevation_m, fix.speed_kmh, fix.distance_km, fix.elapsed_min
    );
}
