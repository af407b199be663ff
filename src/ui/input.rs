//! Command parsing and dispatch.
//!
//! This module translates typed commands into application state
//! changes. Validation the reducer deliberately does not do — group
//! size bounds, date parsing and ordering, prerequisite checks before
//! confirmation — happens here, before dispatch.

use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use crate::app::Page;
use crate::catalog;
use crate::config::Config;
use crate::sim::{ChatGuide, GpsTracker, PaymentError, PaymentProcessor};
use crate::store::Store;

use super::render;

/// Number of live fixes printed per `gps` command
const GPS_FIXES_PER_VIEW: usize = 3;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Trails,
    Guides,
    AddOns,
    Open(String),
    Bookmark(String),
    Search(String),
    Goto(String),
    Book,
    Guide(String),
    Dates(String, String),
    Group(String),
    Addon(String, Option<String>),
    Summary,
    Confirm,
    Cancel,
    Reset,
    Chat(String),
    Gps,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line. Returns None for blank lines.
pub fn parse(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (head, tail) = match trimmed.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (trimmed, ""),
    };
    let args: Vec<&str> = tail.split_whitespace().collect();

    let command = match head {
        "trails" => Command::Trails,
        "guides" => Command::Guides,
        "addons" => Command::AddOns,
        "open" => Command::Open(tail.to_string()),
        "bookmark" => Command::Bookmark(tail.to_string()),
        "search" => Command::Search(tail.to_string()),
        "goto" => Command::Goto(tail.to_string()),
        "book" => Command::Book,
        "guide" => Command::Guide(tail.to_string()),
        "dates" => match args.as_slice() {
            [start, end] => Command::Dates(start.to_string(), end.to_string()),
            _ => Command::Unknown("dates takes exactly two arguments".to_string()),
        },
        "group" => Command::Group(tail.to_string()),
        "addon" => match args.as_slice() {
            [id] => Command::Addon(id.to_string(), None),
            [id, qty] => Command::Addon(id.to_string(), Some(qty.to_string())),
            _ => Command::Unknown("addon takes an id and optional quantity".to_string()),
        },
        "summary" | "total" => Command::Summary,
        "confirm" => Command::Confirm,
        "cancel" => Command::Cancel,
        "reset" => Command::Reset,
        "chat" => Command::Chat(tail.to_string()),
        "gps" => Command::Gps,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };
    Some(command)
}

/// Execute a command against the store. Returns true if the app
/// should quit.
pub async fn handle_command(
    store: &mut Store,
    config: &Config,
    chat: &mut ChatGuide,
    command: Command,
) -> Result<bool> {
    match command {
        Command::Trails => {
            render::print_trails(&catalog::trails(), &store.state().bookmarks);
        }

        Command::Guides => {
            render::print_guides(&catalog::guides());
        }

        Command::AddOns => {
            let state = store.state();
            if state.booking.trail.is_none() {
                // Add-ons only exist on a booking; offer the templates instead
                println!("No active booking; showing the catalog templates.");
                render::print_add_on_templates(&catalog::add_on_templates());
            } else {
                render::print_add_ons(&state.booking.add_ons);
            }
        }

        Command::Open(id) => match catalog::find_trail(&id) {
            Some(trail) => {
                render::print_trail_detail(&trail);
                store.navigate_to(Page::TrailDetail, Some(trail));
            }
            None => println!("Trail not found: {}. Try `trails` for the list.", id),
        },

        Command::Bookmark(id) => {
            if catalog::find_trail(&id).is_none() {
                println!("Trail not found: {}", id);
            } else {
                store.toggle_bookmark(&id);
                let marked = store.state().bookmarks.iter().any(|b| *b == id);
                println!(
                    "{} {}",
                    if marked { "Bookmarked" } else { "Removed bookmark for" },
                    id
                );
            }
        }

        Command::Search(query) => {
            store.set_search_query(&query);
            let matches: Vec<_> = catalog::trails()
                .into_iter()
                .filter(|t| {
                    let q = query.to_lowercase();
                    t.name.to_lowercase().contains(&q) || t.location.to_lowercase().contains(&q)
                })
                .collect();
            render::print_trails(&matches, &store.state().bookmarks);
        }

        Command::Goto(page_id) => {
            // Unvalidated by design: an unknown id is stored as-is and
            // renders as the home view.
            store.navigate_to(Page::from_id(&page_id), None);
            render::print_page(store.state());
        }

        Command::Book => match store.state().selected_trail.clone() {
            Some(trail) => {
                println!("Booking started for {}.", trail.name);
                store.start_booking(trail);
                store.navigate_to(Page::GuideSelection, None);
                render::print_guides(&catalog::guides());
            }
            None => println!("Open a trail first (`open <trail-id>`), then `book`."),
        },

        Command::Guide(id) => {
            if store.state().booking.trail.is_none() {
                println!("Booking information not found. Start with `book`.");
            } else {
                match catalog::find_guide(&id) {
                    Some(guide) => {
                        println!("Guide selected: {} ({}/day).", guide.name, guide.price_per_day);
                        store.select_guide(guide);
                        store.navigate_to(Page::BookingDates, None);
                    }
                    None => println!("Guide not found: {}. Try `guides`.", id),
                }
            }
        }

        Command::Dates(start_raw, end_raw) => {
            match (parse_date(&start_raw), parse_date(&end_raw)) {
                (Some(start), Some(end)) => {
                    if end < start {
                        println!("End date must not be before the start date.");
                    } else {
                        store.set_booking_dates(start, end);
                        store.navigate_to(Page::BookingAddons, None);
                        render::print_booking_summary(store.state(), store.calculate_total());
                    }
                }
                _ => println!("Dates must be YYYY-MM-DD, e.g. `dates 2025-01-25 2025-01-29`."),
            }
        }

        Command::Group(raw) => match raw.parse::<u32>() {
            Ok(n) if (1..=config.max_group_size).contains(&n) => {
                store.set_group_size(n);
                println!("Group size set to {}.", n);
            }
            _ => println!("Group size must be between 1 and {}.", config.max_group_size),
        },

        Command::Addon(id, qty_raw) => {
            let quantity = match qty_raw {
                Some(raw) => match raw.parse::<u32>() {
                    Ok(q) if q >= 1 => Some(q),
                    _ => {
                        println!("Quantity must be a positive integer.");
                        return Ok(false);
                    }
                },
                None => None,
            };
            let known = store
                .state()
                .booking
                .add_ons
                .iter()
                .any(|sel| sel.add_on.id == id);
            if !known {
                println!("No such add-on on this booking: {}. Try `addons`.", id);
            } else {
                store.toggle_add_on(&id, quantity);
                render::print_add_ons(&store.state().booking.add_ons);
            }
        }

        Command::Summary => {
            render::print_booking_summary(store.state(), store.calculate_total());
        }

        Command::Confirm => {
            if !store.state().booking.is_ready_to_confirm() {
                println!(
                    "Booking information not found. Choose a trail, guide, and dates first."
                );
                return Ok(false);
            }

            let total = store.calculate_total();
            println!("Processing payment of {}...", crate::utils::format_rupees(total));

            let processor =
                PaymentProcessor::new(Duration::from_millis(config.payment_delay_ms));
            let (_cancel_tx, cancel_rx) = oneshot::channel();
            match processor.process(total, cancel_rx).await {
                Ok(receipt) => {
                    let booking_id = store.confirm_booking();
                    store.navigate_to(Page::BookingConfirmation, None);
                    render::print_confirmation(store.state(), &booking_id, &receipt);
                }
                Err(PaymentError::Cancelled) => {
                    warn!("payment cancelled, booking left in draft");
                    println!("Payment cancelled; the booking is still a draft.");
                }
            }
        }

        Command::Cancel => {
            store.cancel_booking();
            println!("Booking cancelled.");
        }

        Command::Reset => {
            store.reset_booking();
            println!("Booking reset.");
        }

        Command::Chat(question) => {
            if question.is_empty() {
                println!("{}", crate::sim::chat::GREETING);
                println!("\nTry asking:");
                for (label, prompt) in crate::sim::chat::QUICK_ACTIONS {
                    println!("  {:<20} chat {}", label, prompt);
                }
            } else {
                println!("Adventuro AI: {}", chat.respond(&question));
            }
        }

        Command::Gps => {
            render::print_trail_markers();
            println!("Live tracking ({} fixes):", GPS_FIXES_PER_VIEW);
            let (tx, mut rx) = mpsc::channel(4);
            let (_stop_tx, stop_rx) = oneshot::channel();
            tokio::spawn(GpsTracker::new().stream(
                Duration::from_secs(config.gps_tick_seconds),
                tx,
                stop_rx,
            ));
            for _ in 0..GPS_FIXES_PER_VIEW {
                match rx.recv().await {
                    Some(fix) => render::print_gps_fix(&fix),
                    None => break,
                }
            }
            // _stop_tx drops here, which stops the tracker task
        }

        Command::Help => render::print_help(),

        Command::Quit => return Ok(true),

        Command::Unknown(what) => {
            println!("Unrecognized input: {}. Type `help` for commands.", what);
        }
    }

    Ok(false)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
