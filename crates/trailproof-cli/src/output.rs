//! Output formatting utilities.

use trailproof::TrailEvent;

/// Formats an event as pretty JSON.
pub fn format_json(event: &TrailEvent) -> String {
    serde_json::to_string_pretty(event).unwrap_or_else(|_| "{}".to_string())
}

/// Formats an event as a simple table row.
pub fn format_table_row(event: &TrailEvent) -> String {
    format!(
        "{:<36} {:<28} {:<24} {}",
        event.event_id(),
        truncate(event.event_type(), 28),
        event.timestamp(),
        event.actor_id()
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<36} {:<28} {:<24} {}",
        "EVENT_ID", "TYPE", "TIMESTAMP", "ACTOR"
    );
    println!("{}", "-".repeat(100));
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
