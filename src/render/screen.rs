use std::fmt::Write as _;

use crate::model::{Seat, SessionSnapshot, Strain};

use super::projection;

/// Placeholder shown when the auction has no entries yet.
pub const NO_BIDS_PLACEHOLDER: &str = "(no bids yet)";

/// Assemble the whole screen as one string: header, hand summaries,
/// auction log, per-seat last calls, and the status line. Derived from
/// scratch on every call; nothing is patched incrementally.
pub fn render_screen(
    snapshot: Option<&SessionSnapshot>,
    selected_seat: Option<Seat>,
    message: &str,
) -> String {
    let mut out = String::new();

    match snapshot {
        None => {
            out.push_str("No active session. Type `new` to deal one.\n");
        }
        Some(s) => {
            out.push_str(&header_block(s));
            out.push('\n');
            out.push_str(&players_block(s));
            out.push_str(&auction_block(s));
            out.push('\n');
            out.push_str(&last_calls_block(s));
        }
    }

    if let Some(seat) = selected_seat {
        let _ = writeln!(out, "\nBidding as {}", seat);
    }
    if !message.is_empty() {
        let _ = writeln!(out, "* {}", message);
    }

    out
}

fn header_block(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Session {}", snapshot.id);
    if snapshot.complete {
        out.push_str("Auction complete\n");
    } else {
        let _ = writeln!(out, "On turn: {}", snapshot.seat_on_turn());
    }
    out
}

fn players_block(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    for player in &snapshot.players {
        let _ = writeln!(out, "{} ({} HCP)", player.position, player.hcp);
        let _ = writeln!(out, "  {} {}", Strain::Spades.symbol(), player.spades);
        let _ = writeln!(out, "  {} {}", Strain::Hearts.symbol(), player.hearts);
        let _ = writeln!(out, "  {} {}", Strain::Diamonds.symbol(), player.diamonds);
        let _ = writeln!(out, "  {} {}", Strain::Clubs.symbol(), player.clubs);
        out.push('\n');
    }
    out
}

/// The auction log in submission order, or the explicit placeholder
/// when no bids have been made.
pub fn auction_block(snapshot: &SessionSnapshot) -> String {
    let mut out = String::from("Auction:\n");
    let rows = projection::auction_rows(snapshot);
    if rows.is_empty() {
        let _ = writeln!(out, "  {}", NO_BIDS_PLACEHOLDER);
        return out;
    }
    for row in rows {
        let _ = writeln!(out, "  {:<5}  {}", row.seat, row.call);
    }
    out
}

/// One line summarizing each seat's most recent call, dash for seats
/// that have not spoken.
pub fn last_calls_block(snapshot: &SessionSnapshot) -> String {
    let last = projection::last_call_by_seat(snapshot);
    let mut parts = Vec::with_capacity(4);
    for seat in Seat::ALL {
        let shown = match last.call(seat) {
            Some(call) => call.to_string(),
            None => "-".to_string(),
        };
        parts.push(format!("{} {}", seat.letter(), shown));
    }
    format!("Last calls: {}\n", parts.join("   "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(json: &str) -> SessionSnapshot {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_auction_shows_placeholder() {
        let s = snapshot(r#"{"id":"t","dealer":"North","auction":[]}"#);
        let block = auction_block(&s);
        assert!(block.contains(NO_BIDS_PLACEHOLDER));
    }

    #[test]
    fn test_passed_out_auction_shows_passes_not_placeholder() {
        let s = snapshot(
            r#"{"id":"t","dealer":"North","complete":true,"auction":[
                {"position":"North","pass":true},
                {"position":"East","pass":true},
                {"position":"South","pass":true},
                {"position":"West","pass":true}
            ]}"#,
        );
        let block = auction_block(&s);
        assert!(!block.contains(NO_BIDS_PLACEHOLDER));
        assert_eq!(block.matches("Pass").count(), 4);
    }

    #[test]
    fn test_last_calls_line_uses_dash_for_silent_seats() {
        let s = snapshot(
            r#"{"id":"t","dealer":"East","auction":[
                {"position":"North","level":1,"strain":"C"}
            ]}"#,
        );
        let line = last_calls_block(&s);
        assert!(line.contains("N 1C"));
        assert!(line.contains("E -"));
        assert!(line.contains("S -"));
        assert!(line.contains("W -"));
    }

    #[test]
    fn test_screen_without_session() {
        let screen = render_screen(None, None, "");
        assert!(screen.contains("No active session"));
    }

    #[test]
    fn test_screen_carries_message_and_seat() {
        let s = snapshot(r#"{"id":"t","dealer":"North","auction":[]}"#);
        let screen = render_screen(Some(&s), Some(Seat::North), "it's North's turn");
        assert!(screen.contains("Bidding as North"));
        assert!(screen.contains("it's North's turn"));
    }

    #[test]
    fn test_complete_session_header() {
        let s = snapshot(r#"{"id":"t","dealer":"North","complete":true,"auction":[]}"#);
        let screen = render_screen(Some(&s), None, "");
        assert!(screen.contains("Auction complete"));
        assert!(!screen.contains("On turn"));
    }
}
