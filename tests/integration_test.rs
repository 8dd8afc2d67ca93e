use std::fs;
use std::path::PathBuf;

use bridge_bid_console::model::{Call, Seat, SessionSnapshot, Strain};
use bridge_bid_console::render::{self, screen};
use bridge_bid_console::{derive_screen, gate};

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_snapshot(name: &str) -> SessionSnapshot {
    let path = fixtures_path().join(name);
    let content = fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&content).expect("Failed to decode snapshot")
}

#[test]
fn test_new_session_fixture_decodes() {
    let snapshot = load_snapshot("new_session.json");

    assert_eq!(snapshot.seat_on_turn(), Seat::North);
    assert!(!snapshot.complete);
    assert_eq!(snapshot.players.len(), 4);
    assert!(snapshot.auction.is_empty());

    // Every seat appears exactly once in the player list.
    for seat in Seat::ALL {
        assert_eq!(
            snapshot.players.iter().filter(|p| p.position == seat).count(),
            1,
            "missing hand summary for {seat}"
        );
    }
}

#[test]
fn test_gate_scenarios_on_fresh_session() {
    let snapshot = load_snapshot("new_session.json");

    let verdict = gate::evaluate(Some(&snapshot), Seat::North, "1C");
    assert!(verdict.allowed);
    assert_eq!(verdict.reason, None);

    let verdict = gate::evaluate(Some(&snapshot), Seat::East, "1C");
    assert!(!verdict.allowed);
    assert!(verdict.reason.unwrap().contains("North"));
}

#[test]
fn test_mid_auction_last_calls_keep_only_the_latest() {
    let snapshot = load_snapshot("mid_auction.json");

    // North opened 1C and later rebid 2NT; only the rebid survives.
    let last = render::last_call_by_seat(&snapshot);
    assert_eq!(
        last.call(Seat::North),
        Some(&Call::Bid {
            level: 2,
            strain: Strain::NoTrump
        })
    );
    assert_eq!(last.call(Seat::East), Some(&Call::Pass));
    assert_eq!(last.call(Seat::West), Some(&Call::Double));
}

#[test]
fn test_mid_auction_rows_render_canonically() {
    let snapshot = load_snapshot("mid_auction.json");

    let rows = render::auction_rows(&snapshot);
    let rendered: Vec<&str> = rows.iter().map(|r| r.call.as_str()).collect();
    assert_eq!(rendered, vec!["1C", "Pass", "1H", "X", "2NT"]);
    assert_eq!(rows[0].seat, Seat::North);
    assert_eq!(rows[4].seat, Seat::North);
}

#[test]
fn test_completed_session_outranks_seat_and_token() {
    let snapshot = load_snapshot("passed_out.json");

    // Even the seat on turn with a valid token is refused with the
    // completion reason, never a turn or format message.
    let verdict = gate::evaluate(Some(&snapshot), Seat::North, "1C");
    assert!(!verdict.allowed);
    assert_eq!(verdict.reason.as_deref(), Some("auction is complete"));
}

#[test]
fn test_passed_out_is_not_the_empty_placeholder() {
    let passed_out = load_snapshot("passed_out.json");
    let rows = render::auction_rows(&passed_out);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.call == "Pass"));

    let block = screen::auction_block(&passed_out);
    assert!(!block.contains(screen::NO_BIDS_PLACEHOLDER));

    let fresh = load_snapshot("new_session.json");
    let block = screen::auction_block(&fresh);
    assert!(block.contains(screen::NO_BIDS_PLACEHOLDER));
}

#[test]
fn test_screen_derivation_is_repeatable() {
    let snapshot = load_snapshot("mid_auction.json");

    let first = derive_screen(Some(&snapshot), Some(Seat::East), "1S", "old message");
    let second = derive_screen(Some(&snapshot), Some(Seat::East), "1S", "old message");
    assert_eq!(first, second);

    // The screen carries the hands and the auction.
    assert!(first.contains("A Q 7 3"));
    assert!(first.contains("2NT"));
}

#[test]
fn test_quiet_input_keeps_the_previous_message_on_screen() {
    let snapshot = load_snapshot("new_session.json");

    // North on turn, empty input: the sticky message survives.
    let screen = derive_screen(Some(&snapshot), Some(Seat::North), "", "New session created");
    assert!(screen.contains("New session created"));

    // A malformed token replaces it with the grammar hint.
    let screen = derive_screen(Some(&snapshot), Some(Seat::North), "8C", "New session created");
    assert!(!screen.contains("New session created"));
    assert!(screen.contains(gate::GRAMMAR_HINT));
}
