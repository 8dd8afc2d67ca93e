use crate::gate::{self, Verdict};
use crate::model::{Call, Seat, SessionSnapshot};

/// Most recent call by each seat. Seats that have not spoken hold None
/// and render as a dash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LastCalls {
    pub north: Option<Call>,
    pub east: Option<Call>,
    pub south: Option<Call>,
    pub west: Option<Call>,
}

impl LastCalls {
    pub fn call(&self, seat: Seat) -> Option<&Call> {
        match seat {
            Seat::North => self.north.as_ref(),
            Seat::East => self.east.as_ref(),
            Seat::South => self.south.as_ref(),
            Seat::West => self.west.as_ref(),
        }
    }

    fn set(&mut self, seat: Seat, call: Call) {
        match seat {
            Seat::North => self.north = Some(call),
            Seat::East => self.east = Some(call),
            Seat::South => self.south = Some(call),
            Seat::West => self.west = Some(call),
        }
    }
}

/// Scan the auction in submission order, keeping each seat's latest
/// call. Makes no assumption about the auction's length or which seat
/// it ends on.
pub fn last_call_by_seat(snapshot: &SessionSnapshot) -> LastCalls {
    let mut last = LastCalls::default();
    for entry in &snapshot.auction {
        match entry.call() {
            Some(call) => last.set(entry.position, call),
            None => log::debug!("skipping undecodable auction entry for {}", entry.position),
        }
    }
    last
}

/// One line of the auction log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionRow {
    pub seat: Seat,
    pub call: String,
}

/// The auction in submission order with canonical call rendering. An
/// empty result means a genuinely empty auction; the caller decides
/// how to show the placeholder, so four passes are distinguishable
/// from no bids at all.
pub fn auction_rows(snapshot: &SessionSnapshot) -> Vec<AuctionRow> {
    snapshot
        .auction
        .iter()
        .filter_map(|entry| match entry.call() {
            Some(call) => Some(AuctionRow {
                seat: entry.position,
                call: call.to_string(),
            }),
            None => {
                log::debug!("skipping undecodable auction entry for {}", entry.position);
                None
            }
        })
        .collect()
}

/// The seat expected to act next, if a session exists. The wire field
/// backing this is named "dealer" but tracks the turn, not the deal.
pub fn seat_on_turn(snapshot: Option<&SessionSnapshot>) -> Option<Seat> {
    snapshot.map(|s| s.seat_on_turn())
}

/// Render-ready form of a gate verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub disabled: bool,
    pub message: Option<String>,
}

impl Availability {
    /// The message to show, carrying the previous one forward when the
    /// gate had nothing to say (the quiet empty-input state).
    pub fn message_or<'a>(&'a self, previous: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(previous)
    }
}

/// Thin composition over the turn gate for input styling.
pub fn availability(snapshot: Option<&SessionSnapshot>, seat: Seat, raw: &str) -> Availability {
    let Verdict { allowed, reason } = gate::evaluate(snapshot, seat, raw);
    Availability {
        disabled: !allowed,
        message: reason,
    }
}
