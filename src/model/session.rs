use serde::Deserialize;

use super::call::{Call, Strain};
use super::seat::Seat;

/// One accepted call as the server reports it. Exactly one of the
/// `pass`/`double`/`redouble` flags or the `level`+`strain` pair is
/// meaningful; the server pads the unused fields with zero values, so
/// the flags must be consulted before `level`/`strain`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuctionEntry {
    pub position: Seat,
    #[serde(default)]
    pub pass: bool,
    #[serde(default)]
    pub double: bool,
    #[serde(default)]
    pub redouble: bool,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub strain: String,
}

impl AuctionEntry {
    /// Decode the wire flags into a canonical call, or None when the
    /// entry carries neither a flag nor a usable level/strain pair.
    pub fn call(&self) -> Option<Call> {
        if self.pass {
            return Some(Call::Pass);
        }
        if self.redouble {
            return Some(Call::Redouble);
        }
        if self.double {
            return Some(Call::Double);
        }
        if !(1..=7).contains(&self.level) {
            return None;
        }
        let strain = Strain::parse(&self.strain)?;
        Some(Call::Bid {
            level: self.level,
            strain,
        })
    }
}

/// Hand summary for one player. Display data only; the suit strings
/// are shown exactly as the server sent them.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSummary {
    pub position: Seat,
    #[serde(default)]
    pub hcp: u8,
    #[serde(default)]
    pub spades: String,
    #[serde(default)]
    pub hearts: String,
    #[serde(default)]
    pub diamonds: String,
    #[serde(default)]
    pub clubs: String,
}

/// The full server-reported state of one auction session. Replaced
/// wholesale on every successful response; never mutated locally.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSnapshot {
    pub id: String,
    /// Wire name kept from the server; the value means "seat to act
    /// next", not the seat that dealt the board.
    pub dealer: Seat,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
    #[serde(default)]
    pub auction: Vec<AuctionEntry>,
}

impl SessionSnapshot {
    pub fn seat_on_turn(&self) -> Seat {
        self.dealer
    }
}

/// Tutor feedback on a candidate bid.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidAdvice {
    pub is_recommended: bool,
    pub recommended_bid: String,
    #[serde(default)]
    pub explanation: Option<String>,
}
