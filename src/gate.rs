use crate::model::{Seat, SessionSnapshot};
use crate::parser;

/// Shown when a token fails the grammar check.
pub const GRAMMAR_HINT: &str = "bids are 1C-7NT, Pass (p), X (dbl), or XX (rdbl)";

/// Local pre-flight decision on a proposed submission. The server
/// re-validates every bid and remains the legality authority; this
/// only catches what can be decided from the last snapshot alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl Verdict {
    fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }

    /// Not allowed, but nothing worth telling the user about yet
    /// (the input box is simply empty).
    fn quiet() -> Self {
        Self {
            allowed: false,
            reason: None,
        }
    }
}

/// Decide whether `seat` may submit `raw` right now.
///
/// Checks run in a fixed order so the reported reason never
/// contradicts a higher-priority condition: session existence, then
/// completion, then turn, then input presence, then format.
pub fn evaluate(snapshot: Option<&SessionSnapshot>, seat: Seat, raw: &str) -> Verdict {
    let snapshot = match snapshot {
        Some(s) => s,
        None => return Verdict::deny("no active session"),
    };

    if snapshot.complete {
        return Verdict::deny("auction is complete");
    }

    let on_turn = snapshot.seat_on_turn();
    if seat != on_turn {
        return Verdict::deny(format!("it's {}'s turn", on_turn));
    }

    if raw.trim().is_empty() {
        return Verdict::quiet();
    }

    if !parser::is_well_formed(raw) {
        return Verdict::deny(GRAMMAR_HINT);
    }

    Verdict::allow()
}
