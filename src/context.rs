use crate::model::{Seat, SessionSnapshot};
use crate::render::Availability;

/// Holder for the client's only mutable state: the last snapshot
/// received from the server, the seat bids are entered for, and the
/// sticky status message. All view derivation reads from here; the
/// core components themselves stay pure.
#[derive(Debug, Default)]
pub struct SessionContext {
    snapshot: Option<SessionSnapshot>,
    selected_seat: Option<Seat>,
    message: String,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.snapshot.as_ref().map(|s| s.id.as_str())
    }

    pub fn selected_seat(&self) -> Option<Seat> {
        self.selected_seat
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the snapshot wholesale and pre-select the seat on turn.
    /// An explicit `select_seat` call sticks only until the next
    /// snapshot arrives.
    pub fn install(&mut self, snapshot: SessionSnapshot) {
        self.selected_seat = Some(snapshot.seat_on_turn());
        self.snapshot = Some(snapshot);
    }

    pub fn select_seat(&mut self, seat: Seat) {
        self.selected_seat = Some(seat);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Fold an availability result into the sticky message: a new
    /// message replaces the old one, the quiet state keeps it.
    pub fn apply_availability(&mut self, availability: &Availability) {
        if let Some(message) = &availability.message {
            self.message = message.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    fn snapshot(on_turn: &str) -> SessionSnapshot {
        serde_json::from_str(&format!(
            r#"{{"id":"t","dealer":"{on_turn}","auction":[]}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_install_preselects_the_seat_on_turn() {
        let mut ctx = SessionContext::new();
        assert_eq!(ctx.selected_seat(), None);

        ctx.install(snapshot("East"));
        assert_eq!(ctx.selected_seat(), Some(Seat::East));
        assert_eq!(ctx.session_id(), Some("t"));
    }

    #[test]
    fn test_explicit_seat_choice_lasts_until_next_snapshot() {
        let mut ctx = SessionContext::new();
        ctx.install(snapshot("North"));
        ctx.select_seat(Seat::South);
        assert_eq!(ctx.selected_seat(), Some(Seat::South));

        ctx.install(snapshot("East"));
        assert_eq!(ctx.selected_seat(), Some(Seat::East));
    }

    #[test]
    fn test_quiet_availability_keeps_the_sticky_message() {
        let mut ctx = SessionContext::new();
        ctx.install(snapshot("North"));
        ctx.set_message("it's North's turn");

        // Empty input: the gate is quiet, the message survives.
        let quiet = render::availability(ctx.snapshot(), Seat::North, "");
        ctx.apply_availability(&quiet);
        assert_eq!(ctx.message(), "it's North's turn");

        // A real denial replaces it.
        let denied = render::availability(ctx.snapshot(), Seat::East, "1C");
        ctx.apply_availability(&denied);
        assert!(ctx.message().contains("North"));
    }
}
