pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod gate;
pub mod model;
pub mod parser;
pub mod render;

pub use api::SessionApi;
pub use config::Settings;
pub use context::SessionContext;
pub use error::{ApiError, ConfigError, GrammarError};
pub use gate::Verdict;
pub use model::{Call, Seat, SessionSnapshot, Strain};
pub use parser::{canonicalize, is_well_formed};

use render::availability;

/// High-level API for one full view derivation pass.
///
/// This is the recommended entry point for hosts embedding the
/// engine: given the last snapshot received from the server, the
/// selected seat, the current raw input, and the previously shown
/// status message, it runs the turn gate and the view projection and
/// returns the complete screen as a string. Calling it again with the
/// same inputs returns the same screen, so a host may re-derive on
/// every keystroke.
///
/// # Example
///
/// ```
/// use bridge_bid_console::{derive_screen, Seat};
///
/// // Before any session exists the screen shows the empty state.
/// let screen = derive_screen(None, Some(Seat::North), "", "");
/// assert!(screen.contains("No active session"));
/// ```
pub fn derive_screen(
    snapshot: Option<&SessionSnapshot>,
    seat: Option<Seat>,
    raw_input: &str,
    previous_message: &str,
) -> String {
    let message = match seat {
        Some(seat) => availability(snapshot, seat, raw_input)
            .message_or(previous_message)
            .to_string(),
        None => previous_message.to_string(),
    };
    render::render_screen(snapshot, seat, &message)
}
