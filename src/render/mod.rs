//! View derivation modules

pub mod projection;
pub mod screen;

// Re-export commonly used items for convenience
pub use projection::{
    auction_rows, availability, last_call_by_seat, seat_on_turn, Availability, AuctionRow,
    LastCalls,
};
pub use screen::render_screen;
