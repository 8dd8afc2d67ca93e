pub mod call;
pub mod seat;
pub mod session;

pub use call::{Call, Strain};
pub use seat::Seat;
pub use session::{AuctionEntry, BidAdvice, PlayerSummary, SessionSnapshot};
