pub mod bid;

pub use bid::{canonicalize, is_well_formed};
