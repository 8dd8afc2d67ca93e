pub mod client;

pub use client::SessionApi;
