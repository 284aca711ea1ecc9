//! wpactl-test-harness: Listing fixtures and receive-window models for
//! testing wpactl decoders.
//!
//! This crate provides [`ListingBuilder`] for rendering daemon replies from
//! typed records or raw lines, [`ReceiveWindow`] for reproducing what a
//! fixed-size transport buffer hands to the decoder, and a few [`fixtures`].

pub mod fixtures;
pub mod listing;
pub mod window;

pub use listing::ListingBuilder;
pub use window::ReceiveWindow;
