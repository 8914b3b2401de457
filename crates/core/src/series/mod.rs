//! Client-side price-series transforms.
//!
//! The backend owns all indicator math; these transforms exist purely so the
//! chart can restyle and overlay the OHLCV data it already received.

mod ema;
mod heikin_ashi;
mod normalize;

pub use ema::ema;
pub use heikin_ashi::heikin_ashi;
pub use normalize::normalize;
