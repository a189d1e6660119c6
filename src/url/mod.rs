//! URL handling module
//!
//! Normalizes caller-supplied page URLs before fetching.

mod normalize;

pub use normalize::normalize_url;
