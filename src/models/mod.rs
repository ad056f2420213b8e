//! Notation models a [`Color`](crate::Color) can be converted to.

mod hex;
mod hsb;
mod hsl;
mod rgb;

pub use hex::Hex;
pub use hsb::Hsb;
pub use hsl::Hsl;
pub use rgb::Rgb;
