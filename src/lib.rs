//! paintbox provides the value types a 2D rendering layer needs to color and
//! position shapes: a [`Color`] that parses and formats the hex, RGB, HSB and
//! HSL notations, and an affine [`Transform`].

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
mod test;

mod color;
mod convert;
mod error;
mod math;
mod matrix;
pub mod models;
mod named;
mod parse;
mod transform;

pub use color::{Color, Component};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use named::NAMED_COLORS;
pub use parse::Format;
pub use transform::Transform;
