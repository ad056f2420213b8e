//! A [`Color`] holds the canonical form every supported notation converts to
//! and from: 8-bit red, green and blue channels plus a floating point alpha.

use std::fmt;

use crate::math::limit;

/// A 64-bit floating point value that alpha and unrounded components are
/// stored as.
pub type Component = f64;

/// A color in canonical form.
///
/// ```rust
/// use paintbox::Color;
/// let c: Color = "hsl(120, 100%, 25%)".parse().unwrap();
/// assert_eq!(c.to_string(), "rgb(0, 128, 0)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Component,
}

impl Color {
    /// Create a new [`Color`]. Alpha is clamped into `[0, 1]`.
    pub fn new(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: limit(alpha, 0.0, 1.0),
        }
    }

    /// Create a new fully opaque [`Color`].
    pub fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Return the red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Return the green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Return the blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Return the alpha component, in `[0, 1]`.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Return true if alpha is exactly 1.
    pub fn is_opaque(&self) -> bool {
        self.alpha == 1.0
    }

    /// Return a copy of this color with a different alpha.
    pub fn with_alpha(&self, alpha: Component) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Split this color into its opaque RGB string and its alpha, for hosts
    /// that apply transparency separately from the paint.
    pub fn detach(&self) -> (String, Component) {
        (self.with_alpha(1.0).to_string(), self.alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_rgb(), f)
    }
}
