//! Model a color as hexadecimal bytes.

use std::fmt;

/// A color as 4 bytes, written as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hex {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha channel, `0xff` for fully opaque.
    pub alpha: u8,
}

impl Hex {
    /// Create a new hex color.
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Return each byte as 2 lower case hex digits. Unlike the string form,
    /// alpha is always included.
    pub fn to_digits(&self) -> [String; 4] {
        [self.red, self.green, self.blue, self.alpha].map(|byte| format!("{byte:02x}"))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if self.alpha != 0xff {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}
