//! Conversions between the canonical [`Color`] and the notation models.
//!
//! All notations are integer valued (hue in whole degrees, saturation,
//! brightness and lightness in whole percent), so a round trip through HSB or
//! HSL is only exact for colors that sit on that grid.

use crate::{
    color::Color,
    models::{Hex, Hsb, Hsl, Rgb},
};

impl Color {
    /// Return the channels of this color in the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Convert this color to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        let (min, max) = util::min_max(self);
        let delta = max - min;

        let saturation = if delta != 0.0 { delta / max } else { 0.0 };
        let brightness = max / 255.0;

        Hsb::new(
            util::degrees(util::hue(self, min, max)),
            util::percent(saturation),
            util::percent(brightness),
            self.alpha(),
        )
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let (min, max) = util::min_max(self);
        let delta = max - min;

        // Same as `chroma / (1 - |2L - 1|)`, kept on the 0-255 scale.
        let saturation = if delta != 0.0 {
            delta / (255.0 - (max + min - 255.0).abs())
        } else {
            0.0
        };
        let lightness = (max + min) / 512.0;

        Hsl::new(
            util::degrees(util::hue(self, min, max)),
            util::percent(saturation),
            util::percent(lightness),
            self.alpha(),
        )
    }

    /// Convert this color to hexadecimal bytes. Alpha is scaled to `[0, 255]`.
    pub fn to_hex(&self) -> Hex {
        Hex::new(
            self.red(),
            self.green(),
            self.blue(),
            util::channel(self.alpha() * 255.0),
        )
    }
}

impl Rgb {
    /// Convert this color to the canonical form.
    pub fn to_color(&self) -> Color {
        Color::new(self.red, self.green, self.blue, self.alpha)
    }
}

impl Hsb {
    /// Convert this color from the HSB notation to the canonical form.
    pub fn to_color(&self) -> Color {
        let [red, green, blue] = util::hsb_to_rgb(
            self.hue.into(),
            self.saturation.into(),
            self.brightness.into(),
        );
        Color::new(red, green, blue, self.alpha)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the canonical form.
    pub fn to_color(&self) -> Color {
        let [red, green, blue] = util::hsl_to_rgb(
            self.hue.into(),
            self.saturation.into(),
            self.lightness.into(),
        );
        Color::new(red, green, blue, self.alpha)
    }
}

impl Hex {
    /// Convert this color to the canonical form.
    pub fn to_color(&self) -> Color {
        Color::new(
            self.red,
            self.green,
            self.blue,
            f64::from(self.alpha) / 255.0,
        )
    }
}

mod util {
    use crate::{
        color::{Color, Component},
        math::{round_half_up, wrap},
    };

    pub fn min_max(color: &Color) -> (Component, Component) {
        let [red, green, blue] = channels(color);
        (red.min(green).min(blue), red.max(green).max(blue))
    }

    fn channels(color: &Color) -> [Component; 3] {
        [color.red(), color.green(), color.blue()].map(Component::from)
    }

    /// Calculate the hue as a fraction of a full turn, in `[0, 1)`. Colors
    /// without chroma have a hue of 0.
    pub fn hue(color: &Color, min: Component, max: Component) -> Component {
        let delta = max - min;
        if delta == 0.0 {
            return 0.0;
        }

        let [red, green, blue] = channels(color);
        let rr = (max - red) / delta;
        let gr = (max - green) / delta;
        let br = (max - blue) / delta;

        let sector = if red == max {
            br - gr
        } else if green == max {
            2.0 + rr - br
        } else {
            4.0 + gr - rr
        };

        let hue = sector / 6.0;
        if hue < 0.0 {
            hue + 1.0
        } else {
            hue
        }
    }

    /// Convert a fraction of a full turn to whole degrees in `[0, 360)`.
    pub fn degrees(turns: Component) -> u16 {
        wrap(round_half_up(turns * 360.0), 360.0) as u16
    }

    /// Convert a fraction in `[0, 1]` to a whole percentage.
    pub fn percent(fraction: Component) -> u8 {
        round_half_up(fraction * 100.0) as u8
    }

    /// Round a value to an 8-bit channel. Out of range values saturate.
    pub fn channel(value: Component) -> u8 {
        round_half_up(value) as u8
    }

    /// Convert from HSB notation to RGB channels.
    pub fn hsb_to_rgb(hue: Component, saturation: Component, brightness: Component) -> [u8; 3] {
        let br = channel(brightness / 100.0 * 255.0);
        if saturation == 0.0 {
            return [br, br, br];
        }

        let f = hue % 60.0;
        let p = channel(brightness * (100.0 - saturation) / 10000.0 * 255.0);
        let q = channel(brightness * (6000.0 - saturation * f) / 600000.0 * 255.0);
        let t = channel(brightness * (6000.0 - saturation * (60.0 - f)) / 600000.0 * 255.0);

        match (hue / 60.0).floor() as u8 {
            0 => [br, t, p],
            1 => [q, br, p],
            2 => [p, br, t],
            3 => [p, q, br],
            4 => [t, p, br],
            _ => [br, p, q],
        }
    }

    /// Convert from HSL notation to RGB channels.
    pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> [u8; 3] {
        let h = hue / 60.0;
        let s = saturation / 100.0;
        let l = lightness / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        let p = channel((chroma + m) * 255.0);
        let q = channel((x + m) * 255.0);
        let t = channel(m * 255.0);

        match h.floor() as u8 {
            0 => [p, q, t],
            1 => [q, p, t],
            2 => [t, p, q],
            3 => [t, q, p],
            4 => [q, t, p],
            _ => [p, t, q],
        }
    }
}
