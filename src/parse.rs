//! Parse a [`Color`] from text or from structured components.
//!
//! Text is resolved in this order: the named color keywords, then an explicit
//! [`Format`] hint, then the leading `rgb`/`hsb`/`hsl` keyword, and finally hex.
//!
//! Numbers are never rejected for being out of range. RGB channels and hue
//! wrap around, while saturation, brightness, lightness and alpha are clamped.

use std::{fmt, str::FromStr};

use crate::{
    color::{Color, Component},
    error::{Error, Result},
    math::{limit, round_half_up, wrap},
    models::{Hsb, Hsl, Rgb},
    named,
};

/// The notations a [`Color`] can be parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// `#rgb`, `#rrggbb` or `#rrggbbaa`.
    Hex,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    Rgb,
    /// `hsb(h, s, b)` or `hsba(h, s, b, a)`.
    Hsb,
    /// `hsl(h, s, l)` or `hsla(h, s, l, a)`.
    Hsl,
}

impl Format {
    /// Detect the format of `input` from its leading keyword, ignoring case.
    /// Input without a known keyword is assumed to be hex.
    pub fn detect(input: &str) -> Self {
        let input = input.trim_start();
        [Self::Rgb, Self::Hsb, Self::Hsl]
            .into_iter()
            .find(|format| {
                input
                    .get(..3)
                    .is_some_and(|prefix| prefix.eq_ignore_ascii_case(format.keyword()))
            })
            .unwrap_or(Self::Hex)
    }

    /// The keyword of this format.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => Rgb::KEYWORD,
            Self::Hsb => Hsb::KEYWORD,
            Self::Hsl => Hsl::KEYWORD,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Color {
    /// Parse a color from text. When `format` is `None` it is detected from
    /// the text. Named color keywords are always parsed as hex.
    pub fn parse(input: &str, format: Option<Format>) -> Result<Self> {
        if let Some(hex) = named::lookup(input) {
            log::trace!("resolved color keyword {input:?} to {hex}");
            return Self::parse_as(hex, Format::Hex);
        }

        Self::parse_as(input, format.unwrap_or_else(|| Format::detect(input)))
    }

    /// Look up one of the named color keywords.
    pub fn from_named(name: &str) -> Option<Self> {
        named::lookup(name).and_then(parse_hex)
    }

    /// Parse a hex color, with or without the leading `#`.
    pub fn from_hex(input: &str) -> Result<Self> {
        Self::parse_as(input, Format::Hex)
    }

    /// Create a color from a number by reading its base-16 digits as hex
    /// text, e.g. `0xff8000`. The digits are not zero padded, so `0xabc` is
    /// the 3 digit shorthand `#abc` and numbers with 2 digits fail.
    pub fn from_hex_value(value: u32) -> Result<Self> {
        Self::from_hex(&format!("{value:x}"))
    }

    /// Create a color from 3 components and alpha in the given notation. The
    /// components go through the same wrapping and clamping as parsed text.
    /// Hex has no component form and always fails.
    pub fn from_tuple(format: Format, values: [Component; 4]) -> Result<Self> {
        let [c0, c1, c2, alpha] = values;
        match format {
            Format::Rgb => Ok(Self::rgb(c0, c1, c2, alpha)),
            Format::Hsb => Ok(Self::hsb(c0, c1, c2, alpha)),
            Format::Hsl => Ok(Self::hsl(c0, c1, c2, alpha)),
            Format::Hex => Err(Self::invalid(
                &values.map(|v| v.to_string()).join(","),
                format,
            )),
        }
    }

    /// Create a color from red, green and blue channels and alpha.
    pub fn rgb(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Fields::from_numbers(red, green, blue, alpha)
            .to_rgb()
            .to_color()
    }

    /// Create a color from hue, saturation, brightness and alpha.
    pub fn hsb(
        hue: Component,
        saturation: Component,
        brightness: Component,
        alpha: Component,
    ) -> Self {
        Fields::from_numbers(hue, saturation, brightness, alpha)
            .to_hsb()
            .to_color()
    }

    /// Create a color from hue, saturation, lightness and alpha.
    pub fn hsl(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Self {
        Fields::from_numbers(hue, saturation, lightness, alpha)
            .to_hsl()
            .to_color()
    }

    fn parse_as(input: &str, format: Format) -> Result<Self> {
        let color = match format {
            Format::Hex => parse_hex(input),
            Format::Rgb => Fields::parse(input, format).map(|f| f.to_rgb().to_color()),
            Format::Hsb => Fields::parse(input, format).map(|f| f.to_hsb().to_color()),
            Format::Hsl => Fields::parse(input, format).map(|f| f.to_hsl().to_color()),
        };
        color.ok_or_else(|| Self::invalid(input, format))
    }

    fn invalid(input: &str, format: Format) -> Error {
        log::debug!("could not parse {input:?} as a {format} color");
        Error::InvalidColorFormat {
            input: input.to_owned(),
            format,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

fn parse_hex(input: &str) -> Option<Color> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    // A single digit is shorthand for a gray: `#a` is `#aaa`.
    let digits = if digits.len() == 1 {
        digits.repeat(3)
    } else {
        digits.to_owned()
    };

    let [red, green, blue, alpha] = split_hex(&digits)?;
    let channel = |group: &str| {
        let group = if group.len() == 1 {
            group.repeat(2)
        } else {
            group.to_owned()
        };
        u8::from_str_radix(&group, 16).ok()
    };
    let alpha = if alpha.is_empty() {
        1.0
    } else {
        Component::from(u8::from_str_radix(alpha, 16).ok()?) / 255.0
    };

    Some(Color::new(channel(red)?, channel(green)?, channel(blue)?, alpha))
}

/// Split hex digits into red, green, blue and alpha groups. Each channel takes
/// two digits while enough remain for the channels after it, and alpha takes
/// whatever is left over, so `1234` reads as `12 3 4` with no alpha and
/// `1234567` carries the single alpha digit `7`.
fn split_hex(digits: &str) -> Option<[&str; 4]> {
    let len = digits.len();
    if !(3..=8).contains(&len) {
        return None;
    }

    let red = (len - 2).min(2);
    let green = (len - red - 1).min(2);
    let blue = (len - red - green).min(2);

    let (r, rest) = digits.split_at(red);
    let (g, rest) = rest.split_at(green);
    let (b, a) = rest.split_at(blue);
    Some([r, g, b, a])
}

/// A single number from a component list, e.g. `50%`.
#[derive(Clone, Copy, Debug)]
struct Field {
    value: Component,
    percent: bool,
}

impl Field {
    fn number(value: Component) -> Self {
        Self {
            value: if value.is_finite() { value } else { 0.0 },
            percent: false,
        }
    }

    fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (number, percent) = match text.strip_suffix('%') {
            Some(number) => (number, true),
            None => (text, false),
        };

        if !number
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == '.')
        {
            return None;
        }

        number.parse().ok().map(|value| Self { value, percent })
    }
}

/// The 3 components and optional alpha shared by the rgb, hsb and hsl
/// notations.
#[derive(Debug)]
struct Fields {
    components: [Field; 3],
    alpha: Option<Field>,
}

impl Fields {
    fn from_numbers(c0: Component, c1: Component, c2: Component, alpha: Component) -> Self {
        Self {
            components: [c0, c1, c2].map(Field::number),
            alpha: Some(Field::number(alpha)),
        }
    }

    /// Parse `a, b, c[, d]`, optionally wrapped in `keyword(...)` or
    /// `keyworda(...)`. An empty fourth field counts as no alpha.
    fn parse(input: &str, format: Format) -> Option<Self> {
        let input = input.trim();

        let body = match input.find('(') {
            Some(open) => {
                let keyword = input[..open].trim();
                let with_alpha = format!("{}a", format.keyword());
                if !(keyword.is_empty()
                    || keyword.eq_ignore_ascii_case(format.keyword())
                    || keyword.eq_ignore_ascii_case(&with_alpha))
                {
                    return None;
                }
                input[open + 1..].strip_suffix(')')?
            }
            None => input,
        };

        let parts = body.split(',').collect::<Vec<_>>();
        let (components, alpha) = match parts.as_slice() {
            [c0, c1, c2] => ([c0, c1, c2], None),
            [c0, c1, c2, alpha] if alpha.trim().is_empty() => ([c0, c1, c2], None),
            [c0, c1, c2, alpha] => ([c0, c1, c2], Some(Field::parse(alpha)?)),
            _ => return None,
        };

        let [c0, c1, c2] = components;
        Some(Self {
            components: [Field::parse(c0)?, Field::parse(c1)?, Field::parse(c2)?],
            alpha,
        })
    }

    fn alpha(&self) -> Component {
        self.alpha.map_or(1.0, |field| limit(field.value, 0.0, 1.0))
    }

    fn to_rgb(&self) -> Rgb {
        let [red, green, blue] = self.components.map(|field| {
            let value = if field.percent {
                field.value * 2.55
            } else {
                field.value
            };
            wrap(round_half_up(value), 256.0) as u8
        });
        Rgb::new(red, green, blue, self.alpha())
    }

    fn to_hsb(&self) -> Hsb {
        let [hue, saturation, brightness] = self.components;
        Hsb::new(
            wrap_hue(hue),
            percentage(saturation),
            percentage(brightness),
            self.alpha(),
        )
    }

    fn to_hsl(&self) -> Hsl {
        let [hue, saturation, lightness] = self.components;
        Hsl::new(
            wrap_hue(hue),
            percentage(saturation),
            percentage(lightness),
            self.alpha(),
        )
    }
}

fn wrap_hue(field: Field) -> u16 {
    wrap(round_half_up(field.value), 360.0) as u16
}

fn percentage(field: Field) -> u8 {
    limit(round_half_up(field.value), 0.0, 100.0) as u8
}
