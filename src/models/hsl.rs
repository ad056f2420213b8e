//! Model a color with the HSL notation.

paintbox_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue in degrees, in `[0, 360)`.
        hue: u16,
        /// The saturation, in `[0, 100]`.
        saturation: u8,
        /// The lightness, in `[0, 100]`.
        lightness: u8,
    }
}
