//! Model a color with the HSB (hue, saturation, brightness) notation.

paintbox_macros::gen_model! {
    /// A color specified with the HSB notation. Saturation and brightness are
    /// percentages.
    pub struct Hsb {
        /// The hue in degrees, in `[0, 360)`.
        hue: u16,
        /// The saturation, in `[0, 100]`.
        saturation: u8,
        /// The brightness, in `[0, 100]`.
        brightness: u8,
    }
}
