//! Model a color with the RGB notation.

paintbox_macros::gen_model! {
    /// A color specified with red, green and blue channels.
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_omit_alpha() {
        assert_eq!(Rgb::new(255, 128, 0, 1.0).to_string(), "rgb(255, 128, 0)");
    }

    #[test]
    fn translucent_colors_use_the_alpha_keyword() {
        assert_eq!(
            Rgb::new(255, 128, 0, 0.5).to_string(),
            "rgba(255, 128, 0, 0.5)"
        );
        assert_eq!(Rgb::new(0, 0, 0, 0.0).to_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn to_array_keeps_alpha() {
        assert_eq!(Rgb::new(1, 2, 3, 1.0).to_array(), [1.0, 2.0, 3.0, 1.0]);
    }
}
