//! Math utility functions.

use num_traits::Float;

fn half<T: Float>() -> T {
    T::one() / (T::one() + T::one())
}

/// Round to the nearest integer, with halves rounded up (towards positive
/// infinity).
pub fn round_half_up<T: Float>(value: T) -> T {
    (value + half()).floor()
}

/// Wrap `value` into `[0, modulus)`. Negative values wrap around instead of
/// being clamped.
pub fn wrap<T: Float>(value: T, modulus: T) -> T {
    let rem = value % modulus;
    if rem < T::zero() {
        rem + modulus
    } else {
        rem
    }
}

/// Clamp `value` into `[min, max]`.
pub fn limit<T: Float>(value: T, min: T, max: T) -> T {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(127.5_f64), 128.0);
        assert_eq!(round_half_up(-2.5_f64), -2.0);
        assert_eq!(round_half_up(0.49_f64), 0.0);
    }

    #[test]
    fn wraps_negative_values_around() {
        assert_eq!(wrap(300.0_f64, 256.0), 44.0);
        assert_eq!(wrap(-30.0_f64, 360.0), 330.0);
        assert_eq!(wrap(720.0_f64, 360.0), 0.0);
    }

    #[test]
    fn limits_to_range() {
        assert_eq!(limit(1.5_f64, 0.0, 1.0), 1.0);
        assert_eq!(limit(-0.5_f64, 0.0, 1.0), 0.0);
        assert_eq!(limit(42.0_f64, 0.0, 100.0), 42.0);
    }
}
