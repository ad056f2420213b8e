/// Tolerance used when comparing transformed coordinates.
pub const EPSILON: f64 = 1.0e-9;

/// Check for equality between two points allowing for floating point rounding
/// errors.
macro_rules! assert_point_eq {
    ($actual:expr, $expected:expr) => {{
        let (actual, expected) = ($actual, $expected);
        approx::assert_abs_diff_eq!(actual.x, expected.x, epsilon = $crate::test::EPSILON);
        approx::assert_abs_diff_eq!(actual.y, expected.y, epsilon = $crate::test::EPSILON);
    }};
}

/// Check for equality between all six coefficients of two matrices.
macro_rules! assert_matrix_eq {
    ($actual:expr, $expected:expr) => {{
        let (actual, expected): ($crate::Matrix, $crate::Matrix) = ($actual, $expected);
        approx::assert_abs_diff_eq!(actual.xx, expected.xx, epsilon = $crate::test::EPSILON);
        approx::assert_abs_diff_eq!(actual.yx, expected.yx, epsilon = $crate::test::EPSILON);
        approx::assert_abs_diff_eq!(actual.xy, expected.xy, epsilon = $crate::test::EPSILON);
        approx::assert_abs_diff_eq!(actual.yy, expected.yy, epsilon = $crate::test::EPSILON);
        approx::assert_abs_diff_eq!(actual.x, expected.x, epsilon = $crate::test::EPSILON);
        approx::assert_abs_diff_eq!(actual.y, expected.y, epsilon = $crate::test::EPSILON);
    }};
}

/// Check that two angles in degrees are the same modulo 360.
macro_rules! assert_angle_eq {
    ($actual:expr, $expected:expr) => {{
        let diff: f64 = ($actual - $expected).rem_euclid(360.0);
        let diff = diff.min(360.0 - diff);
        approx::assert_abs_diff_eq!(diff, 0.0, epsilon = $crate::test::EPSILON);
    }};
}
