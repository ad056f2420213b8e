//! A mutable 2D affine [`Transform`] for positioning a shape.
//!
//! Every operation replaces the whole matrix at once, calls the change
//! callback exactly once and returns the transform so calls can be chained:
//!
//! ```rust
//! use paintbox::Transform;
//! let mut t = Transform::new();
//! t.translate(10.0, 0.0).scale(2.0, 2.0);
//! assert_eq!(t.map_point(1.0, 1.0).x, 12.0);
//! ```

use std::fmt;

use euclid::default::{Point2D, Rect};

use crate::matrix::Matrix;

fn unchanged() {}

/// An affine transform with optional host bounds and a change callback.
///
/// The bounds (`left`, `top`, `width`, `height` of the host shape) only
/// provide the default rotation pivot and the reference size for
/// [`Transform::resize_to`].
#[derive(Clone)]
pub struct Transform<F: FnMut() = fn()> {
    matrix: Matrix,
    bounds: Option<Rect<f64>>,
    on_change: F,
}

impl Transform {
    /// Create an identity transform that ignores changes.
    pub fn new() -> Self {
        Self::with_callback(unchanged)
    }

    /// Create a transform from a matrix, ignoring changes.
    pub fn from_matrix(matrix: impl Into<Matrix>) -> Self {
        let mut transform = Self::new();
        transform.matrix = matrix.into();
        transform
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FnMut()> Transform<F> {
    /// Create an identity transform that calls `on_change` after every
    /// change to the matrix.
    pub fn with_callback(on_change: F) -> Self {
        Self {
            matrix: Matrix::IDENTITY,
            bounds: None,
            on_change,
        }
    }

    /// Set the bounds of the host shape.
    pub fn with_bounds(mut self, bounds: Rect<f64>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Return the bounds of the host shape, if any.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.bounds
    }

    /// Replace the bounds of the host shape. This is not a change to the
    /// matrix and does not call the callback.
    pub fn set_bounds(&mut self, bounds: Option<Rect<f64>>) {
        self.bounds = bounds;
    }

    /// Return the current matrix.
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// The x component of the first basis vector.
    pub fn xx(&self) -> f64 {
        self.matrix.xx
    }

    /// The y component of the first basis vector.
    pub fn yx(&self) -> f64 {
        self.matrix.yx
    }

    /// The x component of the second basis vector.
    pub fn xy(&self) -> f64 {
        self.matrix.xy
    }

    /// The y component of the second basis vector.
    pub fn yy(&self) -> f64 {
        self.matrix.yy
    }

    /// Translation along x.
    pub fn x(&self) -> f64 {
        self.matrix.x
    }

    /// Translation along y.
    pub fn y(&self) -> f64 {
        self.matrix.y
    }

    /// Replace the matrix. Build a [`Matrix`] with `..Matrix::default()` to
    /// leave coefficients at their identity values.
    pub fn set(&mut self, matrix: impl Into<Matrix>) -> &mut Self {
        self.matrix = matrix.into();
        (self.on_change)();
        self
    }

    /// Apply `matrix` in the coordinate frame of the current matrix.
    pub fn compose(&mut self, matrix: impl Into<Matrix>) -> &mut Self {
        let matrix = self.matrix.compose(&matrix.into());
        self.set(matrix)
    }

    /// Translate in the local coordinate frame. Translating by zero is not a
    /// change.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        if dx == 0.0 && dy == 0.0 {
            return self;
        }
        self.compose(Matrix::translation(dx, dy))
    }

    /// Add to the translation directly, in the parent coordinate frame. Only
    /// the same as [`Transform::translate`] when the linear part is the
    /// identity.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.move_to(self.matrix.x + dx, self.matrix.y + dy)
    }

    /// Scale in the local coordinate frame.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.compose(Matrix::scale(sx, sy))
    }

    /// Scale both axes by the same factor.
    pub fn scale_uniform(&mut self, s: f64) -> &mut Self {
        self.scale(s, s)
    }

    /// Rotate clockwise by `degrees` around `pivot`, which defaults to the
    /// center of the bounds (or the origin without bounds).
    pub fn rotate(&mut self, degrees: f64, pivot: Option<Point2D<f64>>) -> &mut Self {
        let pivot = pivot.unwrap_or_else(|| self.default_pivot());

        let matrix = self
            .matrix
            .compose(&Matrix::translation(pivot.x, pivot.y))
            .rotate_linear(degrees)
            .compose(&Matrix::translation(-pivot.x, -pivot.y));

        self.set(matrix)
    }

    /// Set the translation.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let matrix = Matrix { x, y, ..self.matrix };
        self.set(matrix)
    }

    /// Rotate so that the rotation of the matrix becomes `degrees`.
    pub fn rotate_to(&mut self, degrees: f64, pivot: Option<Point2D<f64>>) -> &mut Self {
        let current = self.matrix.rotation();
        self.rotate(degrees - current, pivot)
    }

    /// Replace any existing scale with `sx` and `sy`, keeping rotation and
    /// shear.
    pub fn scale_to(&mut self, sx: f64, sy: f64) -> &mut Self {
        let matrix = self.matrix.normalized().compose(&Matrix::scale(sx, sy));
        self.set(matrix)
    }

    /// Replace any existing scale with `s` on both axes.
    pub fn scale_to_uniform(&mut self, s: f64) -> &mut Self {
        self.scale_to(s, s)
    }

    /// Scale so that the bounds become `width` by `height`. Does nothing
    /// unless the bounds have a non-zero size.
    pub fn resize_to(&mut self, width: f64, height: f64) -> &mut Self {
        match self.bounds {
            Some(bounds) if bounds.size.width != 0.0 && bounds.size.height != 0.0 => {
                self.scale_to(width / bounds.size.width, height / bounds.size.height)
            }
            _ => self,
        }
    }

    /// Map a point from local space.
    pub fn map_point(&self, x: f64, y: f64) -> Point2D<f64> {
        self.matrix.map_point(x, y)
    }

    /// Map a point back to local space. Returns `None` when the transform is
    /// singular, e.g. scaled to zero along one axis.
    pub fn inverse_map_point(&self, x: f64, y: f64) -> Option<Point2D<f64>> {
        self.matrix.inverse_map_point(x, y)
    }

    fn default_pivot(&self) -> Point2D<f64> {
        self.bounds.map_or(Point2D::origin(), |bounds| bounds.center())
    }
}

impl<F: FnMut()> fmt::Debug for Transform<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("matrix", &self.matrix)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use euclid::default::{Point2D, Size2D};

    use super::*;

    fn counted() -> (Transform<impl FnMut()>, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let transform = Transform::with_callback(move || counter.set(counter.get() + 1));
        (transform, count)
    }

    fn bounds(left: f64, top: f64, width: f64, height: f64) -> Rect<f64> {
        Rect::new(Point2D::new(left, top), Size2D::new(width, height))
    }

    #[test]
    fn new_transform_is_identity() {
        let t = Transform::new();
        assert_eq!(t.matrix(), Matrix::IDENTITY);
        assert_eq!(t.map_point(12.0, -3.0), Point2D::new(12.0, -3.0));
        assert_eq!(t.inverse_map_point(12.0, -3.0), Some(Point2D::new(12.0, -3.0)));
    }

    #[test]
    fn set_fills_omitted_coefficients_with_identity() {
        let mut t = Transform::new();
        t.set(Matrix {
            xx: 2.0,
            y: 5.0,
            ..Matrix::default()
        });
        assert_eq!(t.matrix(), Matrix::new(2.0, 0.0, 0.0, 1.0, 0.0, 5.0));

        t.set([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(
            (t.xx(), t.yx(), t.xy(), t.yy(), t.x(), t.y()),
            (1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
        );
    }

    #[test]
    fn every_change_notifies_once() {
        let (mut t, count) = counted();

        t.compose([2.0, 0.0, 0.0, 2.0, 1.0, 1.0]);
        assert_eq!(count.get(), 1);

        t.rotate(45.0, None);
        assert_eq!(count.get(), 2);

        t.scale_to(1.0, 1.0);
        assert_eq!(count.get(), 3);

        t.move_by(1.0, 1.0).move_to(0.0, 0.0);
        assert_eq!(count.get(), 5);

        t.rotate_to(10.0, Some(Point2D::new(3.0, 3.0)));
        assert_eq!(count.get(), 6);
    }

    #[test]
    fn no_ops_do_not_notify() {
        let (mut t, count) = counted();

        t.translate(0.0, 0.0);
        t.resize_to(100.0, 100.0);
        t.set_bounds(Some(bounds(0.0, 0.0, 0.0, 10.0)));
        t.resize_to(100.0, 100.0);

        assert_eq!(count.get(), 0);
        assert_eq!(t.matrix(), Matrix::IDENTITY);
    }

    #[test]
    fn translate_and_move_by_differ_once_rotated() {
        let mut a = Transform::new();
        let mut b = Transform::new();
        a.translate(5.0, 0.0);
        b.move_by(5.0, 0.0);
        assert_eq!(a.matrix(), b.matrix());

        let mut a = Transform::from_matrix(Matrix::from_rotation(90.0));
        let mut b = Transform::from_matrix(Matrix::from_rotation(90.0));
        a.translate(5.0, 0.0);
        b.move_by(5.0, 0.0);
        assert_point_eq!(a.map_point(0.0, 0.0), Point2D::new(0.0, 5.0));
        assert_point_eq!(b.map_point(0.0, 0.0), Point2D::new(5.0, 0.0));
    }

    #[test]
    fn composing_is_associative() {
        let a = Matrix::new(1.5, 0.2, -0.3, 0.8, 4.0, -2.0);
        let b = Matrix::from_rotation(-20.0);
        let c = Matrix::new(0.5, 0.0, 0.7, 2.0, -6.0, 1.0);

        let mut step_by_step = Transform::from_matrix(a);
        step_by_step.compose(b).compose(c);

        let mut bc = Transform::from_matrix(b);
        bc.compose(c);
        let mut grouped = Transform::from_matrix(a);
        grouped.compose(bc.matrix());

        assert_matrix_eq!(step_by_step.matrix(), grouped.matrix());
    }

    #[test]
    fn rotate_is_clockwise_around_the_bounds_center() {
        let mut t = Transform::new().with_bounds(bounds(0.0, 0.0, 20.0, 20.0));
        t.rotate(90.0, None);

        assert_point_eq!(t.map_point(20.0, 10.0), Point2D::new(10.0, 20.0));
        assert_point_eq!(t.map_point(10.0, 10.0), Point2D::new(10.0, 10.0));
    }

    #[test]
    fn rotate_around_explicit_pivot() {
        let mut t = Transform::new();
        t.rotate(180.0, Some(Point2D::new(1.0, 1.0)));
        assert_point_eq!(t.map_point(0.0, 0.0), Point2D::new(2.0, 2.0));
    }

    #[test]
    fn rotate_to_reaches_the_target_angle() {
        let starts = [
            Matrix::IDENTITY,
            Matrix::from_rotation(70.0),
            Matrix::scale(2.0, 3.0),
            Matrix::from_rotation(70.0).compose(&Matrix::scale(2.0, 3.0)),
            // Reflections.
            Matrix::scale(-1.0, 1.0),
            Matrix::scale(1.0, -1.0),
        ];

        for start in starts {
            let mut t = Transform::from_matrix(start);
            for degrees in [30.0, 120.0, 210.0, 300.0, -45.0, 75.0] {
                t.rotate_to(degrees, Some(Point2D::new(3.0, 4.0)));
                assert_angle_eq!(t.matrix().rotation(), degrees);
            }
        }
    }

    #[test]
    fn scale_to_replaces_existing_scale() {
        let mut t = Transform::new();
        t.rotate(30.0, None).scale(4.0, 0.5);
        t.scale_to(2.0, 3.0);

        let m = t.matrix();
        approx::assert_abs_diff_eq!(m.xx.hypot(m.yx), 2.0, epsilon = 1.0e-9);
        approx::assert_abs_diff_eq!(m.xy.hypot(m.yy), 3.0, epsilon = 1.0e-9);
        assert_angle_eq!(m.rotation(), 30.0);
    }

    #[test]
    fn scale_to_uniform_uses_one_factor_for_both_axes() {
        let (mut t, count) = counted();
        t.scale(4.0, 0.5).scale_to_uniform(3.0);

        assert_matrix_eq!(t.matrix(), Matrix::scale(3.0, 3.0));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn resize_to_scales_relative_to_bounds() {
        let mut t = Transform::new().with_bounds(bounds(5.0, 5.0, 100.0, 50.0));
        t.scale(3.0, 3.0);
        t.resize_to(200.0, 100.0);
        assert_matrix_eq!(t.matrix(), Matrix::scale(2.0, 2.0));
    }

    #[test]
    fn inverse_map_point_undoes_map_point() {
        let mut t = Transform::new();
        t.translate(5.0, -3.0).rotate(30.0, None).scale(2.0, 0.5);

        for (x, y) in [(0.0, 0.0), (1.0, 2.0), (-13.5, 8.25)] {
            let p = t.map_point(x, y);
            assert_point_eq!(t.inverse_map_point(p.x, p.y).unwrap(), Point2D::new(x, y));
        }
    }

    #[test]
    fn zero_scale_has_no_inverse() {
        let mut t = Transform::new();
        t.scale(0.0, 1.0);
        assert_eq!(t.inverse_map_point(1.0, 1.0), None);
    }

    #[test]
    fn debug_skips_the_callback() {
        let (t, _) = counted();
        assert!(format!("{t:?}").starts_with("Transform { matrix: Matrix {"));
    }
}
