//! A [`Matrix`] holds the six coefficients of a 2D affine transform as a plain
//! value. Composition and forward mapping go through
//! [`euclid::Transform2D`], which uses the same layout:
//!
//! ```text
//! x' = xx * x + xy * y + x
//! y' = yx * x + yy * y + y
//! ```

use euclid::{
    default::{Point2D, Transform2D},
    Angle,
};

/// The coefficients of a 2D affine transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    /// Scale along x, the x component of the first basis vector.
    pub xx: f64,
    /// The y component of the first basis vector.
    pub yx: f64,
    /// The x component of the second basis vector.
    pub xy: f64,
    /// Scale along y, the y component of the second basis vector.
    pub yy: f64,
    /// Translation along x.
    pub x: f64,
    /// Translation along y.
    pub y: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    /// The transform that maps every point to itself.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Create a matrix from its six coefficients.
    pub const fn new(xx: f64, yx: f64, xy: f64, yy: f64, x: f64, y: f64) -> Self {
        Self {
            xx,
            yx,
            xy,
            yy,
            x,
            y,
        }
    }

    /// A pure translation.
    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// A pure scale.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A pure rotation, clockwise in screen coordinates (y pointing down).
    pub fn from_rotation(degrees: f64) -> Self {
        let (sin, cos) = Angle::degrees(degrees).radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Return `self ∘ other`: `other` is applied first, in the coordinate
    /// frame of `self`.
    pub fn compose(&self, other: &Matrix) -> Matrix {
        other.to_transform2d().then(&self.to_transform2d()).into()
    }

    /// Rotate the linear part by `degrees`, leaving the translation as is.
    pub fn rotate_linear(&self, degrees: f64) -> Matrix {
        let (sin, cos) = Angle::degrees(degrees).radians.sin_cos();
        Self::new(
            cos * self.xx - sin * self.yx,
            sin * self.xx + cos * self.yx,
            cos * self.xy - sin * self.yy,
            sin * self.xy + cos * self.yy,
            self.x,
            self.y,
        )
    }

    /// Return a copy with both basis vectors scaled to unit length, which
    /// strips any scale while keeping rotation and shear. Zero length vectors
    /// are left alone.
    pub fn normalized(&self) -> Matrix {
        let mut m = *self;

        let h = m.xx.hypot(m.yx);
        if h != 0.0 {
            m.xx /= h;
            m.yx /= h;
        }

        let h = m.yy.hypot(m.xy);
        if h != 0.0 {
            m.yy /= h;
            m.xy /= h;
        }

        m
    }

    /// The determinant of the linear part, as `yx * xy - xx * yy`. Zero means
    /// the transform collapses the plane and cannot be inverted.
    pub fn determinant(&self) -> f64 {
        self.yx * self.xy - self.xx * self.yy
    }

    /// Recover the rotation of this matrix in degrees, in `(-180, 180]`.
    /// Reflected matrices are corrected so that [`Matrix::rotate_linear`]
    /// changes the result by exactly the rotated angle.
    pub fn rotation(&self) -> f64 {
        let Self { xx, yx, xy, yy, .. } = *self;

        let mut flip: f64 = if yx / xx > yy / xy { -1.0 } else { 1.0 };
        let reflected = if xx < 0.0 { xy >= 0.0 } else { xy < 0.0 };
        if reflected {
            flip = -flip;
        }

        (flip * yx).atan2(flip * xx).to_degrees()
    }

    /// Map a point from local space through this matrix.
    pub fn map_point(&self, x: f64, y: f64) -> Point2D<f64> {
        self.to_transform2d().transform_point(Point2D::new(x, y))
    }

    /// Map a point back to local space. Returns `None` when the matrix is
    /// singular.
    pub fn inverse_map_point(&self, x: f64, y: f64) -> Option<Point2D<f64>> {
        let det = self.determinant();
        if det == 0.0 {
            log::trace!("no inverse for singular matrix {:?}", self);
            return None;
        }

        Some(Point2D::new(
            (self.yy * (self.x - x) + self.xy * (y - self.y)) / det,
            (self.xx * (self.y - y) + self.yx * (x - self.x)) / det,
        ))
    }

    /// Return the matrix undoing this one, or `None` when it is singular.
    pub fn inverse(&self) -> Option<Matrix> {
        if self.determinant() == 0.0 {
            return None;
        }
        self.to_transform2d().inverse().map(Matrix::from)
    }

    /// Convert to an [`euclid`] transform.
    pub fn to_transform2d(&self) -> Transform2D<f64> {
        Transform2D::new(self.xx, self.yx, self.xy, self.yy, self.x, self.y)
    }
}

impl From<Transform2D<f64>> for Matrix {
    fn from(t: Transform2D<f64>) -> Self {
        Self::new(t.m11, t.m12, t.m21, t.m22, t.m31, t.m32)
    }
}

impl From<Matrix> for Transform2D<f64> {
    fn from(m: Matrix) -> Self {
        m.to_transform2d()
    }
}

impl From<[f64; 6]> for Matrix {
    fn from([xx, yx, xy, yy, x, y]: [f64; 6]) -> Self {
        Self::new(xx, yx, xy, yy, x, y)
    }
}
