//! .
//!
//! Points of the Lorenz phase space and their mapping onto the drawing canvas.
//! The canvas origin is in the top-left corner, `y` grows downwards.

use {
  std::{fmt, ops::Add},
  euclid::{Box2D, Point2D, Size2D, Transform2D, Vector2D as V2, Vector3D},
  num_traits::Float
};


/// Phase space basis of the Lorenz system
#[derive(Debug, Copy, Clone)]
pub struct PhaseSpace;
/// Canvas (SVG user units) basis
#[derive(Debug, Copy, Clone)]
pub struct CanvasSpace;

pub type P2<T> = Point2D<T, CanvasSpace>;
pub type V3 = Vector3D<f64, PhaseSpace>;

/// A point of the phase space.
///
/// Plain `Copy` value: whatever the caller does with a returned point, it never aliases the
/// state of the integrator that produced it.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point3D {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

impl Point3D {
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
  }

  /// Euclidean distance
  pub fn distance_to(self, other: Self) -> f64 {
    let a: euclid::Point3D<f64, PhaseSpace> = self.into();
    a.distance_to(other.into())
  }
}

impl From<euclid::Point3D<f64, PhaseSpace>> for Point3D {
  fn from(p: euclid::Point3D<f64, PhaseSpace>) -> Self {
    Self::new(p.x, p.y, p.z)
  }
}

impl From<Point3D> for euclid::Point3D<f64, PhaseSpace> {
  fn from(p: Point3D) -> Self {
    euclid::Point3D::new(p.x, p.y, p.z)
  }
}

impl Add<V3> for Point3D {
  type Output = Self;

  fn add(self, offset: V3) -> Self {
    Self {
      x: self.x + offset.x,
      y: self.y + offset.y,
      z: self.z + offset.z,
    }
  }
}

impl fmt::Display for Point3D {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "x= {:.2} y= {:.2} z= {:.2}", self.x, self.y, self.z)
  }
}

/// Orthographic projection onto the `x/z` plane, followed by a fixed affine map:
/// `screen = offset + scale * (x, z)`.
///
/// There is no fitting to the actual trajectory bounds, and no clipping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection<T = f64> {
  pub offset: V2<T, CanvasSpace>,
  pub scale: T,
}

impl Default for Projection<f64> {
  /// Fits the usual `[-20, 20] × [0, 50]` range of the attractor into a 500×500 canvas.
  fn default() -> Self {
    Self {
      offset: V2::new(250.0, 35.0),
      scale: 8.0
    }}}

impl<T: Float> Projection<T> {
  pub fn transform(&self) -> Transform2D<T, PhaseSpace, CanvasSpace> {
    Transform2D::scale(self.scale, self.scale)
      .then_translate(self.offset)
  }

  pub fn project_xz(&self, x: T, z: T) -> P2<T> {
    self.transform()
      .transform_point(Point2D::new(x, z))
  }

  pub fn is_finite(&self) -> bool {
    self.offset.x.is_finite() && self.offset.y.is_finite() && self.scale.is_finite()
  }
}

impl Projection<f64> {
  pub fn project(&self, point: Point3D) -> P2<f64> {
    self.project_xz(point.x, point.z)
  }

  /// Bounding box of the projected points, `None` for an empty set.
  pub fn bounding_box(&self, points: &[Point3D]) -> Option<Box2D<f64, CanvasSpace>> {
    if points.is_empty() {
      return None;
    }
    Some(Box2D::from_points(points.iter().map(|&p| self.project(p))))
  }
}

/// Whether the box lies entirely within a canvas of the given size.
pub fn fits_canvas(bounding_box: &Box2D<f64, CanvasSpace>, canvas: Size2D<f64, CanvasSpace>) -> bool {
  bounding_box.min.x >= 0.0 && bounding_box.min.y >= 0.0 &&
  bounding_box.max.x <= canvas.width && bounding_box.max.y <= canvas.height
}
