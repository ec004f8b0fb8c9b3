//! SVG rendering of a trajectory.
//!
//! Layering, bottom to top: background, one marker per point, the connective path, and a
//! tracer marker moving along that path.

use {
  crate::{
    error::{ErrorKind, Result},
    geometry::{self, CanvasSpace, Point3D, Projection}
  },
  euclid::{Box2D, Size2D},
  std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path
  }
};

mod elements;
#[cfg(test)] mod tests;
pub use elements::{AnimateMotion, Background, Header, Marker, PathData, TrajectoryPath};

/// What the tracer does once it reaches the end of the path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Playback {
  /// Restart from the first point, forever.
  Loop,
  /// Play a single time and stay on the last point.
  Once,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
  pub canvas: Size2D<f64, CanvasSpace>,
  pub projection: Projection,
  pub background: String,
  pub marker_radius: f64,
  pub marker_fill: String,
  pub path_stroke: String,
  pub path_stroke_width: f64,
  pub tracer_radius: f64,
  pub tracer_fill: String,
  /// seconds per traversal of the path
  pub duration_secs: f64,
  pub playback: Playback,
  pub path_id: String,
  pub tracer_id: String,
}

impl Default for SvgConfig {
  fn default() -> Self {
    Self {
      canvas: Size2D::new(500.0, 500.0),
      projection: Projection::default(),
      background: "black".into(),
      marker_radius: 2.0,
      marker_fill: "blue".into(),
      path_stroke: "white".into(),
      path_stroke_width: 0.5,
      tracer_radius: 4.0,
      tracer_fill: "red".into(),
      duration_secs: 20.0,
      playback: Playback::Loop,
      path_id: "trajectory".into(),
      tracer_id: "tracer".into(),
    }}}

impl SvgConfig {
  pub fn validate(&self) -> Result<()> {
    let invalid = |msg: String| -> Result<()> { Err(ErrorKind::invalid_config(msg).into()) };

    let canvas = self.canvas;
    if !(canvas.width.is_finite() && canvas.height.is_finite()) || canvas.width <= 0.0 || canvas.height <= 0.0 {
      return invalid(format!("canvas must be positive and finite, got {:?}", self.canvas));
    }
    if !self.projection.is_finite() {
      return invalid(format!("projection must be finite, got {:?}", self.projection));
    }
    for (name, value) in [
      ("marker_radius", self.marker_radius),
      ("tracer_radius", self.tracer_radius),
      ("path_stroke_width", self.path_stroke_width)
    ] {
      if !value.is_finite() || value < 0.0 {
        return invalid(format!("{} must be finite and non-negative, got {}", name, value));
      }
    }
    if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
      return invalid(format!("duration_secs must be positive, got {}", self.duration_secs));
    }
    for (name, id) in [("path_id", &self.path_id), ("tracer_id", &self.tracer_id)] {
      if id.is_empty() || id.contains(char::is_whitespace) {
        return invalid(format!("{} must be a non-empty token, got {:?}", name, id));
      }
    }
    if self.path_id == self.tracer_id {
      return invalid(format!("path_id and tracer_id must differ, both are {:?}", self.path_id));
    }
    Ok(())
  }
}

/// Stateless renderer, holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct Svg {
  config: SvgConfig
}

impl Svg {
  pub fn new(config: SvgConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &SvgConfig {
    &self.config
  }

  /// Lazily formatted document; see [`render`](Self::render) and [`write_to`](Self::write_to).
  pub fn document<'a>(&'a self, points: &'a [Point3D]) -> Document<'a> {
    Document { config: &self.config, points }
  }

  pub fn render(&self, points: &[Point3D]) -> String {
    self.document(points).to_string()
  }

  /// Serialize into `writer` through a buffer, flushing at the end.
  pub fn write_to(&self, writer: impl Write, points: &[Point3D]) -> Result<()> {
    Ok(self.serialize(writer, points)?)
  }

  fn serialize(&self, writer: impl Write, points: &[Point3D]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    write!(writer, "{}", self.document(points))?;
    writer.flush()
  }

  /// Projected bounding box of the trajectory, `None` if it is empty.
  pub fn bounds(&self, points: &[Point3D]) -> Option<Box2D<f64, CanvasSpace>> {
    self.config.projection.bounding_box(points)
  }

  /// Create (or truncate) the file at `path` and write the document into it.
  ///
  /// Failures come back as [`ErrorKind::Io`]. A partially written file is left as is.
  pub fn save(&self, path: impl AsRef<Path>, points: &[Point3D]) -> Result<()> {
    use humansize::{FileSize, file_size_opts as options};

    let path = path.as_ref();
    let io_error = |source| ErrorKind::Io { path: path.to_path_buf(), source };

    if let Some(bounds) = self.bounds(points) {
      if !geometry::fits_canvas(&bounds, self.config.canvas) {
        tracing::warn!(?bounds, canvas = ?self.config.canvas, "trajectory exceeds the canvas, not clipped");
      }
    }

    let file = File::create(path).map_err(io_error)?;
    self.serialize(&file, points).map_err(io_error)?;
    let size = file.metadata().map(|m| m.len()).unwrap_or_default();

    tracing::info!(
      path = %path.display(),
      points = points.len(),
      size = %size.file_size(options::CONVENTIONAL).unwrap_or_default(),
      "svg written"
    );
    Ok(())
  }
}

pub struct Document<'a> {
  config: &'a SvgConfig,
  points: &'a [Point3D]
}

impl fmt::Display for Document<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let config = self.config;
    let projection = config.projection;

    writeln!(f, "{}", Header { canvas: config.canvas })?;
    writeln!(f, "{}", Background { fill: &config.background })?;
    for &point in self.points {
      writeln!(f, "{}", Marker {
        id: None,
        center: projection.project(point),
        radius: config.marker_radius,
        fill: &config.marker_fill,
        animation: None
      })?;
    }
    writeln!(f, "{}", TrajectoryPath {
      id: &config.path_id,
      points: self.points,
      projection,
      stroke: &config.path_stroke,
      stroke_width: config.path_stroke_width
    })?;
    // placeholder at the origin, `animateMotion` offsets it onto the path
    writeln!(f, "{}", Marker {
      id: Some(&config.tracer_id),
      center: Default::default(),
      radius: config.tracer_radius,
      fill: &config.tracer_fill,
      animation: Some(AnimateMotion {
        path_id: &config.path_id,
        duration_secs: config.duration_secs,
        playback: config.playback
      })
    })?;
    writeln!(f, "</svg>")
  }
}
