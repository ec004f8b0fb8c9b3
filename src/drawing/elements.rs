use {
  super::Playback,
  crate::geometry::{CanvasSpace, P2, Point3D, Projection},
  euclid::Size2D,
  itertools::Itertools,
  std::fmt
};

/// Attribute value with the XML special characters escaped.
struct Attr<'a>(&'a str);

impl fmt::Display for Attr<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    self.0.chars().try_for_each(|c| match c {
      '&' => f.write_str("&amp;"),
      '<' => f.write_str("&lt;"),
      '>' => f.write_str("&gt;"),
      '"' => f.write_str("&quot;"),
      c => fmt::Write::write_char(f, c)
    })
  }
}

/// Opening `<svg>` tag, closed by the caller.
#[derive(Debug, Copy, Clone)]
pub struct Header {
  pub canvas: Size2D<f64, CanvasSpace>
}

impl fmt::Display for Header {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f,
      "<svg version=\"1.1\"\n\
       \x20    baseProfile=\"full\"\n\
       \x20    width=\"{}\" height=\"{}\"\n\
       \x20    xmlns=\"http://www.w3.org/2000/svg\"\n\
       \x20    xmlns:xlink=\"http://www.w3.org/1999/xlink\">",
      self.canvas.width, self.canvas.height)
  }
}

/// Full canvas, opaque.
#[derive(Debug, Copy, Clone)]
pub struct Background<'a> {
  pub fill: &'a str
}

impl fmt::Display for Background<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "<rect width=\"100%\" height=\"100%\" fill=\"{}\" />", Attr(self.fill))
  }
}

/// Filled circle, optionally carrying an animation.
#[derive(Debug, Copy, Clone)]
pub struct Marker<'a> {
  pub id: Option<&'a str>,
  pub center: P2<f64>,
  pub radius: f64,
  pub fill: &'a str,
  pub animation: Option<AnimateMotion<'a>>
}

impl fmt::Display for Marker<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("<circle ")?;
    if let Some(id) = self.id {
      write!(f, "id=\"{}\" ", Attr(id))?;
    }
    write!(f, "cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"",
      self.center.x, self.center.y, self.radius, Attr(self.fill))?;
    match self.animation {
      None => f.write_str(" />"),
      Some(animation) => write!(f, ">\n  {}\n</circle>", animation)
    }
  }
}

/// Straight segments through every projected point, in order.
///
/// `M` to the first point, then `L` to each of the following ones. An empty trajectory gives
/// an empty `d`, which renders nothing.
#[derive(Debug, Copy, Clone)]
pub struct TrajectoryPath<'a> {
  pub id: &'a str,
  pub points: &'a [Point3D],
  pub projection: Projection,
  pub stroke: &'a str,
  pub stroke_width: f64
}

impl<'a> TrajectoryPath<'a> {
  pub fn data(&self) -> PathData<'a> {
    PathData { points: self.points, projection: self.projection }
  }
}

/// The `d` attribute of a [`TrajectoryPath`]. May be formatted any number of times.
#[derive(Debug, Copy, Clone)]
pub struct PathData<'a> {
  points: &'a [Point3D],
  projection: Projection
}

impl fmt::Display for PathData<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let projection = self.projection;
    let data = self.points.iter()
      .map(|&p| projection.project(p))
      .enumerate()
      .format_with(" ", |(i, p), f| {
        let command = if i == 0 { 'M' } else { 'L' };
        f(&format_args!("{} {:.2} {:.2}", command, p.x, p.y))
      });
    write!(f, "{}", data)
  }
}

impl fmt::Display for TrajectoryPath<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "<path id=\"{}\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
      Attr(self.id), self.data(), Attr(self.stroke), self.stroke_width)
  }
}

/// Moves its parent element along the path referenced by `path_id`.
#[derive(Debug, Copy, Clone)]
pub struct AnimateMotion<'a> {
  pub path_id: &'a str,
  pub duration_secs: f64,
  pub playback: Playback
}

impl fmt::Display for AnimateMotion<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let timing = match self.playback {
      Playback::Loop => "repeatCount=\"indefinite\"",
      Playback::Once => "fill=\"freeze\""
    };
    write!(f,
      "<animateMotion begin=\"0s\" dur=\"{}s\" {}>\n    \
       <mpath href=\"#{id}\" xlink:href=\"#{id}\" />\n  \
       </animateMotion>",
      self.duration_secs, timing, id = Attr(self.path_id))
  }
}
