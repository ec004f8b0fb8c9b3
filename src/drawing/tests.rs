use {
  super::*,
  crate::{
    error::Result,
    solver::Integrator
  },
  regex::Regex,
  std::path::PathBuf
};

fn count(svg: &str, pattern: &str) -> Result<usize> {
  Ok(Regex::new(pattern)?.find_iter(svg).count())
}

fn test_dir() -> Result<PathBuf> {
  let dir = std::env::temp_dir().join("lorenz-attractor-test");
  std::fs::create_dir_all(&dir)?;
  Ok(dir)
}

#[test] fn document_structure() -> Result<()> {
  let points = Integrator::default().trajectory();
  let svg = Svg::default().render(&points);

  assert!(svg.starts_with("<svg version=\"1.1\""));
  assert!(svg.trim_end().ends_with("</svg>"));
  assert_eq!(count(&svg, r"<svg\b")?, 1);
  assert_eq!(count(&svg, r"<rect\b")?, 1);
  assert_eq!(count(&svg, r"<circle\b")?, points.len() + 1);
  assert_eq!(count(&svg, r#"<circle id="tracer""#)?, 1);
  assert_eq!(count(&svg, r"<path\b")?, 1);
  assert_eq!(count(&svg, r"<animateMotion\b")?, 1);
  assert_eq!(count(&svg, r##"<mpath href="#trajectory""##)?, 1);
  assert_eq!(count(&svg, r#"<path id="trajectory""#)?, 1);
  Ok(())
}

#[test] fn layering_order() -> Result<()> {
  let points = Integrator::default().generate_trajectory(10);
  let svg = Svg::default().render(&points);
  let position = |needle: &str| svg.find(needle)
    .ok_or_else(|| anyhow::anyhow!("{} not found", needle));

  let rect = position("<rect")?;
  let first_marker = position("<circle cx=")?;
  let last_marker = svg.rfind("<circle cx=")
    .ok_or_else(|| anyhow::anyhow!("no markers"))?;
  let path = position("<path")?;
  let tracer = position("<circle id=")?;
  let animation = position("<animateMotion")?;
  assert!(rect < first_marker);
  assert!(last_marker < path);
  assert!(path < tracer);
  assert!(tracer < animation);
  Ok(())
}

#[test] fn markers_follow_trajectory() -> Result<()> {
  let points = [Point3D::new(0.0, 5.0, 0.0), Point3D::new(1.0, -5.0, 2.0)];
  let svg = Svg::default().render(&points);
  let re = Regex::new(r#"<circle cx="([-\d.]+)" cy="([-\d.]+)" r="2\.00" fill="blue" />"#)?;
  let centers: Vec<_> = re.captures_iter(&svg)
    .map(|c| (c[1].to_string(), c[2].to_string()))
    .collect();
  assert_eq!(centers, [
    ("250.00".to_string(), "35.00".to_string()),
    ("258.00".to_string(), "51.00".to_string())
  ]);
  Ok(())
}

#[test] fn path_data() -> Result<()> {
  let points = [
    Point3D::new(0.0, 0.0, 0.0),
    Point3D::new(1.0, 0.0, 1.0),
    Point3D::new(-1.0, 0.0, 2.0),
  ];
  let svg = Svg::default().render(&points);
  // no redundant segment back to the first point
  assert!(svg.contains(r#"d="M 250.00 35.00 L 258.00 43.00 L 242.00 51.00""#), "{}", svg);
  assert_eq!(count(&svg, r"\bM \d")?, 1);
  assert_eq!(count(&svg, r"\bL \d")?, 2);
  Ok(())
}

#[test] fn path_data_is_reusable() {
  let points = Integrator::default().generate_trajectory(4);
  let path = TrajectoryPath {
    id: "trajectory",
    points: &points,
    projection: Projection::default(),
    stroke: "white",
    stroke_width: 0.5
  };
  let data = path.data();
  let first = data.to_string();
  assert_eq!(data.to_string(), first);
  assert_eq!(format!("{}", path.data()), first);
  assert!(first.starts_with("M "));
  assert_eq!(first.matches(" L ").count(), 3);
}

#[test] fn empty_trajectory() -> Result<()> {
  let svg = Svg::default().render(&[]);
  assert!(svg.contains(r#"<path id="trajectory" d="""#));
  assert_eq!(count(&svg, r"<circle\b")?, 1);
  assert_eq!(count(&svg, r"<animateMotion\b")?, 1);
  Ok(())
}

#[test] fn playback() -> Result<()> {
  let points = Integrator::default().generate_trajectory(3);

  let svg = Svg::default().render(&points);
  assert!(svg.contains(r#"<animateMotion begin="0s" dur="20s" repeatCount="indefinite">"#));
  assert!(!svg.contains("freeze"));

  let svg = Svg::new(SvgConfig {
    playback: Playback::Once,
    duration_secs: 7.5,
    ..Default::default()
  })?.render(&points);
  assert!(svg.contains(r#"<animateMotion begin="0s" dur="7.5s" fill="freeze">"#));
  assert!(!svg.contains("indefinite"));
  Ok(())
}

#[test] fn attributes_are_escaped() -> Result<()> {
  let svg = Svg::new(SvgConfig {
    background: "url(\"#a\")&<>".into(),
    ..Default::default()
  })?.render(&[]);
  assert!(svg.contains(r#"fill="url(&quot;#a&quot;)&amp;&lt;&gt;""#));
  Ok(())
}

#[test] fn write_to_matches_render() -> Result<()> {
  let points = Integrator::default().generate_trajectory(100);
  let svg = Svg::default();
  let mut buf = vec![];
  svg.write_to(&mut buf, &points)?;
  assert_eq!(String::from_utf8(buf)?, svg.render(&points));
  Ok(())
}

/// Accepts a few bytes, then fails.
struct ShortWriter(usize);

impl std::io::Write for ShortWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    if self.0 == 0 {
      return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
    }
    let n = buf.len().min(self.0);
    self.0 -= n;
    Ok(n)
  }
  fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

#[test] fn write_to_reports_failure() {
  let points = Integrator::default().generate_trajectory(100);
  let err = Svg::default().write_to(ShortWriter(64), &points).unwrap_err();
  assert!(err.downcast_ref::<std::io::Error>().is_some(), "{}", err);
}

#[test] fn save() -> Result<()> {
  let path = test_dir()?.join("save.svg");
  let points = Integrator::default().trajectory();
  Svg::default().save(&path, &points)?;
  assert_eq!(std::fs::read_to_string(&path)?, Svg::default().render(&points));
  Ok(())
}

#[test] fn save_unwritable() -> Result<()> {
  let path = test_dir()?.join("missing-directory").join("out.svg");
  let err = Svg::default()
    .save(&path, &Integrator::default().generate_trajectory(10))
    .unwrap_err();
  match err.downcast_ref::<ErrorKind>() {
    Some(ErrorKind::Io { path: failed, .. }) => assert_eq!(failed, &path),
    other => panic!("unexpected error: {:?}", other)
  }
  assert!(!path.exists());
  Ok(())
}

#[test] fn bounds() -> Result<()> {
  let svg = Svg::default();
  assert!(svg.bounds(&[]).is_none());
  let points = Integrator::default().trajectory();
  let bounds = svg.bounds(&points)
    .ok_or_else(|| anyhow::anyhow!("no bounds"))?;
  // the default projection keeps the reference run on the canvas
  assert!(crate::geometry::fits_canvas(&bounds, svg.config().canvas));
  Ok(())
}

#[test] fn rejects_invalid_config() {
  let invalid = [
    SvgConfig { canvas: Size2D::new(0.0, 500.0), ..Default::default() },
    SvgConfig { canvas: Size2D::new(f64::INFINITY, 500.0), ..Default::default() },
    SvgConfig { projection: Projection { scale: f64::NAN, ..Default::default() }, ..Default::default() },
    SvgConfig { marker_radius: -1.0, ..Default::default() },
    SvgConfig { duration_secs: 0.0, ..Default::default() },
    SvgConfig { path_id: "".into(), ..Default::default() },
    SvgConfig { tracer_id: "has space".into(), ..Default::default() },
    SvgConfig { tracer_id: "trajectory".into(), ..Default::default() },
  ];
  for config in invalid {
    let err = Svg::new(config).unwrap_err();
    assert!(matches!(err.downcast_ref::<ErrorKind>(), Some(ErrorKind::InvalidConfig(_))), "{}", err);
  }
}
