use {
  lorenz_attractor::{
    error::{self, Result},
    solver::{Integrator, LorenzConfig},
    drawing::{Playback, Svg, SvgConfig},
    profile
  },
  clap::Parser,
  std::path::PathBuf,
  tracing::Level,
  tracing_subscriber::{fmt, prelude::*, EnvFilter}
};

/// Integrate the Lorenz system and render the trajectory as an animated SVG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
  /// Output file
  #[arg(short, long, default_value = "lorenz_strange_attractor.svg")]
  output: PathBuf,
  /// Number of integration steps
  #[arg(short = 'n', long, default_value_t = LorenzConfig::default().iterations)]
  steps: usize,
  /// Play the animation once and freeze, instead of looping
  #[arg(long)]
  once: bool,
  /// Log every generated point
  #[arg(long)]
  trace: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let level = if cli.trace { Level::DEBUG } else { Level::INFO };
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  println!("****************************");
  println!("*                          *");
  println!("* Lorenz Strange Attractor *");
  println!("*                          *");
  println!("****************************\n");

  println!("Generating trajectory points...");
  let mut lorenz = Integrator::new(LorenzConfig {
    iterations: cli.steps,
    ..Default::default()
  })?;
  let points = profile!("trajectory", lorenz.generate_trajectory_with(
    cli.steps,
    |i, point| tracing::debug!("#{} {}", i, point)
  ));

  println!("Generating SVG file...");
  let svg = Svg::new(SvgConfig {
    playback: if cli.once { Playback::Once } else { Playback::Loop },
    ..Default::default()
  })?;
  // a failed write is reported, not fatal
  if let Err(e) = profile!("svg", svg.save(&cli.output, &points)) {
    tracing::error!(path = %cli.output.display(), "error while writing the svg file");
    error::display(&e);
  }

  println!("...end.");
  Ok(())
}
