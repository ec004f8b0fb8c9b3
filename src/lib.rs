//! The Lorenz strange attractor, integrated with the explicit Euler method and drawn as an
//! animated SVG.
//!
//! It is split into two main modules: [`solver`] for generating the trajectory, and [`drawing`]
//! for rendering it. Points live in [`geometry`], together with the projection onto the canvas.
//!
//! # Basic usage
//! ```no_run
//! # use lorenz_attractor::{
//! #   error::Result,
//! #   solver::{Integrator, LorenzConfig},
//! #   drawing::{Svg, SvgConfig, Playback},
//! # };
//! # fn main() -> Result<()> {
//! // σ = 10, ρ = 28, β = 8/3, dt = 0.01, seed (0.1, 0, 0), 1500 steps
//! let mut lorenz = Integrator::new(LorenzConfig::default())?;
//! let points = lorenz.trajectory();
//!
//! // 500×500 canvas, x/z plane, `screen = (250, 35) + 8 * (x, z)`
//! let svg = Svg::new(SvgConfig {
//!   playback: Playback::Once, // stop the tracer at the last point
//!   ..Default::default()
//! })?;
//! svg.save("lorenz_strange_attractor.svg", &points)?;
//! #   Ok(())
//! # }
//! ```
//!
//! [`Integrator`](solver::Integrator) is also an infinite iterator, one step per item:
//! ```
//! # use lorenz_attractor::solver::Integrator;
//! let max_z = Integrator::default()
//!   .take(1500)
//!   .map(|p| p.z)
//!   .fold(f64::MIN, f64::max);
//! assert!(max_z > 35.0);
//! ```

pub mod error;
pub mod geometry;
pub mod solver;
pub mod drawing;
pub mod util;
