//! Explicit Euler integration of the Lorenz system.
//!
//! ```text
//! dx/dt = σ (y - x)
//! dy/dt = x (ρ - z) - y
//! dz/dt = x y - β z
//! ```
//! Fixed step, first order: the local truncation error is `O(dt²)` per step, `O(dt)` over the
//! whole run. Good enough for the qualitative shape of the attractor, not for quantitative work.

use {
  crate::{
    error::{ErrorKind, Result},
    geometry::{Point3D, V3}
  },
  anyhow::bail
};


/// Physical and numerical constants of the integrator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LorenzConfig {
  /// σ, Prandtl number
  pub sigma: f64,
  /// ρ, Rayleigh number
  pub rho: f64,
  /// β, geometric factor
  pub beta: f64,
  /// time step
  pub dt: f64,
  /// seed state, restored by [`Integrator::reset`]
  pub initial: Point3D,
  /// trajectory length produced by [`Integrator::trajectory`]
  pub iterations: usize,
}

impl Default for LorenzConfig {
  fn default() -> Self {
    Self {
      sigma: 10.0,
      rho: 28.0,
      beta: 8.0 / 3.0,
      dt: 0.01,
      initial: Point3D::new(0.1, 0.0, 0.0),
      iterations: 1500,
    }}}

impl LorenzConfig {
  pub fn validate(&self) -> Result<()> {
    for (name, value) in [("sigma", self.sigma), ("rho", self.rho), ("beta", self.beta), ("dt", self.dt)] {
      if !value.is_finite() {
        bail!(ErrorKind::invalid_config(format!("{} must be finite, got {}", name, value)));
      }
    }
    if self.dt <= 0.0 {
      bail!(ErrorKind::invalid_config(format!("dt must be positive, got {}", self.dt)));
    }
    if !self.initial.is_finite() {
      bail!(ErrorKind::invalid_config(format!("initial state must be finite, got {}", self.initial)));
    }
    Ok(())
  }

  /// The Lorenz vector field at `p`.
  pub fn derivative(&self, p: Point3D) -> V3 {
    V3::new(
      self.sigma * (p.y - p.x),
      p.x * (self.rho - p.z) - p.y,
      p.x * p.y - self.beta * p.z
    )
  }
}

/// Owns the running state and advances it one step at a time.
///
/// Every emitted point is a copy; the internal state is never exposed by reference.
/// Also an infinite [`Iterator`], where each `next()` is a [`step`](Integrator::step).
#[derive(Debug, Clone)]
pub struct Integrator {
  config: LorenzConfig,
  state: Point3D
}

impl Default for Integrator {
  fn default() -> Self {
    let config = LorenzConfig::default();
    Self { state: config.initial, config }
  }
}

impl Integrator {
  pub fn new(config: LorenzConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self { state: config.initial, config })
  }

  pub fn config(&self) -> &LorenzConfig {
    &self.config
  }

  /// Snapshot of the current state.
  pub fn state(&self) -> Point3D {
    self.state
  }

  pub fn reset(&mut self) {
    self.state = self.config.initial;
  }

  /// `p' = p + dt * f(p)`
  pub fn step(&mut self) -> Point3D {
    let derivative = self.config.derivative(self.state);
    self.state = self.state + derivative * self.config.dt;
    self.state
  }

  /// `n` consecutive steps. The current state is not included, so index `0` is the point one
  /// step after it. Continues from wherever the previous call stopped.
  pub fn generate_trajectory(&mut self, n: usize) -> Vec<Point3D> {
    self.by_ref()
      .take(n)
      .collect()
  }

  /// Same as [`generate_trajectory`](Self::generate_trajectory), calling
  /// `observer(index, point)` after each step.
  pub fn generate_trajectory_with(
    &mut self,
    n: usize,
    mut observer: impl FnMut(usize, &Point3D)
  ) -> Vec<Point3D> {
    self.by_ref()
      .take(n)
      .enumerate()
      .map(|(i, point)| {
        observer(i, &point);
        point
      })
      .collect()
  }

  /// `config.iterations` steps.
  pub fn trajectory(&mut self) -> Vec<Point3D> {
    self.generate_trajectory(self.config.iterations)
  }
}

impl Iterator for Integrator {
  type Item = Point3D;

  fn next(&mut self) -> Option<Point3D> {
    Some(self.step())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (usize::MAX, None)
  }
}
