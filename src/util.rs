/// Evaluate an expression, logging how long it took.
/// ```
/// # use lorenz_attractor::{profile, solver::Integrator};
/// let points = profile!("trajectory", Integrator::default().trajectory());
/// assert_eq!(points.len(), 1500);
/// ```
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    $crate::util::tracing::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

#[doc(hidden)]
pub use tracing;
