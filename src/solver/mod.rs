pub mod lorenz;
pub use lorenz::{Integrator, LorenzConfig};
