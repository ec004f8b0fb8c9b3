//! .
//!
//! Library functions return [`anyhow::Result`]. Failures this crate raises itself carry an
//! [`ErrorKind`], so callers may tell them apart with `error.downcast_ref::<ErrorKind>()`.
use std::{fmt, path::PathBuf};

pub use anyhow::Result;

#[derive(Debug)]
pub enum ErrorKind {
  /// A configuration parameter is out of its domain (non-finite, non-positive, empty...).
  InvalidConfig(String),
  /// The output document could not be created or written.
  Io {
    path: PathBuf,
    source: std::io::Error
  },
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use ErrorKind::*;
    match *self {
      InvalidConfig(ref msg) => write!(fmt, "invalid configuration: {}", msg),
      Io { ref path, .. } => write!(fmt, "unable to write {}", path.display()),
    }
  }
}

impl std::error::Error for ErrorKind {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match *self {
      ErrorKind::Io { ref source, .. } => Some(source),
      _ => None
    }
  }
}

impl ErrorKind {
  pub fn invalid_config(msg: impl Into<String>) -> Self {
    ErrorKind::InvalidConfig(msg.into())
  }
}

/// Format the whole cause chain, one line per cause, and echo it to stderr.
pub fn display(error: &anyhow::Error) -> String {
  let mut msg = "Error:".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("\n└> {} - {}", index, error)));
  eprintln!("{}", msg);
  msg
}
