//! Error taxonomy for workout generation
//!
//! Input errors are surfaced before any generation work begins; no partial
//! workout is ever returned. An `Invariant` error marks a generator defect
//! and is never silently swallowed into an empty section.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WorkoutError {
  #[error("invalid pace \"{0}\": expected \"M:SS\" per 100")]
  InvalidPace(String),

  #[error("duration must be a positive number of minutes, got {0}")]
  InvalidDuration(u32),

  #[error("internal invariant violated: {0}")]
  Invariant(String),
}
