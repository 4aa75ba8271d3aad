//! Deterministic swim workout generation
//!
//! Given a time budget, a pace per 100, and a unit system, the engine
//! composes a structured workout: warmup, optional pre-set, main set, and
//! cooldown, with realistic distances, send-offs, and repetition counts.
//! One seeded random source drives every decision, so any workout can be
//! reproduced exactly from its seed. The engine is a pure computation:
//! no I/O, no shared state, no retries.

mod budget;
mod composer;
mod error;
mod format;
mod models;
mod pace;
mod rng;
mod templates;

pub use error::WorkoutError;
pub use models::{
  Equipment, SectionKind, SetItem, Stroke, Timing, Unit, Workout, WorkoutRequest, WorkoutSection,
};

/// Generate a workout for the given request.
///
/// Fails fast on a malformed pace string or a non-positive duration; no
/// partial workout is ever returned. Callers wanting a fresh workout for
/// the same parameters re-invoke with a different seed (or none).
pub fn generate(request: &WorkoutRequest) -> Result<Workout, WorkoutError> {
  composer::generate(request)
}
