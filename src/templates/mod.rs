//! Template catalog: pure set generators
//!
//! Four families, one per workout section. Every generator is a pure
//! function of (target distance, pace, rng) and returns the set items for
//! its section; generators never talk to each other, and the composer is
//! the only caller.

pub mod cooldown;
pub mod main_set;
pub mod preset;
pub mod warmup;
