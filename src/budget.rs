//! Budget allocation: time in, distance targets out
//!
//! The allocator turns (duration, pace) into a total distance target, then
//! carves out section targets. The main set is sized first because it is
//! the priority content; warmup and cooldown back-fill whatever is left
//! after the main set and pre-set report their *actual* distances.

use crate::pace::round_to_step;

/// Fraction of the session actually spent swimming. Longer sessions carry
/// proportionally more rest on the wall.
pub fn utilization(duration_minutes: u32) -> f64 {
  if duration_minutes <= 30 {
    0.72
  } else if duration_minutes <= 60 {
    0.68
  } else {
    0.65
  }
}

/// Total target distance for the session, rounded to the nearest 100.
pub fn total_target(duration_minutes: u32, pace_per_100: f64) -> u32 {
  let swim_seconds = f64::from(duration_minutes) * 60.0 * utilization(duration_minutes);
  let per_unit = pace_per_100 / 100.0;
  round_to_step(swim_seconds / per_unit, 100)
}

/// Main set claims a fixed 62% of the total.
pub fn main_target(total: u32) -> u32 {
  round_to_step(f64::from(total) * 0.62, 100)
}

/// Pre-set inclusion probability; short sessions rarely fit one.
pub fn preset_probability(duration_minutes: u32) -> f64 {
  if duration_minutes > 30 {
    0.55
  } else {
    0.20
  }
}

/// Pre-set claims a fixed 10% of the total when included.
pub fn preset_target(total: u32) -> u32 {
  round_to_step(f64::from(total) * 0.10, 100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingTargets {
  pub warmup: u32,
  pub cooldown: u32,
}

/// Split what remains after the main set and pre-set between cooldown and
/// warmup. Both carry a 200 floor; the warmup cap at 1000 is a hard clamp
/// applied after the 50-unit rounding.
pub fn padding_targets(total: u32, consumed: u32) -> PaddingTargets {
  let remaining = total.saturating_sub(consumed);

  let cooldown = round_to_step(f64::from(remaining) * 0.30, 50).max(200);
  let warmup = round_to_step(f64::from(remaining.saturating_sub(cooldown)), 50).clamp(200, 1000);

  tracing::debug!(remaining, warmup, cooldown, "padding targets");
  PaddingTargets { warmup, cooldown }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
