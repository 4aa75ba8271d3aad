//! Pace, interval, and repetition arithmetic
//!
//! All of the small number rules the generators share: pace string parsing,
//! clock formatting, 5-second send-off rounding, "nice" repetition counts,
//! and recursive distance/duration aggregation over the set-item tree.

use crate::error::WorkoutError;
use crate::models::SetItem;

/// Repetition counts that read like a real workout. Raw counts snap to the
/// nearest entry, ties toward the lower value.
pub const NICE_REPS: [u32; 11] = [2, 3, 4, 5, 6, 8, 10, 12, 15, 16, 20];

/// ---------------------------------------------------------------------------
/// Pace parsing and clock formatting
/// ---------------------------------------------------------------------------

/// Parse a "M:SS" pace string into total seconds per 100 units.
pub fn parse_pace(pace: &str) -> Result<f64, WorkoutError> {
  let invalid = || WorkoutError::InvalidPace(pace.to_string());

  let (minutes, seconds) = pace.split_once(':').ok_or_else(invalid)?;
  let minutes: f64 = minutes.trim().parse().map_err(|_| invalid())?;
  let seconds: f64 = seconds.trim().parse().map_err(|_| invalid())?;

  let total = minutes * 60.0 + seconds;
  if !total.is_finite() || total <= 0.0 || minutes < 0.0 || seconds < 0.0 {
    return Err(invalid());
  }
  Ok(total)
}

/// Seconds to "M:SS", zero-padded, rounded to the nearest whole second.
pub fn format_clock(seconds: f64) -> String {
  let total = seconds.round().max(0.0) as u64;
  format!("{}:{:02}", total / 60, total % 60)
}

/// ---------------------------------------------------------------------------
/// Rounding and snapping
/// ---------------------------------------------------------------------------

/// Nearest multiple of `step`, ties rounding up.
pub fn round_to_step(value: f64, step: u32) -> u32 {
  let step_f = f64::from(step);
  ((value / step_f + 0.5).floor() as u32) * step
}

/// Nearest multiple of 5 seconds, ties up. Send-off clocks are granular.
pub fn round5(seconds: f64) -> u32 {
  round_to_step(seconds, 5)
}

/// Send-off for one repetition: swim time plus a rest buffer, both scaled
/// by the 100-unit pace, snapped to the pace clock.
pub fn interval(distance: u32, pace_per_100: f64, rest_per_100: f64) -> u32 {
  let hundreds = f64::from(distance) / 100.0;
  round5(hundreds * pace_per_100 + hundreds * rest_per_100)
}

/// Snap a raw repetition count to the nice-rep catalog.
pub fn snap_reps(raw: f64) -> u32 {
  snap_reps_capped(raw, *NICE_REPS.last().unwrap_or(&20))
}

/// Snap with an upper bound on the catalog (kick sets cap at 12).
pub fn snap_reps_capped(raw: f64, cap: u32) -> u32 {
  let mut best = NICE_REPS[0];
  let mut best_diff = f64::INFINITY;
  for &n in NICE_REPS.iter().filter(|&&n| n <= cap) {
    let diff = (f64::from(n) - raw).abs();
    // Strict improvement only: on a tie the earlier (lower) entry wins
    if diff < best_diff {
      best = n;
      best_diff = diff;
    }
  }
  best
}

/// ---------------------------------------------------------------------------
/// Aggregation over set-item trees
/// ---------------------------------------------------------------------------

pub fn total_distance(items: &[SetItem]) -> u32 {
  items.iter().map(SetItem::total_distance).sum()
}

pub fn total_duration(items: &[SetItem], pace_per_100: f64) -> f64 {
  items
    .iter()
    .map(|item| item.duration_seconds(pace_per_100))
    .sum()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{Stroke, Timing};

  #[test]
  fn test_parse_pace_valid() {
    assert_eq!(parse_pace("1:30").unwrap(), 90.0);
    assert_eq!(parse_pace("2:05").unwrap(), 125.0);
    assert_eq!(parse_pace("0:55").unwrap(), 55.0);
  }

  #[test]
  fn test_parse_pace_rejects_malformed() {
    for bad in ["", "90", "1:xx", "x:30", "1-30", ":", "0:00", "-1:30"] {
      assert!(parse_pace(bad).is_err(), "should reject {:?}", bad);
    }
  }

  #[test]
  fn test_format_clock_pads_seconds() {
    assert_eq!(format_clock(90.0), "1:30");
    assert_eq!(format_clock(65.0), "1:05");
    assert_eq!(format_clock(59.6), "1:00");
    assert_eq!(format_clock(600.0), "10:00");
  }

  #[test]
  fn test_round5_ties_round_up() {
    assert_eq!(round5(12.4), 10);
    assert_eq!(round5(12.5), 15);
    assert_eq!(round5(90.0), 90);
    assert_eq!(round5(92.5), 95);
  }

  #[test]
  fn test_round_to_step() {
    assert_eq!(round_to_step(1234.0, 100), 1200);
    assert_eq!(round_to_step(1250.0, 100), 1300);
    assert_eq!(round_to_step(174.0, 50), 150);
    assert_eq!(round_to_step(175.0, 50), 200);
  }

  #[test]
  fn test_interval_scales_by_hundreds() {
    // 100 @ 1:30 pace + 15s rest buffer -> 1:45
    assert_eq!(interval(100, 90.0, 15.0), 105);
    // 200 doubles both terms -> 3:30
    assert_eq!(interval(200, 90.0, 15.0), 210);
    // 50 halves them -> 52.5 snaps to 55
    assert_eq!(interval(50, 90.0, 15.0), 55);
  }

  #[test]
  fn test_snap_reps_basic() {
    assert_eq!(snap_reps(4.2), 4);
    assert_eq!(snap_reps(9.0), 8);
    assert_eq!(snap_reps(11.2), 12);
  }

  #[test]
  fn test_snap_reps_tie_goes_low() {
    // 7 is equidistant from 6 and 8; ascending scan keeps 6
    assert_eq!(snap_reps(7.0), 6);
    assert_eq!(snap_reps(2.5), 2);
  }

  #[test]
  fn test_snap_reps_clamps_to_catalog_ends() {
    assert_eq!(snap_reps(0.3), 2);
    assert_eq!(snap_reps(100.0), 20);
  }

  #[test]
  fn test_snap_reps_capped_for_kick() {
    assert_eq!(snap_reps_capped(16.0, 12), 12);
    assert_eq!(snap_reps_capped(3.1, 12), 3);
  }

  #[test]
  fn test_aggregation_recurses_into_rounds() {
    let items = vec![
      SetItem::swim(4, 100, Some(Timing::Interval { seconds: 105 }), "Free", Stroke::Free),
      SetItem::round(
        3,
        "Rounds",
        vec![SetItem::swim(2, 50, Some(Timing::Interval { seconds: 55 }), "Kick", Stroke::Choice)],
      ),
    ];
    assert_eq!(total_distance(&items), 400 + 300);
    assert_eq!(total_duration(&items, 90.0), 4.0 * 105.0 + 3.0 * 110.0);
  }
}
