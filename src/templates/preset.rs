//! Pre-set templates
//!
//! A short, single-segment, interval-based set slotted between warmup and
//! the main set: kick, pull, or technique drill, each with its equipment
//! tag and its own rest buffer. Kick reps cap at 12.

use crate::models::{Equipment, SetItem, Stroke, Timing};
use crate::pace::{interval, snap_reps, snap_reps_capped};
use crate::rng::SetRng;

const KICK_REP_CAP: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
  Kick,
  Pull,
  Drill,
}

const TEMPLATES: [Template; 3] = [Template::Kick, Template::Pull, Template::Drill];

pub fn generate(target: u32, pace_per_100: f64, rng: &mut SetRng) -> Vec<SetItem> {
  let item = match rng.pick(&TEMPLATES) {
    Template::Kick => {
      let distance = *rng.pick(&[50, 100]);
      let reps = snap_reps_capped(f64::from(target) / f64::from(distance), KICK_REP_CAP);
      // Kick moves at nowhere near swim pace; the buffer absorbs that
      let send_off = interval(distance, pace_per_100, 45.0);
      SetItem::swim(
        reps,
        distance,
        Some(Timing::Interval { seconds: send_off }),
        "Kick — steady effort",
        Stroke::Choice,
      )
      .with_equipment(Equipment::Kickboard)
    }
    Template::Pull => {
      let distance = *rng.pick(&[100, 200]);
      let reps = snap_reps(f64::from(target) / f64::from(distance));
      let send_off = interval(distance, pace_per_100, 20.0);
      SetItem::swim(
        reps,
        distance,
        Some(Timing::Interval { seconds: send_off }),
        "Pull — long strokes, breathe every 3",
        Stroke::Free,
      )
      .with_equipment(Equipment::Pull)
    }
    Template::Drill => {
      let distance = *rng.pick(&[50, 100]);
      let reps = snap_reps(f64::from(target) / f64::from(distance));
      let send_off = interval(distance, pace_per_100, 30.0);
      SetItem::swim(
        reps,
        distance,
        Some(Timing::Interval { seconds: send_off }),
        "Drill/swim by 25",
        Stroke::Choice,
      )
    }
  };
  vec![item]
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
