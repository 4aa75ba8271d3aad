//! Cooldown templates
//!
//! Mirror image of the warmup: an optional continuous lead segment drawn
//! from a small flavor catalog, then a fixed 200 continuous easy free to
//! finish. Continuous timing only.

use crate::models::{SetItem, Stroke};
use crate::rng::SetRng;

const ANCHOR_DISTANCE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
  Back,
  Choice,
  MixedThree,
}

const FLAVORS: [Flavor; 3] = [Flavor::Back, Flavor::Choice, Flavor::MixedThree];

pub fn generate(target: u32, _pace_per_100: f64, rng: &mut SetRng) -> Vec<SetItem> {
  let mut items = Vec::new();

  let lead = target.saturating_sub(ANCHOR_DISTANCE);
  if lead >= 100 {
    let segment = match rng.pick(&FLAVORS) {
      Flavor::Back => {
        let distance = (lead / 50) * 50;
        SetItem::continuous(distance, "Back — open up the shoulders", Stroke::Back)
      }
      Flavor::MixedThree if lead >= 300 => SetItem::continuous(
        300,
        "100 free / 100 back / 100 breast",
        Stroke::Mixed,
      ),
      _ => {
        let distance = (lead / 50) * 50;
        SetItem::continuous(distance, "Choice — easy", Stroke::Choice)
      }
    };
    items.push(segment);
  }

  items.push(SetItem::continuous(
    ANCHOR_DISTANCE,
    "Free — easy, long strokes",
    Stroke::Free,
  ));
  items
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
