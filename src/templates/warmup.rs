//! Warmup templates
//!
//! Every warmup leads with a fixed 200 continuous free swim. If at least
//! 100 of budget remains past the lead, one extra continuous segment is
//! drawn from a small flavor catalog; a flavor that does not fit the
//! remainder degrades to a plain choice-stroke segment. Warmups never use
//! send-offs or discrete rest, and never exceed 1000 total.

use crate::models::{SetItem, Stroke};
use crate::rng::SetRng;

const LEAD_DISTANCE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
  Choice,
  Quarters,
  Build,
  ImOrder,
  MixedThree,
}

const FLAVORS: [Flavor; 5] = [
  Flavor::Choice,
  Flavor::Quarters,
  Flavor::Build,
  Flavor::ImOrder,
  Flavor::MixedThree,
];

pub fn generate(target: u32, _pace_per_100: f64, rng: &mut SetRng) -> Vec<SetItem> {
  let mut items = vec![SetItem::continuous(
    LEAD_DISTANCE,
    "Free — loosen up",
    Stroke::Free,
  )];

  // Target arrives clamped to 1000, so the extra segment is at most 800
  let remaining = target.saturating_sub(LEAD_DISTANCE);
  if remaining < 100 {
    return items;
  }

  let segment = match rng.pick(&FLAVORS) {
    Flavor::Quarters if remaining >= 400 => {
      // Quarters stay on 50s when the distance is a multiple of 200
      let distance = (remaining / 200) * 200;
      SetItem::continuous(distance, "Swim/kick/pull/swim by quarters", Stroke::Mixed)
    }
    Flavor::Build if remaining >= 200 => {
      let distance = (remaining / 100) * 100;
      SetItem::continuous(distance, "Build each 100", Stroke::Free)
    }
    Flavor::ImOrder if remaining >= 200 => {
      let distance = (remaining / 100) * 100;
      SetItem::continuous(distance, "IM order by 50", Stroke::Im)
    }
    Flavor::MixedThree if remaining >= 300 => SetItem::continuous(
      300,
      "100 free / 100 back / 100 breast",
      Stroke::Mixed,
    ),
    // Choice, or any flavor the remainder cannot fund
    _ => {
      let distance = (remaining / 50) * 50;
      SetItem::continuous(distance, "Choice — easy", Stroke::Choice)
    }
  };
  items.push(segment);
  items
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::SetItem as Item;
  use crate::pace::total_distance;

  fn leaf_timing_is_none(item: &Item) -> bool {
    match item {
      Item::Swim { timing, .. } => timing.is_none(),
      Item::Round { items, .. } => items.iter().all(leaf_timing_is_none),
    }
  }

  #[test]
  fn test_always_leads_with_200_free() {
    for seed in 0..50 {
      let mut rng = SetRng::seeded(seed);
      let items = generate(600, 90.0, &mut rng);
      match &items[0] {
        Item::Swim { distance, stroke, .. } => {
          assert_eq!(*distance, 200);
          assert_eq!(*stroke, Stroke::Free);
        }
        Item::Round { .. } => panic!("warmup lead must be a leaf"),
      }
    }
  }

  #[test]
  fn test_continuous_only() {
    for seed in 0..100 {
      let mut rng = SetRng::seeded(seed);
      for target in [200, 350, 500, 700, 1000] {
        let items = generate(target, 95.0, &mut rng);
        assert!(items.iter().all(leaf_timing_is_none));
      }
    }
  }

  #[test]
  fn test_total_within_bounds() {
    for seed in 0..100 {
      let mut rng = SetRng::seeded(seed);
      for target in [200, 300, 450, 600, 800, 1000] {
        let total = total_distance(&generate(target, 90.0, &mut rng));
        assert!(total >= 200, "warmup below floor: {}", total);
        assert!(total <= 1000, "warmup above cap: {}", total);
        assert!(total <= target, "warmup overshot target {}: {}", target, total);
      }
    }
  }

  #[test]
  fn test_minimal_target_is_just_the_lead() {
    let mut rng = SetRng::seeded(3);
    let items = generate(200, 90.0, &mut rng);
    assert_eq!(items.len(), 1);
    assert_eq!(total_distance(&items), 200);
  }

  #[test]
  fn test_tight_budget_degrades_to_choice() {
    // 300 leaves only 100 past the lead; every flavor degrades
    for seed in 0..30 {
      let mut rng = SetRng::seeded(seed);
      let items = generate(300, 90.0, &mut rng);
      assert_eq!(items.len(), 2);
      match &items[1] {
        Item::Swim { distance, stroke, .. } => {
          assert_eq!(*distance, 100);
          assert_eq!(*stroke, Stroke::Choice);
        }
        Item::Round { .. } => panic!("warmup segments are leaves"),
      }
    }
  }
}
