//! Main-set templates
//!
//! The priority content of every workout. A template is one structural
//! shape of training; the catalog maps each enumerated template to a pure
//! generation function and draws between them by fixed integer weight, so
//! bread-and-butter shapes (straight repeats, descend sets) show up far
//! more often than the exotic ones.
//!
//! Every repetition count goes through the nice-rep snapping in `pace`;
//! distances come from small catalogs of conventional swim distances.

use crate::models::{Equipment, SetItem, Stroke, Timing};
use crate::pace::{interval, snap_reps};
use crate::rng::SetRng;

/// ---------------------------------------------------------------------------
/// Catalog
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTemplate {
  Straight,
  Descend,
  Ladder,
  NegativeSplit,
  PullRepeats,
  EquipmentRounds,
  ImFocus,
  RatioCombo,
  Broken,
  FinsSet,
}

/// Template plus its selection weight.
pub const CATALOG: [(MainTemplate, u32); 10] = [
  (MainTemplate::Straight, 10),
  (MainTemplate::Descend, 10),
  (MainTemplate::Ladder, 6),
  (MainTemplate::NegativeSplit, 6),
  (MainTemplate::PullRepeats, 6),
  (MainTemplate::EquipmentRounds, 5),
  (MainTemplate::ImFocus, 5),
  (MainTemplate::RatioCombo, 4),
  (MainTemplate::Broken, 3),
  (MainTemplate::FinsSet, 3),
];

pub fn generate(target: u32, pace_per_100: f64, rng: &mut SetRng) -> Vec<SetItem> {
  let weights: Vec<u32> = CATALOG.iter().map(|(_, w)| *w).collect();
  let (template, _) = CATALOG[rng.weighted_index(&weights)];
  tracing::debug!(?template, target, "main set template selected");
  dispatch(template, target, pace_per_100, rng)
}

fn dispatch(template: MainTemplate, target: u32, pace: f64, rng: &mut SetRng) -> Vec<SetItem> {
  match template {
    MainTemplate::Straight => straight(target, pace, rng),
    MainTemplate::Descend => descend(target, pace, rng),
    MainTemplate::Ladder => ladder(target, pace, rng),
    MainTemplate::NegativeSplit => negative_split(target, pace, rng),
    MainTemplate::PullRepeats => pull_repeats(target, pace, rng),
    MainTemplate::EquipmentRounds => equipment_rounds(target, pace),
    MainTemplate::ImFocus => im_focus(target, pace, rng),
    MainTemplate::RatioCombo => ratio_combo(target, pace, rng),
    MainTemplate::Broken => broken(target, pace, rng),
    MainTemplate::FinsSet => fins_set(target, pace),
  }
}

/// Pick a repeat distance that yields at least 2 and at most ~22 raw reps,
/// so snapping never collapses the set to a fraction of its target.
fn pick_rep_distance(rng: &mut SetRng, options: &[u32], target: u32) -> u32 {
  let viable: Vec<u32> = options
    .iter()
    .copied()
    .filter(|&d| d * 2 <= target && f64::from(target) / f64::from(d) <= 22.0)
    .collect();
  if !viable.is_empty() {
    return *rng.pick(&viable);
  }
  options
    .iter()
    .copied()
    .filter(|&d| d * 2 <= target)
    .max()
    .unwrap_or(options[0])
}

fn reps_for(target: u32, distance: u32) -> u32 {
  snap_reps(f64::from(target) / f64::from(distance))
}

/// ---------------------------------------------------------------------------
/// Straight repeats and close cousins
/// ---------------------------------------------------------------------------

const REPEAT_DISTANCES: [u32; 6] = [100, 150, 200, 300, 400, 500];

fn straight(target: u32, pace: f64, rng: &mut SetRng) -> Vec<SetItem> {
  const EFFORTS: [(&str, f64); 3] = [
    ("Free — steady", 20.0),
    ("Free — strong effort", 30.0),
    ("Free — best average", 40.0),
  ];
  let distance = pick_rep_distance(rng, &REPEAT_DISTANCES, target);
  let (label, rest) = *rng.pick(&EFFORTS);
  let send_off = interval(distance, pace, rest);
  vec![SetItem::swim(
    reps_for(target, distance),
    distance,
    Some(Timing::Interval { seconds: send_off }),
    label,
    Stroke::Free,
  )]
}

/// Valid (reps, descend-group) pairs: reps must divide evenly into groups.
const DESCEND_COMBOS: [(u32, u32); 5] = [(4, 4), (6, 3), (8, 4), (10, 5), (12, 3)];

fn descend(target: u32, pace: f64, rng: &mut SetRng) -> Vec<SetItem> {
  let distance = pick_rep_distance(rng, &[100, 150, 200], target);
  let raw = f64::from(target) / f64::from(distance);

  let mut combo = DESCEND_COMBOS[0];
  let mut best_diff = f64::INFINITY;
  for &(reps, group) in &DESCEND_COMBOS {
    let diff = (f64::from(reps) - raw).abs();
    if diff < best_diff {
      combo = (reps, group);
      best_diff = diff;
    }
  }

  let (reps, group) = combo;
  let send_off = interval(distance, pace, 30.0);
  vec![SetItem::swim(
    reps,
    distance,
    Some(Timing::Interval { seconds: send_off }),
    format!("Free — descend 1-{}", group),
    Stroke::Free,
  )]
}

fn negative_split(target: u32, pace: f64, rng: &mut SetRng) -> Vec<SetItem> {
  let distance = pick_rep_distance(rng, &[200, 300, 400], target);
  let send_off = interval(distance, pace, 25.0);
  vec![SetItem::swim(
    reps_for(target, distance),
    distance,
    Some(Timing::Interval { seconds: send_off }),
    "Free — negative split every rep",
    Stroke::Free,
  )]
}

fn pull_repeats(target: u32, pace: f64, rng: &mut SetRng) -> Vec<SetItem> {
  const LABELS: [&str; 2] = [
    "Pull — steady, long strokes",
    "Pull — hold pace, breathe every 3/5",
  ];
  let distance = pick_rep_distance(rng, &[100, 200, 300], target);
  let send_off = interval(distance, pace, 20.0);
  vec![SetItem::swim(
    reps_for(target, distance),
    distance,
    Some(Timing::Interval { seconds: send_off }),
    *rng.pick(&LABELS),
    Stroke::Free,
  )
  .with_equipment(Equipment::Pull)]
}

/// ---------------------------------------------------------------------------
/// Ladders and pyramids
/// ---------------------------------------------------------------------------

const LADDER_PATTERNS: [&[u32]; 3] = [
  &[100, 200, 300, 400],
  &[50, 100, 150, 200],
  &[100, 200, 300, 200, 100],
];
const LADDER_ROUNDS: [u32; 5] = [2, 3, 4, 5, 6];

/// Repeat or truncate a base pattern so the round total lands within
/// 70%-115% of the target; falls back to straight repeats when no
/// combination reaches the window.
fn ladder(target: u32, pace: f64, rng: &mut SetRng) -> Vec<SetItem> {
  let pattern = *rng.pick(&LADDER_PATTERNS);
  let descending = rng.chance(0.5);

  let lo = f64::from(target) * 0.70;
  let hi = f64::from(target) * 1.15;

  let mut best: Option<(usize, u32)> = None;
  let mut best_diff = u32::MAX;
  for len in 2..=pattern.len() {
    let step_sum: u32 = pattern[..len].iter().sum();
    for &rounds in &LADDER_ROUNDS {
      let total = rounds * step_sum;
      if f64::from(total) < lo || f64::from(total) > hi {
        continue;
      }
      let diff = total.abs_diff(target);
      if diff < best_diff {
        best = Some((len, rounds));
        best_diff = diff;
      }
    }
  }

  let Some((len, rounds)) = best else {
    return straight(target, pace, rng);
  };

  let mut steps: Vec<u32> = pattern[..len].to_vec();
  if descending {
    steps.reverse();
  }
  let items: Vec<SetItem> = steps
    .iter()
    .map(|&d| {
      SetItem::swim(
        1,
        d,
        Some(Timing::Interval {
          seconds: interval(d, pace, 25.0),
        }),
        "Free — settle into each step",
        Stroke::Free,
      )
    })
    .collect();

  let label = if descending { "Ladder — top down" } else { "Ladder — climb" };
  vec![SetItem::round(rounds, label, items)]
}

/// ---------------------------------------------------------------------------
/// Grouped and mixed-equipment shapes
/// ---------------------------------------------------------------------------

fn equipment_rounds(target: u32, pace: f64) -> Vec<SetItem> {
  let children = vec![
    SetItem::swim(
      1,
      100,
      Some(Timing::Interval {
        seconds: interval(100, pace, 25.0),
      }),
      "Swim — strong",
      Stroke::Free,
    ),
    SetItem::swim(
      1,
      100,
      Some(Timing::Interval {
        seconds: interval(100, pace, 20.0),
      }),
      "Pull — smooth",
      Stroke::Free,
    )
    .with_equipment(Equipment::Pull),
    SetItem::swim(
      1,
      50,
      Some(Timing::Interval {
        seconds: interval(50, pace, 45.0),
      }),
      "Kick — fast",
      Stroke::Choice,
    )
    .with_equipment(Equipment::Kickboard),
  ];

  let round_distance: u32 = children.iter().map(SetItem::total_distance).sum();
  let rounds = snap_reps(f64::from(target) / f64::from(round_distance));
  vec![SetItem::round(rounds, "Swim/pull/kick by rounds", children)]
}

const RATIO_COMBOS: [(u32, u32); 3] = [(200, 100), (300, 100), (400, 200)];

fn ratio_combo(target: u32, pace: f64, rng: &mut SetRng) -> Vec<SetItem> {
  let viable: Vec<(u32, u32)> = RATIO_COMBOS
    .iter()
    .copied()
    .filter(|&(a, b)| (a + b) * 2 <= target)
    .collect();
  let (strong, easy) = if viable.is_empty() {
    RATIO_COMBOS[0]
  } else {
    *rng.pick(&viable)
  };

  let rounds = snap_reps(f64::from(target) / f64::from(strong + easy));
  let children = vec![
    SetItem::swim(
      1,
      strong,
      Some(Timing::Interval {
        seconds: interval(strong, pace, 30.0),
      }),
      "Free — strong",
      Stroke::Free,
    ),
    SetItem::swim(
      1,
      easy,
      Some(Timing::Interval {
        seconds: interval(easy, pace, 15.0),
      }),
      "Free — easy",
      Stroke::Free,
    ),
  ];
  vec![SetItem::round(
    rounds,
    format!("{}/{} — strong then easy", strong, easy),
    children,
  )]
}

/// ---------------------------------------------------------------------------
/// IM, broken race pace, fins
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImShape {
  Repeats,
  Switch,
  StrokeFocus,
}

const IM_SHAPES: [ImShape; 3] = [ImShape::Repeats, ImShape::Switch, ImShape::StrokeFocus];

fn im_focus(target: u32, pace: f64, rng: &mut SetRng) -> Vec<SetItem> {
  match rng.pick(&IM_SHAPES) {
    ImShape::Repeats => {
      let distance = pick_rep_distance(rng, &[100, 200], target);
      let send_off = interval(distance, pace, 30.0);
      vec![SetItem::swim(
        reps_for(target, distance),
        distance,
        Some(Timing::Interval { seconds: send_off }),
        "IM — smooth transitions",
        Stroke::Im,
      )]
    }
    ImShape::Switch => {
      let send_off = interval(100, pace, 25.0);
      vec![SetItem::swim(
        reps_for(target, 100),
        100,
        Some(Timing::Interval { seconds: send_off }),
        "IM switch — rotate lead stroke each 25",
        Stroke::Im,
      )]
    }
    ImShape::StrokeFocus => {
      let stroke = *rng.pick(&[Stroke::Back, Stroke::Breast, Stroke::Fly]);
      let distance = pick_rep_distance(rng, &[50, 100], target);
      let send_off = interval(distance, pace, 25.0);
      vec![SetItem::swim(
        reps_for(target, distance),
        distance,
        Some(Timing::Interval { seconds: send_off }),
        format!("{} — technique focus", stroke.as_str()),
        stroke,
      )]
    }
  }
}

/// Broken race-pace swims on short rest, plus an aerobic supplement to
/// fill the rest of the budget.
fn broken(target: u32, pace: f64, rng: &mut SetRng) -> Vec<SetItem> {
  let race_distance = *rng.pick(&[100, 150, 200]);
  let rounds = snap_reps(f64::from(target) * 0.6 / f64::from(race_distance));
  let pieces = race_distance / 50;

  let mut items = vec![SetItem::round(
    rounds,
    format!("Broken {}s — race pace", race_distance),
    vec![SetItem::swim(
      pieces,
      50,
      Some(Timing::Rest { seconds: 10 }),
      "50s — race pace",
      Stroke::Free,
    )],
  )];

  let aerobic = target.saturating_sub(rounds * race_distance);
  if aerobic >= 200 {
    let send_off = interval(100, pace, 15.0);
    items.push(SetItem::swim(
      snap_reps(f64::from(aerobic) / 100.0),
      100,
      Some(Timing::Interval { seconds: send_off }),
      "Free — easy aerobic",
      Stroke::Free,
    ));
  }
  items
}

/// Two-part fins set: kick/swim volume, then short sprints.
fn fins_set(target: u32, pace: f64) -> Vec<SetItem> {
  let volume_reps = snap_reps(f64::from(target) * 0.6 / 100.0);
  let sprint_reps = snap_reps(f64::from(target) * 0.4 / 50.0);
  vec![
    SetItem::swim(
      volume_reps,
      100,
      Some(Timing::Interval {
        seconds: interval(100, pace, 25.0),
      }),
      "Fins — kick/swim by 50",
      Stroke::Free,
    )
    .with_equipment(Equipment::Fins),
    SetItem::swim(
      sprint_reps,
      50,
      Some(Timing::Interval {
        seconds: interval(50, pace, 30.0),
      }),
      "Fins — sprint the last 15",
      Stroke::Free,
    )
    .with_equipment(Equipment::Fins),
  ]
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::SetItem as Item;
  use crate::pace::{total_distance, NICE_REPS};

  const TARGETS: [u32; 5] = [700, 1100, 1700, 2400, 3700];

  fn check_reps(item: &Item, inside_round: bool) {
    match item {
      Item::Swim { reps, .. } => {
        if inside_round {
          // A 1x step inside a repeated round is legitimate
          assert!(*reps == 1 || NICE_REPS.contains(reps), "child reps {}", reps);
        } else {
          assert!(NICE_REPS.contains(reps), "top-level reps {}", reps);
        }
      }
      Item::Round { reps, items, .. } => {
        assert!(NICE_REPS.contains(reps), "round reps {}", reps);
        for child in items {
          check_reps(child, true);
        }
      }
    }
  }

  fn check_timing_granularity(item: &Item) {
    match item {
      Item::Swim { timing, .. } => {
        if let Some(t) = timing {
          assert_eq!(t.seconds() % 5, 0, "timing {} not on the 5s clock", t.seconds());
        }
      }
      Item::Round { items, .. } => items.iter().for_each(check_timing_granularity),
    }
  }

  #[test]
  fn test_every_template_produces_items_for_every_target() {
    for &(template, _) in &CATALOG {
      for &target in &TARGETS {
        for seed in 0..20 {
          let mut rng = SetRng::seeded(seed);
          let items = dispatch(template, target, 90.0, &mut rng);
          assert!(!items.is_empty(), "{:?} empty at target {}", template, target);
          assert!(total_distance(&items) > 0);
        }
      }
    }
  }

  #[test]
  fn test_reps_are_nice_everywhere() {
    for &(template, _) in &CATALOG {
      for &target in &TARGETS {
        for seed in 0..20 {
          let mut rng = SetRng::seeded(seed);
          for item in dispatch(template, target, 95.0, &mut rng) {
            check_reps(&item, false);
          }
        }
      }
    }
  }

  #[test]
  fn test_timings_are_multiples_of_5() {
    for &(template, _) in &CATALOG {
      for &target in &TARGETS {
        for seed in 0..20 {
          let mut rng = SetRng::seeded(seed);
          for item in dispatch(template, target, 105.0, &mut rng) {
            check_timing_granularity(&item);
          }
        }
      }
    }
  }

  #[test]
  fn test_actual_distance_tracks_target() {
    for &(template, _) in &CATALOG {
      for &target in &TARGETS {
        for seed in 0..20 {
          let mut rng = SetRng::seeded(seed);
          let total = total_distance(&dispatch(template, target, 90.0, &mut rng));
          let ratio = f64::from(total) / f64::from(target);
          assert!(
            (0.5..=1.35).contains(&ratio),
            "{:?} at target {} produced {} (ratio {:.2})",
            template,
            target,
            total,
            ratio
          );
        }
      }
    }
  }

  #[test]
  fn test_ladder_lands_in_window() {
    for &target in &TARGETS {
      for seed in 0..40 {
        let mut rng = SetRng::seeded(seed);
        let items = ladder(target, 90.0, &mut rng);
        let total = f64::from(total_distance(&items));
        // Either the round landed in the 70-115% window or the template
        // fell back to straight repeats (still a single leaf)
        if matches!(items[0], Item::Round { .. }) {
          assert!(total >= f64::from(target) * 0.70);
          assert!(total <= f64::from(target) * 1.15);
        }
      }
    }
  }

  #[test]
  fn test_descend_uses_valid_combo_table() {
    for seed in 0..60 {
      let mut rng = SetRng::seeded(seed);
      let items = descend(1700, 90.0, &mut rng);
      if let Item::Swim { reps, description, .. } = &items[0] {
        assert!(DESCEND_COMBOS.iter().any(|(r, _)| r == reps));
        assert!(description.starts_with("Free — descend 1-"));
      }
    }
  }

  #[test]
  fn test_broken_is_rest_based_with_aerobic_supplement() {
    for seed in 0..40 {
      let mut rng = SetRng::seeded(seed);
      let items = broken(1700, 90.0, &mut rng);
      match &items[0] {
        Item::Round { items: children, .. } => {
          assert!(matches!(
            children[0],
            Item::Swim { timing: Some(Timing::Rest { seconds: 10 }), .. }
          ));
        }
        Item::Swim { .. } => panic!("broken set leads with a round"),
      }
      assert!(items.len() >= 2, "aerobic supplement expected at this size");
    }
  }

  #[test]
  fn test_weighted_selection_covers_catalog() {
    let mut seen = std::collections::HashSet::new();
    for seed in 0..400 {
      let mut rng = SetRng::seeded(seed);
      let weights: Vec<u32> = CATALOG.iter().map(|(_, w)| *w).collect();
      seen.insert(rng.weighted_index(&weights));
    }
    assert_eq!(seen.len(), CATALOG.len());
  }
}
