//! Presentation pass
//!
//! Walks the finished workout and attaches display strings for timing
//! values ("@ 1:45" for a send-off, "0:10 rest" for discrete rest),
//! recursing into rounds. Purely a projection: no domain data is created
//! or changed, and untimed items pass through untouched.

use crate::models::{SetItem, Timing, Workout};
use crate::pace::format_clock;

pub fn decorate(workout: Workout) -> Workout {
  Workout {
    sections: workout
      .sections
      .into_iter()
      .map(|mut section| {
        section.items = section.items.into_iter().map(decorate_item).collect();
        section
      })
      .collect(),
    ..workout
  }
}

fn decorate_item(item: SetItem) -> SetItem {
  match item {
    SetItem::Swim {
      timing,
      reps,
      distance,
      description,
      stroke,
      equipment,
      timing_label: _,
    } => {
      let timing_label = timing.map(|t| match t {
        Timing::Interval { seconds } => format!("@ {}", format_clock(f64::from(seconds))),
        Timing::Rest { seconds } => format!("{} rest", format_clock(f64::from(seconds))),
      });
      SetItem::Swim {
        reps,
        distance,
        timing,
        description,
        stroke,
        equipment,
        timing_label,
      }
    }
    SetItem::Round { reps, description, items } => SetItem::Round {
      reps,
      description,
      items: items.into_iter().map(decorate_item).collect(),
    },
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{SectionKind, Stroke, Unit, WorkoutSection};

  fn workout_with(items: Vec<SetItem>) -> Workout {
    Workout {
      name: "test".to_string(),
      duration_minutes: 60,
      pace: "1:30".to_string(),
      unit: Unit::Yards,
      total_distance: 0,
      estimated_minutes: 60,
      sections: vec![WorkoutSection::new(SectionKind::MainSet, items)],
      seed: 1,
    }
  }

  #[test]
  fn test_interval_label() {
    let workout = workout_with(vec![SetItem::swim(
      8,
      100,
      Some(Timing::Interval { seconds: 105 }),
      "Free",
      Stroke::Free,
    )]);
    let decorated = decorate(workout);
    match &decorated.sections[0].items[0] {
      SetItem::Swim { timing_label, .. } => {
        assert_eq!(timing_label.as_deref(), Some("@ 1:45"));
      }
      SetItem::Round { .. } => unreachable!(),
    }
  }

  #[test]
  fn test_rest_label_recurses_into_rounds() {
    let workout = workout_with(vec![SetItem::round(
      4,
      "Broken",
      vec![SetItem::swim(4, 50, Some(Timing::Rest { seconds: 10 }), "Race", Stroke::Free)],
    )]);
    let decorated = decorate(workout);
    match &decorated.sections[0].items[0] {
      SetItem::Round { items, .. } => match &items[0] {
        SetItem::Swim { timing_label, .. } => {
          assert_eq!(timing_label.as_deref(), Some("0:10 rest"));
        }
        SetItem::Round { .. } => unreachable!(),
      },
      SetItem::Swim { .. } => unreachable!(),
    }
  }

  #[test]
  fn test_continuous_items_stay_unlabeled() {
    let workout = workout_with(vec![SetItem::continuous(200, "Easy", Stroke::Choice)]);
    let decorated = decorate(workout);
    match &decorated.sections[0].items[0] {
      SetItem::Swim { timing_label, .. } => assert!(timing_label.is_none()),
      SetItem::Round { .. } => unreachable!(),
    }
  }
}
