//! Core workout data model
//!
//! A workout is an ordered list of named sections, each holding a tree of
//! set items. Items are either a leaf swim (reps x distance with optional
//! timing) or a round that repeats an ordered group of child items as a
//! unit. Everything here is plain data: built once by the composer,
//! serialized for the UI, never mutated afterwards.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Units and categorical tags
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
  Meters,
  Yards,
}

impl Unit {
  pub fn abbrev(&self) -> &'static str {
    match self {
      Unit::Meters => "m",
      Unit::Yards => "yd",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
  Free,
  Back,
  Breast,
  Fly,
  Im,
  Choice,
  Mixed,
}

impl Stroke {
  pub fn as_str(&self) -> &'static str {
    match self {
      Stroke::Free => "Free",
      Stroke::Back => "Back",
      Stroke::Breast => "Breast",
      Stroke::Fly => "Fly",
      Stroke::Im => "IM",
      Stroke::Choice => "Choice",
      Stroke::Mixed => "Mixed",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
  Pull,
  Kickboard,
  Fins,
}

/// ---------------------------------------------------------------------------
/// Timing: how repetitions cycle
/// ---------------------------------------------------------------------------

/// Send-off or rest discipline for a leaf item. `None` on the item means a
/// continuous swim (warmup/cooldown material).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Timing {
  /// Fixed cycle time per repetition ("leave on the 1:45")
  Interval { seconds: u32 },
  /// Explicit rest between repetitions, no trailing rest after the last
  Rest { seconds: u32 },
}

impl Timing {
  pub fn seconds(&self) -> u32 {
    match self {
      Timing::Interval { seconds } | Timing::Rest { seconds } => *seconds,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Set items: the workout tree
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SetItem {
  /// One line of a workout: reps x distance with optional timing
  Swim {
    reps: u32,
    /// Distance per repetition, in the caller's unit
    distance: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    timing: Option<Timing>,
    description: String,
    stroke: Stroke,
    #[serde(skip_serializing_if = "Option::is_none")]
    equipment: Option<Equipment>,
    /// Display string for the timing, filled by the formatter only
    #[serde(skip_serializing_if = "Option::is_none")]
    timing_label: Option<String>,
  },

  /// A repeated round of sub-items ("4x through: swim/pull/kick").
  /// `reps` multiplies the whole group; distance and timing live on the
  /// children.
  Round {
    reps: u32,
    description: String,
    items: Vec<SetItem>,
  },
}

impl SetItem {
  /// Leaf constructor; equipment and the display label start empty.
  pub fn swim(
    reps: u32,
    distance: u32,
    timing: Option<Timing>,
    description: impl Into<String>,
    stroke: Stroke,
  ) -> Self {
    SetItem::Swim {
      reps,
      distance,
      timing,
      description: description.into(),
      stroke,
      equipment: None,
      timing_label: None,
    }
  }

  /// Continuous swim: no send-off, no rest.
  pub fn continuous(distance: u32, description: impl Into<String>, stroke: Stroke) -> Self {
    Self::swim(1, distance, None, description, stroke)
  }

  pub fn round(reps: u32, description: impl Into<String>, items: Vec<SetItem>) -> Self {
    SetItem::Round {
      reps,
      description: description.into(),
      items,
    }
  }

  pub fn with_equipment(mut self, eq: Equipment) -> Self {
    if let SetItem::Swim { equipment, .. } = &mut self {
      *equipment = Some(eq);
    }
    self
  }

  /// Total distance covered by this item, recursing through rounds.
  pub fn total_distance(&self) -> u32 {
    match self {
      SetItem::Swim { reps, distance, .. } => reps * distance,
      SetItem::Round { reps, items, .. } => {
        reps * items.iter().map(SetItem::total_distance).sum::<u32>()
      }
    }
  }

  /// Estimated time in seconds for this item at the given pace (seconds
  /// per 100 units).
  ///
  /// - interval timing: every repetition occupies a full cycle
  /// - discrete rest: swim + rest per repetition, minus the trailing rest
  /// - continuous: swim time only
  pub fn duration_seconds(&self, pace_per_100: f64) -> f64 {
    match self {
      SetItem::Swim {
        reps,
        distance,
        timing,
        ..
      } => {
        let reps = f64::from(*reps);
        let swim = f64::from(*distance) / 100.0 * pace_per_100;
        match timing {
          Some(Timing::Interval { seconds }) => reps * f64::from(*seconds),
          Some(Timing::Rest { seconds }) => {
            let rest = f64::from(*seconds);
            reps * (swim + rest) - rest
          }
          None => reps * swim,
        }
      }
      SetItem::Round { reps, items, .. } => {
        f64::from(*reps)
          * items
            .iter()
            .map(|item| item.duration_seconds(pace_per_100))
            .sum::<f64>()
      }
    }
  }
}

/// ---------------------------------------------------------------------------
/// Sections and the workout record
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
  #[serde(rename = "Warmup")]
  Warmup,
  #[serde(rename = "Pre-Set")]
  PreSet,
  #[serde(rename = "Main Set")]
  MainSet,
  #[serde(rename = "Cooldown")]
  Cooldown,
}

impl SectionKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      SectionKind::Warmup => "Warmup",
      SectionKind::PreSet => "Pre-Set",
      SectionKind::MainSet => "Main Set",
      SectionKind::Cooldown => "Cooldown",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSection {
  pub name: SectionKind,
  pub items: Vec<SetItem>,
  /// Aggregated distance over `items`, in the caller's unit
  pub distance: u32,
}

impl WorkoutSection {
  pub fn new(name: SectionKind, items: Vec<SetItem>) -> Self {
    let distance = items.iter().map(SetItem::total_distance).sum();
    Self {
      name,
      items,
      distance,
    }
  }
}

/// The three request parameters plus an optional seed for reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRequest {
  pub duration_minutes: u32,
  /// Pace per 100 units, "M:SS"
  pub pace: String,
  pub unit: Unit,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seed: Option<u64>,
}

/// The generation result handed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
  pub name: String,
  pub duration_minutes: u32,
  pub pace: String,
  pub unit: Unit,
  pub total_distance: u32,
  pub estimated_minutes: u32,
  pub sections: Vec<WorkoutSection>,
  /// Seed that produced this workout; re-running with it reproduces the
  /// structure exactly
  pub seed: u64,
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
