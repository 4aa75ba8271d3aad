//! Workout composition pipeline
//!
//! Strictly sequential: validate and parse, resolve the seed, allocate the
//! budget, generate the main set first (it is the priority content), then
//! the optional pre-set, then back-fill warmup and cooldown from whatever
//! budget the *actual* generated distances leave over. Snapping and the
//! discrete distance catalogs mean a generator rarely hits its nominal
//! target exactly; the padding sections compensate for the real numbers,
//! never the nominal ones.
//!
//! There is no retry state. Input errors reject the request before any
//! generation; a generator returning nothing is an invariant violation,
//! not an empty section.

use rand::Rng;

use crate::budget;
use crate::error::WorkoutError;
use crate::format;
use crate::models::{SectionKind, SetItem, Workout, WorkoutRequest, WorkoutSection};
use crate::pace::{self, parse_pace};
use crate::rng::SetRng;
use crate::templates::{cooldown, main_set, preset, warmup};

pub fn generate(request: &WorkoutRequest) -> Result<Workout, WorkoutError> {
  if request.duration_minutes == 0 {
    return Err(WorkoutError::InvalidDuration(request.duration_minutes));
  }
  let pace_per_100 = parse_pace(&request.pace)?;

  let seed = request.seed.unwrap_or_else(draw_seed);
  let mut rng = SetRng::seeded(seed);

  let total = budget::total_target(request.duration_minutes, pace_per_100);
  let main_target = budget::main_target(total);
  tracing::debug!(seed, total, main_target, "allocated session budget");

  // Main set first: its actual distance drives everything downstream
  let main_items = main_set::generate(main_target, pace_per_100, &mut rng);
  check_generated(SectionKind::MainSet, &main_items)?;
  let main_actual = pace::total_distance(&main_items);

  // The inclusion draw happens unconditionally so the rng stream keeps the
  // same shape whether or not the pre-set target survives rounding
  let preset_target = budget::preset_target(total);
  let include_preset =
    rng.chance(budget::preset_probability(request.duration_minutes)) && preset_target >= 100;
  let preset_items = if include_preset {
    let items = preset::generate(preset_target, pace_per_100, &mut rng);
    check_generated(SectionKind::PreSet, &items)?;
    Some(items)
  } else {
    None
  };
  let preset_actual = preset_items.as_deref().map(pace::total_distance).unwrap_or(0);

  let pads = budget::padding_targets(total, main_actual + preset_actual);
  let warmup_items = warmup::generate(pads.warmup, pace_per_100, &mut rng);
  check_generated(SectionKind::Warmup, &warmup_items)?;
  let cooldown_items = cooldown::generate(pads.cooldown, pace_per_100, &mut rng);
  check_generated(SectionKind::Cooldown, &cooldown_items)?;

  // Display order differs from generation order
  let mut sections = vec![WorkoutSection::new(SectionKind::Warmup, warmup_items)];
  if let Some(items) = preset_items {
    sections.push(WorkoutSection::new(SectionKind::PreSet, items));
  }
  sections.push(WorkoutSection::new(SectionKind::MainSet, main_items));
  sections.push(WorkoutSection::new(SectionKind::Cooldown, cooldown_items));

  let total_distance: u32 = sections.iter().map(|s| s.distance).sum();
  let estimated_minutes =
    estimated_minutes(total_distance, total, pace_per_100, request.duration_minutes);

  let workout = Workout {
    name: format!(
      "{} {} swim — {} min",
      total_distance,
      request.unit.abbrev(),
      request.duration_minutes
    ),
    duration_minutes: request.duration_minutes,
    pace: request.pace.clone(),
    unit: request.unit,
    total_distance,
    estimated_minutes,
    sections,
    seed,
  };
  Ok(format::decorate(workout))
}

/// A generator that returns nothing (or covers no distance) is a defect,
/// never an empty section in the output.
fn check_generated(kind: SectionKind, items: &[SetItem]) -> Result<(), WorkoutError> {
  if items.is_empty() || pace::total_distance(items) == 0 {
    return Err(WorkoutError::Invariant(format!(
      "{} generator produced no content",
      kind.as_str()
    )));
  }
  Ok(())
}

/// Invert the utilization model over the actual total distance. The
/// allocator derived distance from time through utilization, so the same
/// relation read backwards estimates how long the generated session runs,
/// rest included.
///
/// Distance beyond the allocator's target exists because of the padding
/// floors and snapping, and that surplus is continuous swimming with no
/// send-off rest. It is timed at straight pace, otherwise short sessions
/// (where a 200 warmup plus 200 cooldown dwarf the budget) read far longer
/// than they swim.
fn estimated_minutes(
  total_distance: u32,
  total_target: u32,
  pace_per_100: f64,
  duration_minutes: u32,
) -> u32 {
  let budgeted = total_distance.min(total_target);
  let surplus = total_distance.saturating_sub(total_target);
  let budgeted_seconds =
    f64::from(budgeted) * pace_per_100 / 100.0 / budget::utilization(duration_minutes);
  let surplus_seconds = f64::from(surplus) * pace_per_100 / 100.0;
  ((budgeted_seconds + surplus_seconds) / 60.0).round() as u32
}

fn draw_seed() -> u64 {
  rand::thread_rng().gen_range(0..=u64::from(u32::MAX))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
