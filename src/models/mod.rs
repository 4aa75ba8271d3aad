pub mod workout;

pub use workout::{
  Equipment, SectionKind, SetItem, Stroke, Timing, Unit, Workout, WorkoutRequest, WorkoutSection,
};
