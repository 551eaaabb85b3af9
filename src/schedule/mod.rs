//! Assignment model and schedule container.
//!
//! A [`StartAssignment`] places a section in a room starting at a period
//! for the section's full period length; each occupied period is exposed
//! as a [`PresentAssignment`]. The [`Schedule`] container owns the
//! current set of placements and keeps the no-overlap invariants: at most
//! one occupant per (room, period), and no teacher in two places at once.

mod assignment;
mod container;

pub use assignment::{PresentAssignment, StartAssignment};
pub use container::Schedule;
