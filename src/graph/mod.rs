//! The immutable program graph.
//!
//! [`Program`] resolves a flat [`SerialProgram`](crate::serial::SerialProgram)
//! into a navigable object graph: one wrapper per record, keyed by the
//! record's own identifier. Cross-references stay as identifiers and are
//! resolved on demand through the owning `Program`'s lookup tables;
//! derived collections (a teacher's available periods, a room's property
//! set) are computed lazily and memoized, which is safe because nothing
//! in the graph ever mutates after construction.
//!
//! Entity equality is identifier equality within one `Program`. Two
//! programs built from the same records are separate graphs and their
//! entities are not interchangeable.

mod course;
mod ids;
mod program;
mod room;
mod teacher;
mod time;

pub use course::{Course, Section};
pub use ids::{BlockId, CourseId, EntityKind, PeriodId, PropertyId, RoomId, SectionId, TeacherId};
pub use program::Program;
pub use room::{Room, RoomProperty};
pub use teacher::Teacher;
pub use time::{ClassPeriod, TimeBlock};
