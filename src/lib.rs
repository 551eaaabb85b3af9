//! Course timetabling domain model.
//!
//! Models an educational program — courses, teachers, rooms, and a
//! block/period time structure — as an immutable reference graph built
//! from flat serialized records, and layers a schedule-assignment model
//! on top of it. Search and optimization are out of scope: an external
//! engine drives the [`schedule::Schedule`] container through its
//! `place`/`remove` operations and reads feasibility data from the
//! [`graph::Program`].
//!
//! # Modules
//!
//! - **`serial`**: Flat record types — the already-decoded input to graph
//!   construction (`SerialProgram` and one record type per entity kind)
//! - **`graph`**: The immutable domain graph — `Program`, `Teacher`,
//!   `TimeBlock`, `ClassPeriod`, `Room`, `RoomProperty`, `Course`, `Section`
//! - **`schedule`**: `StartAssignment`, `PresentAssignment`, and the
//!   mutable `Schedule` container with its no-overlap invariants
//! - **`validation`**: Record integrity checks (duplicate IDs, dangling
//!   references) run before graph construction
//! - **`error`**: Error types for graph construction, assignment
//!   construction, and schedule mutation
//!
//! # Architecture
//!
//! The `Program` graph is built once per problem instance and never
//! mutated afterward. Entities reference each other by small integer
//! identifier; derived collections are resolved lazily and memoized,
//! which is safe precisely because the underlying graph is immutable.
//! Assignments and schedules are created and discarded freely by the
//! consumer and hold only identifiers into the graph, never copies.

pub mod error;
pub mod graph;
pub mod schedule;
pub mod serial;
pub mod validation;
