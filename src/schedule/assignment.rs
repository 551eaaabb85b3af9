//! Start and present assignments.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::AssignmentError;
use crate::graph::{Course, PeriodId, Program, RoomId, SectionId};

/// A section placed in a room starting at a period, for the section's
/// full period length.
///
/// Immutable value object. The occupied period sequence is derived at
/// construction by walking forward inside the start period's time block;
/// the lock flag is baked in at construction — "unlocking" means building
/// a replacement assignment, never mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StartAssignment {
    section: SectionId,
    room: RoomId,
    start_period: PeriodId,
    locked: bool,
    periods: Vec<PeriodId>,
}

impl StartAssignment {
    /// Builds a placement of `section` in `room` starting at `start`.
    ///
    /// Resolves the section's period length through the program and
    /// derives the occupied period run. Fails with
    /// [`AssignmentError::InsufficientPeriods`] if the start period's
    /// block ends before the full length fits, or with an identifier
    /// error if any of the ids does not resolve in `program`.
    pub fn new(
        program: &Program,
        section: SectionId,
        room: RoomId,
        start: PeriodId,
        locked: bool,
    ) -> Result<Self, AssignmentError> {
        let sec = program.section(section)?;
        let course = program.course(sec.course())?;
        program.room(room)?;

        let start_period = program.period(start)?;
        let block = program.time_block(start_period.block())?;

        let length = course.period_length();
        let periods = block
            .span_from(start_period.index(), length as usize)
            .ok_or(AssignmentError::InsufficientPeriods {
                section,
                start,
                needed: length,
                available: (block.len() - start_period.index()) as u32,
            })?
            .to_vec();

        Ok(Self {
            section,
            room,
            start_period: start,
            locked,
            periods,
        })
    }

    /// The placed section.
    pub fn section(&self) -> SectionId {
        self.section
    }

    /// The occupied room.
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// The first occupied period.
    pub fn start_period(&self) -> PeriodId {
        self.start_period
    }

    /// Whether this placement is locked against removal.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The occupied periods, in block order. Never empty.
    pub fn periods(&self) -> &[PeriodId] {
        &self.periods
    }

    /// Number of occupied periods (the section's period length).
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// The per-period occupancy records of this placement, in index order.
    pub fn present_assignments(self: Arc<Self>) -> impl Iterator<Item = PresentAssignment> {
        let count = self.period_count();
        (0..count).map(move |index| PresentAssignment {
            start: Arc::clone(&self),
            index,
        })
    }
}

impl fmt::Display for StartAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} at {} x{}{}",
            self.section,
            self.room,
            self.start_period,
            self.periods.len(),
            if self.locked { " (locked)" } else { "" }
        )
    }
}

/// Occupancy of exactly one period by a [`StartAssignment`].
///
/// Equality and hashing use `(start assignment, index)` value semantics,
/// so two present assignments derived independently from equal start
/// assignments at the same index are interchangeable map and set keys.
#[derive(Debug, Clone)]
pub struct PresentAssignment {
    start: Arc<StartAssignment>,
    index: usize,
}

impl PresentAssignment {
    /// Builds the occupancy record for period `index` of `start`.
    ///
    /// Fails with [`AssignmentError::IndexOutOfBounds`] if `index` is not
    /// in `[0, period length)`.
    pub fn new(start: Arc<StartAssignment>, index: usize) -> Result<Self, AssignmentError> {
        if index >= start.period_count() {
            return Err(AssignmentError::IndexOutOfBounds {
                index,
                period_length: start.period_count(),
            });
        }
        Ok(Self { start, index })
    }

    /// The owning start assignment.
    pub fn start_assignment(&self) -> &Arc<StartAssignment> {
        &self.start
    }

    /// Index of this occupancy within the placement, in
    /// `[0, period length)`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The occupied period.
    pub fn period(&self) -> PeriodId {
        self.start.periods()[self.index]
    }

    /// The occupied room.
    pub fn room(&self) -> RoomId {
        self.start.room()
    }

    /// The placed section.
    pub fn section(&self) -> SectionId {
        self.start.section()
    }

    /// Whether the owning placement is locked.
    pub fn is_locked(&self) -> bool {
        self.start.is_locked()
    }

    /// The section's owning course.
    pub fn course<'p>(&self, program: &'p Program) -> Result<&'p Course, AssignmentError> {
        let section = program.section(self.section())?;
        Ok(program.course(section.course())?)
    }
}

impl PartialEq for PresentAssignment {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && *self.start == *other.start
    }
}

impl Eq for PresentAssignment {}

impl Hash for PresentAssignment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.start).hash(state);
        self.index.hash(state);
    }
}

impl fmt::Display for PresentAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {} at {}", self.section(), self.room(), self.period())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TeacherId;
    use crate::serial::{
        SerialCourse, SerialPeriod, SerialProgram, SerialRoom, SerialTeacher, SerialTimeBlock,
    };

    fn sample_program() -> Program {
        let records = SerialProgram::new()
            .with_time_block(
                SerialTimeBlock::new(0, "Morning")
                    .with_period(SerialPeriod::new(1, "P1"))
                    .with_period(SerialPeriod::new(2, "P2"))
                    .with_period(SerialPeriod::new(3, "P3")),
            )
            .with_teacher(
                SerialTeacher::new(10, "T1")
                    .with_available_period(1)
                    .with_available_period(2)
                    .with_available_period(3),
            )
            .with_room(
                SerialRoom::new(20, "R1", 30)
                    .with_available_period(1)
                    .with_available_period(2)
                    .with_available_period(3),
            )
            .with_course(
                SerialCourse::new(30, "Algebra")
                    .with_period_length(2)
                    .with_class_size(20, 20)
                    .with_teacher(10),
            );
        Program::new(records).unwrap()
    }

    #[test]
    fn test_derives_period_run() {
        let program = sample_program();
        let a = StartAssignment::new(&program, SectionId(0), RoomId(20), PeriodId(1), false)
            .unwrap();

        assert_eq!(a.periods(), &[PeriodId(1), PeriodId(2)]);
        assert_eq!(a.period_count(), 2);
        assert_eq!(a.start_period(), PeriodId(1));
        assert!(!a.is_locked());
    }

    #[test]
    fn test_insufficient_periods() {
        let program = sample_program();
        let err = StartAssignment::new(&program, SectionId(0), RoomId(20), PeriodId(3), false)
            .unwrap_err();

        assert_eq!(
            err,
            AssignmentError::InsufficientPeriods {
                section: SectionId(0),
                start: PeriodId(3),
                needed: 2,
                available: 1,
            }
        );
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let program = sample_program();
        assert!(
            StartAssignment::new(&program, SectionId(9), RoomId(20), PeriodId(1), false).is_err()
        );
        assert!(
            StartAssignment::new(&program, SectionId(0), RoomId(99), PeriodId(1), false).is_err()
        );
        assert!(
            StartAssignment::new(&program, SectionId(0), RoomId(20), PeriodId(99), false).is_err()
        );
    }

    #[test]
    fn test_present_assignments_cover_every_period() {
        let program = sample_program();
        let a = Arc::new(
            StartAssignment::new(&program, SectionId(0), RoomId(20), PeriodId(1), false).unwrap(),
        );

        let present: Vec<_> = Arc::clone(&a).present_assignments().collect();
        assert_eq!(present.len(), 2);
        assert_eq!(present[0].index(), 0);
        assert_eq!(present[0].period(), PeriodId(1));
        assert_eq!(present[1].period(), PeriodId(2));
        assert_eq!(present[1].room(), RoomId(20));
        assert_eq!(
            present[0].course(&program).unwrap().teachers(),
            &[TeacherId(10)]
        );
    }

    #[test]
    fn test_present_index_bounds() {
        let program = sample_program();
        let a = Arc::new(
            StartAssignment::new(&program, SectionId(0), RoomId(20), PeriodId(1), false).unwrap(),
        );

        assert!(PresentAssignment::new(Arc::clone(&a), 1).is_ok());
        let err = PresentAssignment::new(Arc::clone(&a), 2).unwrap_err();
        assert_eq!(
            err,
            AssignmentError::IndexOutOfBounds {
                index: 2,
                period_length: 2
            }
        );
    }

    #[test]
    fn test_present_equality_is_value_based() {
        let program = sample_program();
        // Two independently constructed, equal start assignments.
        let a = Arc::new(
            StartAssignment::new(&program, SectionId(0), RoomId(20), PeriodId(1), false).unwrap(),
        );
        let b = Arc::new(
            StartAssignment::new(&program, SectionId(0), RoomId(20), PeriodId(1), false).unwrap(),
        );

        let pa = PresentAssignment::new(Arc::clone(&a), 1).unwrap();
        let pb = PresentAssignment::new(Arc::clone(&b), 1).unwrap();
        let pa0 = PresentAssignment::new(a, 0).unwrap();

        assert_eq!(pa, pb);
        assert_ne!(pa, pa0);

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(pa);
        assert!(set.contains(&pb));
    }
}
