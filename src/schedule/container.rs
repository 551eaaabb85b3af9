//! The mutable schedule container.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ScheduleError;
use crate::graph::{PeriodId, Program, RoomId, SectionId, TeacherId};

use super::{PresentAssignment, StartAssignment};

/// The current set of placements for one program, with derived occupancy
/// indices.
///
/// Guarantees at every observable state that no two placements collide on
/// a (room, period) pair and that no teacher is booked into two sections
/// during the same period. Mutations are all-or-nothing: a failed
/// [`place`](Schedule::place) or [`remove`](Schedule::remove) leaves the
/// schedule exactly as it was.
///
/// Not internally synchronized — concurrent search works on independent
/// `Schedule` instances over the same shared [`Program`].
#[derive(Debug)]
pub struct Schedule<'p> {
    program: &'p Program,
    starts: HashMap<SectionId, Arc<StartAssignment>>,
    occupancy: HashMap<(RoomId, PeriodId), PresentAssignment>,
    teacher_busy: HashMap<(TeacherId, PeriodId), SectionId>,
}

impl<'p> Schedule<'p> {
    /// Creates an empty schedule over a program.
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            starts: HashMap::new(),
            occupancy: HashMap::new(),
            teacher_busy: HashMap::new(),
        }
    }

    /// The program this schedule places sections into.
    pub fn program(&self) -> &'p Program {
        self.program
    }

    /// Places an assignment, validating every feasibility rule first.
    ///
    /// Checks, in order:
    /// 1. The section is not already placed (`Conflict`)
    /// 2. The room seats the course's maximum class size (`Conflict`)
    /// 3. The room is available for every occupied period (`Conflict`)
    /// 4. No occupied (room, period) pair is taken (`DoubleBooked`)
    /// 5. Every teacher eligible for the course is available for every
    ///    occupied period (`Conflict`) and not already teaching another
    ///    section in any of them (`DoubleBooked`)
    ///
    /// Every eligible teacher is treated as present for all of the
    /// course's periods; two placements sharing an eligible teacher on a
    /// period therefore conflict even if someone else could have covered
    /// one of them.
    pub fn place(&mut self, assignment: StartAssignment) -> Result<(), ScheduleError> {
        let section_id = assignment.section();
        if self.starts.contains_key(&section_id) {
            return Err(ScheduleError::conflict(format!(
                "section {section_id} is already placed"
            )));
        }

        let section = self.program.section(section_id)?;
        let course = self.program.course(section.course())?;
        let room = self.program.room(assignment.room())?;

        if room.capacity() < course.max_class_size() {
            return Err(ScheduleError::conflict(format!(
                "room {} seats {} but course {} holds up to {}",
                room,
                room.capacity(),
                course,
                course.max_class_size()
            )));
        }

        for &period in assignment.periods() {
            if !room.is_available(period) {
                return Err(ScheduleError::conflict(format!(
                    "room {room} is not available during {period}"
                )));
            }
            if let Some(occupant) = self.occupancy.get(&(room.id(), period)) {
                return Err(ScheduleError::double_booked(format!(
                    "room {room} already holds {occupant} during {period}"
                )));
            }
        }

        for &teacher_id in course.teachers() {
            let teacher = self.program.teacher(teacher_id)?;
            for &period in assignment.periods() {
                if !teacher.is_available(period) {
                    return Err(ScheduleError::conflict(format!(
                        "teacher {teacher} is not available during {period}"
                    )));
                }
                if let Some(&other) = self.teacher_busy.get(&(teacher_id, period)) {
                    return Err(ScheduleError::double_booked(format!(
                        "teacher {teacher} already teaches {other} during {period}"
                    )));
                }
            }
        }

        // All checks passed; commit.
        let start = Arc::new(assignment);
        for present in Arc::clone(&start).present_assignments() {
            self.occupancy
                .insert((present.room(), present.period()), present);
        }
        for &teacher_id in course.teachers() {
            for &period in start.periods() {
                self.teacher_busy.insert((teacher_id, period), section_id);
            }
        }
        self.starts.insert(section_id, start);
        Ok(())
    }

    /// Removes a placed assignment, freeing its periods.
    ///
    /// Fails with `NotPlaced` if the assignment is not currently in the
    /// schedule and `Locked` if its lock flag is set; use
    /// [`remove_forced`](Schedule::remove_forced) to override the lock.
    pub fn remove(
        &mut self,
        assignment: &StartAssignment,
    ) -> Result<Arc<StartAssignment>, ScheduleError> {
        self.remove_inner(assignment, false)
    }

    /// Removes a placed assignment even if it is locked.
    pub fn remove_forced(
        &mut self,
        assignment: &StartAssignment,
    ) -> Result<Arc<StartAssignment>, ScheduleError> {
        self.remove_inner(assignment, true)
    }

    fn remove_inner(
        &mut self,
        assignment: &StartAssignment,
        force: bool,
    ) -> Result<Arc<StartAssignment>, ScheduleError> {
        let section = assignment.section();
        match self.starts.get(&section) {
            Some(placed) if **placed == *assignment => {
                if placed.is_locked() && !force {
                    return Err(ScheduleError::Locked { section });
                }
            }
            _ => return Err(ScheduleError::NotPlaced { section }),
        }

        // Checked above that the key is present and removable.
        let start = self
            .starts
            .remove(&section)
            .ok_or(ScheduleError::NotPlaced { section })?;
        for &period in start.periods() {
            self.occupancy.remove(&(start.room(), period));
        }
        self.teacher_busy.retain(|_, &mut s| s != section);
        Ok(start)
    }

    /// The occupant of a (room, period) slot, if any.
    pub fn assignment_at(&self, room: RoomId, period: PeriodId) -> Option<&PresentAssignment> {
        self.occupancy.get(&(room, period))
    }

    /// The placement of a section, if it is placed.
    pub fn assignment_for(&self, section: SectionId) -> Option<&Arc<StartAssignment>> {
        self.starts.get(&section)
    }

    /// The section a teacher is teaching during a period, if any.
    pub fn teacher_booking(&self, teacher: TeacherId, period: PeriodId) -> Option<SectionId> {
        self.teacher_busy.get(&(teacher, period)).copied()
    }

    /// All current placements, in no particular order.
    pub fn start_assignments(&self) -> impl Iterator<Item = &Arc<StartAssignment>> {
        self.starts.values()
    }

    /// All per-period occupancy records, in no particular order.
    pub fn present_assignments(&self) -> impl Iterator<Item = &PresentAssignment> {
        self.occupancy.values()
    }

    /// Number of placed start assignments.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Whether no section is placed.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}
