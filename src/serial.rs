//! Flat serialized records — the input to graph construction.
//!
//! A [`SerialProgram`] is the already-decoded form of one scheduling
//! problem instance: one flat record per entity, keyed by a small integer
//! identifier, with cross-references expressed as identifier lists. The
//! wire format that produced it is out of scope; anything that
//! deserializes into these types (JSON via `serde_json`, a config file,
//! a generator in tests) works.
//!
//! Records reference each other freely and may form cycles (a room lists
//! period identifiers; a period lives inside a block that lists it back),
//! which is why resolution happens in [`graph::Program`](crate::graph::Program)
//! rather than here.
//!
//! The `with_*` builders double as the fixture API for tests.

use serde::{Deserialize, Serialize};

use crate::graph::{BlockId, CourseId, PeriodId, PropertyId, RoomId, TeacherId};

/// One schedulable time unit inside a [`SerialTimeBlock`].
///
/// Periods are nested in their block record; their position in the
/// block's list defines the intra-block ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialPeriod {
    /// Period identifier, unique across all blocks.
    pub period_id: PeriodId,
    /// Human-readable description (e.g. "Mon 9:00").
    pub description: String,
}

/// An ordered group of consecutive periods (e.g. "Saturday morning").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialTimeBlock {
    /// Block identifier.
    pub block_id: BlockId,
    /// Human-readable description.
    pub description: String,
    /// Periods in block order. Multi-period classes never span blocks.
    pub periods: Vec<SerialPeriod>,
}

/// A teacher and the periods they are available to teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialTeacher {
    /// Teacher identifier.
    pub teacher_id: TeacherId,
    /// Display name.
    pub name: String,
    /// Periods this teacher is available, by identifier.
    pub available_periods: Vec<PeriodId>,
}

/// A tag attachable to rooms (e.g. "has projector").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialRoomProperty {
    /// Property identifier.
    pub property_id: PropertyId,
    /// Display name.
    pub name: String,
}

/// A room in which sections may be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialRoom {
    /// Room identifier.
    pub room_id: RoomId,
    /// Display name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Periods this room is available, by identifier.
    pub available_periods: Vec<PeriodId>,
    /// Properties this room offers, by identifier.
    pub room_properties: Vec<PropertyId>,
}

/// A course offering one or more sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialCourse {
    /// Course identifier.
    pub course_id: CourseId,
    /// Course title.
    pub title: String,
    /// Number of sections offered. Sections are synthesized by graph
    /// construction; they have no records of their own.
    pub sections: u32,
    /// Number of consecutive periods each section occupies.
    pub period_length: u32,
    /// Expected enrollment.
    pub estimated_class_size: u32,
    /// Enrollment cap; rooms must seat at least this many.
    pub max_class_size: u32,
    /// Teachers who may teach this course, by identifier.
    pub teacher_ids: Vec<TeacherId>,
}

/// The full record store for one scheduling problem instance.
///
/// Read-only input to [`Program::new`](crate::graph::Program::new).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialProgram {
    /// Time block records (periods nested inside).
    pub time_blocks: Vec<SerialTimeBlock>,
    /// Teacher records.
    pub teachers: Vec<SerialTeacher>,
    /// Room records.
    pub rooms: Vec<SerialRoom>,
    /// Room property records.
    pub room_properties: Vec<SerialRoomProperty>,
    /// Course records.
    pub courses: Vec<SerialCourse>,
}

impl SerialPeriod {
    /// Creates a period record.
    pub fn new(period_id: impl Into<PeriodId>, description: impl Into<String>) -> Self {
        Self {
            period_id: period_id.into(),
            description: description.into(),
        }
    }
}

impl SerialTimeBlock {
    /// Creates an empty time block record.
    pub fn new(block_id: impl Into<BlockId>, description: impl Into<String>) -> Self {
        Self {
            block_id: block_id.into(),
            description: description.into(),
            periods: Vec::new(),
        }
    }

    /// Appends a period to this block.
    pub fn with_period(mut self, period: SerialPeriod) -> Self {
        self.periods.push(period);
        self
    }
}

impl SerialTeacher {
    /// Creates a teacher record with no availability.
    pub fn new(teacher_id: impl Into<TeacherId>, name: impl Into<String>) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            name: name.into(),
            available_periods: Vec::new(),
        }
    }

    /// Marks a period as available.
    pub fn with_available_period(mut self, period: impl Into<PeriodId>) -> Self {
        self.available_periods.push(period.into());
        self
    }
}

impl SerialRoomProperty {
    /// Creates a room property record.
    pub fn new(property_id: impl Into<PropertyId>, name: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            name: name.into(),
        }
    }
}

impl SerialRoom {
    /// Creates a room record with no availability or properties.
    pub fn new(room_id: impl Into<RoomId>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            room_id: room_id.into(),
            name: name.into(),
            capacity,
            available_periods: Vec::new(),
            room_properties: Vec::new(),
        }
    }

    /// Marks a period as available.
    pub fn with_available_period(mut self, period: impl Into<PeriodId>) -> Self {
        self.available_periods.push(period.into());
        self
    }

    /// Attaches a property.
    pub fn with_property(mut self, property: impl Into<PropertyId>) -> Self {
        self.room_properties.push(property.into());
        self
    }
}

impl SerialCourse {
    /// Creates a course record with one section, one-period length, and
    /// no teachers.
    pub fn new(course_id: impl Into<CourseId>, title: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            title: title.into(),
            sections: 1,
            period_length: 1,
            estimated_class_size: 0,
            max_class_size: 0,
            teacher_ids: Vec::new(),
        }
    }

    /// Sets the number of sections.
    pub fn with_sections(mut self, sections: u32) -> Self {
        self.sections = sections;
        self
    }

    /// Sets how many consecutive periods each section occupies.
    pub fn with_period_length(mut self, period_length: u32) -> Self {
        self.period_length = period_length;
        self
    }

    /// Sets estimated and maximum class sizes.
    pub fn with_class_size(mut self, estimated: u32, max: u32) -> Self {
        self.estimated_class_size = estimated;
        self.max_class_size = max;
        self
    }

    /// Adds an eligible teacher.
    pub fn with_teacher(mut self, teacher: impl Into<TeacherId>) -> Self {
        self.teacher_ids.push(teacher.into());
        self
    }
}

impl SerialProgram {
    /// Creates an empty record store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a time block record.
    pub fn with_time_block(mut self, block: SerialTimeBlock) -> Self {
        self.time_blocks.push(block);
        self
    }

    /// Adds a teacher record.
    pub fn with_teacher(mut self, teacher: SerialTeacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a room record.
    pub fn with_room(mut self, room: SerialRoom) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a room property record.
    pub fn with_room_property(mut self, property: SerialRoomProperty) -> Self {
        self.room_properties.push(property);
        self
    }

    /// Adds a course record.
    pub fn with_course(mut self, course: SerialCourse) -> Self {
        self.courses.push(course);
        self
    }

    /// All period records, in (block order, intra-block order).
    pub fn periods(&self) -> impl Iterator<Item = &SerialPeriod> {
        self.time_blocks.iter().flat_map(|b| b.periods.iter())
    }
}
