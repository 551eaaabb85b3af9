//! The program root: arena storage and identifier resolution.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::GraphError;
use crate::serial::SerialProgram;
use crate::validation::validate_records;

use super::{
    BlockId, ClassPeriod, Course, CourseId, EntityKind, PeriodId, PropertyId, Room, RoomId,
    RoomProperty, Section, SectionId, Teacher, TeacherId, TimeBlock,
};

/// The root of one scheduling problem instance.
///
/// Owns every entity, keyed by identifier, and is the single source of
/// truth for lookups. Built once from a validated record store and never
/// mutated afterward; assignments and schedules reference it for the
/// lifetime of the problem instance.
#[derive(Debug)]
pub struct Program {
    teachers: HashMap<TeacherId, Teacher>,
    blocks: HashMap<BlockId, TimeBlock>,
    periods: HashMap<PeriodId, ClassPeriod>,
    rooms: HashMap<RoomId, Room>,
    properties: HashMap<PropertyId, RoomProperty>,
    courses: HashMap<CourseId, Course>,
    sections: HashMap<SectionId, Section>,
    block_order: Vec<BlockId>,
    course_order: Vec<CourseId>,
    course_sections: OnceLock<HashMap<CourseId, Vec<SectionId>>>,
    teacher_courses: OnceLock<HashMap<TeacherId, Vec<CourseId>>>,
}

impl Program {
    /// Builds the program graph from a record store.
    ///
    /// Validates the store first; any duplicate identifier, dangling
    /// reference, or structural defect aborts construction with
    /// [`GraphError::InvalidRecords`] carrying the full report. No
    /// partially valid graph is ever produced.
    ///
    /// Section entities are synthesized here: each course record declares
    /// a section count, and sections receive dense identifiers in
    /// (course order, section index) order.
    pub fn new(records: SerialProgram) -> Result<Self, GraphError> {
        validate_records(&records).map_err(GraphError::InvalidRecords)?;

        let mut blocks = HashMap::new();
        let mut periods = HashMap::new();
        let mut block_order = Vec::with_capacity(records.time_blocks.len());

        for (position, block) in records.time_blocks.into_iter().enumerate() {
            let period_ids: Vec<PeriodId> =
                block.periods.iter().map(|p| p.period_id).collect();
            for (index, period) in block.periods.into_iter().enumerate() {
                periods.insert(
                    period.period_id,
                    ClassPeriod::new(
                        period.period_id,
                        period.description,
                        block.block_id,
                        position,
                        index,
                    ),
                );
            }
            block_order.push(block.block_id);
            blocks.insert(
                block.block_id,
                TimeBlock::new(block.block_id, block.description, position, period_ids),
            );
        }

        let teachers = records
            .teachers
            .into_iter()
            .map(|t| (t.teacher_id, Teacher::new(t)))
            .collect();
        let rooms = records
            .rooms
            .into_iter()
            .map(|r| (r.room_id, Room::new(r)))
            .collect();
        let properties = records
            .room_properties
            .into_iter()
            .map(|p| (p.property_id, RoomProperty::new(p)))
            .collect();

        let mut courses = HashMap::new();
        let mut sections = HashMap::new();
        let mut course_order = Vec::with_capacity(records.courses.len());
        let mut next_section = 0u32;

        for course in records.courses {
            let course_id = course.course_id;
            for index in 0..course.sections {
                let id = SectionId(next_section);
                next_section += 1;
                sections.insert(id, Section::new(id, course_id, index));
            }
            course_order.push(course_id);
            courses.insert(course_id, Course::new(course));
        }

        Ok(Self {
            teachers,
            blocks,
            periods,
            rooms,
            properties,
            courses,
            sections,
            block_order,
            course_order,
            course_sections: OnceLock::new(),
            teacher_courses: OnceLock::new(),
        })
    }

    /// Looks up a teacher by identifier.
    pub fn teacher(&self, id: TeacherId) -> Result<&Teacher, GraphError> {
        self.teachers
            .get(&id)
            .ok_or(GraphError::UnknownIdentifier {
                kind: EntityKind::Teacher,
                id: id.0,
            })
    }

    /// Looks up a time block by identifier.
    pub fn time_block(&self, id: BlockId) -> Result<&TimeBlock, GraphError> {
        self.blocks.get(&id).ok_or(GraphError::UnknownIdentifier {
            kind: EntityKind::TimeBlock,
            id: id.0,
        })
    }

    /// Looks up a class period by identifier.
    pub fn period(&self, id: PeriodId) -> Result<&ClassPeriod, GraphError> {
        self.periods.get(&id).ok_or(GraphError::UnknownIdentifier {
            kind: EntityKind::ClassPeriod,
            id: id.0,
        })
    }

    /// Looks up a room by identifier.
    pub fn room(&self, id: RoomId) -> Result<&Room, GraphError> {
        self.rooms.get(&id).ok_or(GraphError::UnknownIdentifier {
            kind: EntityKind::Room,
            id: id.0,
        })
    }

    /// Looks up a room property by identifier.
    pub fn room_property(&self, id: PropertyId) -> Result<&RoomProperty, GraphError> {
        self.properties
            .get(&id)
            .ok_or(GraphError::UnknownIdentifier {
                kind: EntityKind::RoomProperty,
                id: id.0,
            })
    }

    /// Looks up a course by identifier.
    pub fn course(&self, id: CourseId) -> Result<&Course, GraphError> {
        self.courses.get(&id).ok_or(GraphError::UnknownIdentifier {
            kind: EntityKind::Course,
            id: id.0,
        })
    }

    /// Looks up a section by identifier.
    pub fn section(&self, id: SectionId) -> Result<&Section, GraphError> {
        self.sections
            .get(&id)
            .ok_or(GraphError::UnknownIdentifier {
                kind: EntityKind::Section,
                id: id.0,
            })
    }

    /// All teachers, in no particular order.
    pub fn teachers(&self) -> impl Iterator<Item = &Teacher> {
        self.teachers.values()
    }

    /// All time blocks, in record order.
    pub fn time_blocks(&self) -> impl Iterator<Item = &TimeBlock> {
        self.block_order.iter().filter_map(|id| self.blocks.get(id))
    }

    /// All class periods, in (block order, intra-block order).
    pub fn periods(&self) -> impl Iterator<Item = &ClassPeriod> {
        self.time_blocks()
            .flat_map(|b| b.periods().iter())
            .filter_map(|id| self.periods.get(id))
    }

    /// All rooms, in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// All room properties, in no particular order.
    pub fn room_properties(&self) -> impl Iterator<Item = &RoomProperty> {
        self.properties.values()
    }

    /// All courses, in record order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.course_order
            .iter()
            .filter_map(|id| self.courses.get(id))
    }

    /// All sections, in identifier order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        (0..self.sections.len() as u32).filter_map(|i| self.sections.get(&SectionId(i)))
    }

    /// Sections of a course, in section-index order.
    pub fn sections_of(&self, course: CourseId) -> Result<&[SectionId], GraphError> {
        let map = self.course_sections.get_or_init(|| {
            let mut map: HashMap<CourseId, Vec<SectionId>> = self
                .courses
                .keys()
                .map(|&id| (id, Vec::new()))
                .collect();
            for section in self.sections() {
                if let Some(list) = map.get_mut(&section.course()) {
                    list.push(section.id());
                }
            }
            map
        });
        map.get(&course)
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownIdentifier {
                kind: EntityKind::Course,
                id: course.0,
            })
    }

    /// Courses a teacher is eligible to teach, in record order.
    pub fn courses_for_teacher(&self, teacher: TeacherId) -> Result<&[CourseId], GraphError> {
        let map = self.teacher_courses.get_or_init(|| {
            let mut map: HashMap<TeacherId, Vec<CourseId>> = self
                .teachers
                .keys()
                .map(|&id| (id, Vec::new()))
                .collect();
            for course in self.courses() {
                for &t in course.teachers() {
                    if let Some(list) = map.get_mut(&t) {
                        list.push(course.id());
                    }
                }
            }
            map
        });
        map.get(&teacher)
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownIdentifier {
                kind: EntityKind::Teacher,
                id: teacher.0,
            })
    }
}
