//! Course and section entities.

use std::fmt;
use std::sync::OnceLock;

use crate::serial::SerialCourse;

use super::{CourseId, SectionId, TeacherId};

/// A course offering one or more sections.
///
/// Wraps the course's record; the eligible-teacher list is resolved on
/// first access and memoized.
#[derive(Debug)]
pub struct Course {
    serial: SerialCourse,
    teachers: OnceLock<Vec<TeacherId>>,
}

impl Course {
    pub(crate) fn new(serial: SerialCourse) -> Self {
        Self {
            serial,
            teachers: OnceLock::new(),
        }
    }

    /// Course identifier.
    pub fn id(&self) -> CourseId {
        self.serial.course_id
    }

    /// Course title.
    pub fn title(&self) -> &str {
        &self.serial.title
    }

    /// Number of sections offered.
    pub fn section_count(&self) -> u32 {
        self.serial.sections
    }

    /// Number of consecutive periods each section occupies.
    pub fn period_length(&self) -> u32 {
        self.serial.period_length
    }

    /// Expected enrollment.
    pub fn estimated_class_size(&self) -> u32 {
        self.serial.estimated_class_size
    }

    /// Enrollment cap; rooms must seat at least this many.
    pub fn max_class_size(&self) -> u32 {
        self.serial.max_class_size
    }

    /// Teachers eligible to teach this course.
    pub fn teachers(&self) -> &[TeacherId] {
        self.teachers
            .get_or_init(|| self.serial.teacher_ids.clone())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.serial.title.is_empty() {
            write!(f, "{}", self.id())
        } else {
            f.write_str(&self.serial.title)
        }
    }
}

/// One concrete, schedulable offering of a course.
///
/// Sections have no records of their own; the program synthesizes one
/// per (course, section index) pair with a dense identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    id: SectionId,
    course: CourseId,
    index: u32,
}

impl Section {
    pub(crate) fn new(id: SectionId, course: CourseId, index: u32) -> Self {
        Self { id, course, index }
    }

    /// Section identifier, dense across the whole program.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// The owning course.
    pub fn course(&self) -> CourseId {
        self.course
    }

    /// Index of this section within its course, in `[0, section_count)`.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.course, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_accessors() {
        let c = Course::new(
            SerialCourse::new(3, "Algebra")
                .with_sections(2)
                .with_period_length(2)
                .with_class_size(20, 25)
                .with_teacher(7),
        );

        assert_eq!(c.id(), CourseId(3));
        assert_eq!(c.title(), "Algebra");
        assert_eq!(c.section_count(), 2);
        assert_eq!(c.period_length(), 2);
        assert_eq!(c.estimated_class_size(), 20);
        assert_eq!(c.max_class_size(), 25);
        assert_eq!(c.teachers(), &[TeacherId(7)]);
    }

    #[test]
    fn test_section_display() {
        let s = Section::new(SectionId(0), CourseId(3), 1);
        assert_eq!(s.to_string(), "course#3[1]");
    }
}
