//! Record store validation.
//!
//! Checks structural integrity of a [`SerialProgram`] before graph
//! construction. Detects:
//! - Duplicate identifiers within an entity kind
//! - Dangling cross-references (an identifier list naming a record that
//!   does not exist)
//! - Time blocks with no periods
//! - Courses with zero sections or zero period length
//!
//! Graph construction runs these checks itself and aborts on any error,
//! so a [`Program`](crate::graph::Program) is never built over a
//! malformed store. The function is public so callers can lint input
//! data and report every defect at once.

use crate::serial::SerialProgram;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records of the same kind share an identifier.
    DuplicateId,
    /// A record references a period that doesn't exist.
    InvalidPeriodReference,
    /// A course references a teacher that doesn't exist.
    InvalidTeacherReference,
    /// A room references a property that doesn't exist.
    InvalidPropertyReference,
    /// A time block contains no periods.
    EmptyTimeBlock,
    /// A course has zero sections or zero period length.
    EmptyCourse,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a record store.
///
/// Checks:
/// 1. No duplicate block, period, teacher, room, property, or course IDs
/// 2. Every block has at least one period
/// 3. Every course has at least one section and a nonzero period length
/// 4. All period references (teacher and room availability) resolve
/// 5. All property references in rooms resolve
/// 6. All teacher references in courses resolve
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(program: &SerialProgram) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect period IDs (nested inside blocks) and block IDs
    let mut block_ids = HashSet::new();
    let mut period_ids = HashSet::new();

    for block in &program.time_blocks {
        if !block_ids.insert(block.block_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate time block ID: {}", block.block_id),
            ));
        }

        if block.periods.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTimeBlock,
                format!("Time block '{}' has no periods", block.description),
            ));
        }

        for period in &block.periods {
            if !period_ids.insert(period.period_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate period ID: {}", period.period_id),
                ));
            }
        }
    }

    // Collect teacher, room, property, and course IDs
    let mut teacher_ids = HashSet::new();
    for t in &program.teachers {
        if !teacher_ids.insert(t.teacher_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.teacher_id),
            ));
        }
    }

    let mut property_ids = HashSet::new();
    for p in &program.room_properties {
        if !property_ids.insert(p.property_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room property ID: {}", p.property_id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in &program.rooms {
        if !room_ids.insert(r.room_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.room_id),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for c in &program.courses {
        if !course_ids.insert(c.course_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.course_id),
            ));
        }

        if c.sections == 0 || c.period_length == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!(
                    "Course '{}' must have at least one section and a nonzero period length",
                    c.title
                ),
            ));
        }
    }

    // Check period references
    for t in &program.teachers {
        for pid in &t.available_periods {
            if !period_ids.contains(pid) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPeriodReference,
                    format!("Teacher '{}' references unknown period {}", t.name, pid),
                ));
            }
        }
    }
    for r in &program.rooms {
        for pid in &r.available_periods {
            if !period_ids.contains(pid) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPeriodReference,
                    format!("Room '{}' references unknown period {}", r.name, pid),
                ));
            }
        }
    }

    // Check property references
    for r in &program.rooms {
        for prop in &r.room_properties {
            if !property_ids.contains(prop) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPropertyReference,
                    format!("Room '{}' references unknown property {}", r.name, prop),
                ));
            }
        }
    }

    // Check teacher references
    for c in &program.courses {
        for tid in &c.teacher_ids {
            if !teacher_ids.contains(tid) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTeacherReference,
                    format!("Course '{}' references unknown teacher {}", c.title, tid),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serial::{
        SerialCourse, SerialPeriod, SerialRoom, SerialRoomProperty, SerialTeacher, SerialTimeBlock,
    };

    fn sample_records() -> SerialProgram {
        SerialProgram::new()
            .with_time_block(
                SerialTimeBlock::new(0, "Morning")
                    .with_period(SerialPeriod::new(1, "P1"))
                    .with_period(SerialPeriod::new(2, "P2")),
            )
            .with_teacher(
                SerialTeacher::new(10, "T1")
                    .with_available_period(1)
                    .with_available_period(2),
            )
            .with_room_property(SerialRoomProperty::new(40, "projector"))
            .with_room(
                SerialRoom::new(20, "R1", 30)
                    .with_available_period(1)
                    .with_available_period(2)
                    .with_property(40),
            )
            .with_course(
                SerialCourse::new(30, "Algebra")
                    .with_period_length(2)
                    .with_class_size(20, 25)
                    .with_teacher(10),
            )
    }

    #[test]
    fn test_valid_records() {
        assert!(validate_records(&sample_records()).is_ok());
    }

    #[test]
    fn test_duplicate_period_id() {
        let records = SerialProgram::new()
            .with_time_block(SerialTimeBlock::new(0, "A").with_period(SerialPeriod::new(1, "P1")))
            .with_time_block(SerialTimeBlock::new(2, "B").with_period(SerialPeriod::new(1, "P1b")));

        let errors = validate_records(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("period")));
    }

    #[test]
    fn test_duplicate_room_id() {
        let records = sample_records().with_room(SerialRoom::new(20, "R1-again", 10));

        let errors = validate_records(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_empty_time_block() {
        let records = SerialProgram::new().with_time_block(SerialTimeBlock::new(0, "Empty"));

        let errors = validate_records(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTimeBlock));
    }

    #[test]
    fn test_zero_section_course() {
        let records = sample_records()
            .with_course(SerialCourse::new(31, "Ghost").with_sections(0).with_teacher(10));

        let errors = validate_records(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCourse));
    }

    #[test]
    fn test_dangling_period_reference() {
        let records =
            sample_records().with_teacher(SerialTeacher::new(11, "T2").with_available_period(99));

        let errors = validate_records(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPeriodReference));
    }

    #[test]
    fn test_dangling_teacher_reference() {
        let records =
            sample_records().with_course(SerialCourse::new(31, "Orphan").with_teacher(99));

        let errors = validate_records(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTeacherReference));
    }

    #[test]
    fn test_dangling_property_reference() {
        let records = sample_records().with_room(SerialRoom::new(21, "R2", 10).with_property(99));

        let errors = validate_records(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPropertyReference));
    }

    #[test]
    fn test_multiple_errors_reported() {
        // Empty block + dangling teacher reference
        let records = SerialProgram::new()
            .with_time_block(SerialTimeBlock::new(0, "Empty"))
            .with_course(SerialCourse::new(30, "Orphan").with_teacher(99));

        let errors = validate_records(&records).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
