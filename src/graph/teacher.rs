//! Teacher entity.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use crate::serial::SerialTeacher;

use super::{PeriodId, TeacherId};

/// A teacher at the program and the periods they can teach.
///
/// Wraps the teacher's record; the availability set is resolved on first
/// access and memoized.
#[derive(Debug)]
pub struct Teacher {
    serial: SerialTeacher,
    available: OnceLock<HashSet<PeriodId>>,
}

impl Teacher {
    pub(crate) fn new(serial: SerialTeacher) -> Self {
        Self {
            serial,
            available: OnceLock::new(),
        }
    }

    /// Teacher identifier.
    pub fn id(&self) -> TeacherId {
        self.serial.teacher_id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.serial.name
    }

    /// Periods this teacher is available to teach.
    ///
    /// Computed once from the record's identifier list; every identifier
    /// is known to resolve because the record store was validated at
    /// graph construction.
    pub fn available_periods(&self) -> &HashSet<PeriodId> {
        self.available
            .get_or_init(|| self.serial.available_periods.iter().copied().collect())
    }

    /// Whether this teacher is available during a period.
    pub fn is_available(&self, period: PeriodId) -> bool {
        self.available_periods().contains(&period)
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.serial.name.is_empty() {
            write!(f, "{}", self.id())
        } else {
            f.write_str(&self.serial.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_memoized() {
        let t = Teacher::new(
            SerialTeacher::new(1, "T1")
                .with_available_period(3)
                .with_available_period(4),
        );

        let first = t.available_periods() as *const _;
        let second = t.available_periods() as *const _;
        assert_eq!(first, second);

        assert!(t.is_available(PeriodId(3)));
        assert!(!t.is_available(PeriodId(5)));
    }

    #[test]
    fn test_display_falls_back_to_id() {
        let named = Teacher::new(SerialTeacher::new(1, "Ada"));
        assert_eq!(named.to_string(), "Ada");

        let unnamed = Teacher::new(SerialTeacher::new(2, ""));
        assert_eq!(unnamed.to_string(), "teacher#2");
    }
}
