//! Typed entity identifiers.
//!
//! Every entity kind is keyed by a small dense integer within its kind.
//! Newtypes keep the kinds apart at compile time — a `RoomId` can never
//! be passed where a `PeriodId` is expected, even though both are `u32`
//! on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Teacher`](super::Teacher).
    TeacherId,
    "teacher#"
);
entity_id!(
    /// Identifier of a [`TimeBlock`](super::TimeBlock).
    BlockId,
    "block#"
);
entity_id!(
    /// Identifier of a [`ClassPeriod`](super::ClassPeriod).
    PeriodId,
    "period#"
);
entity_id!(
    /// Identifier of a [`Room`](super::Room).
    RoomId,
    "room#"
);
entity_id!(
    /// Identifier of a [`RoomProperty`](super::RoomProperty).
    PropertyId,
    "property#"
);
entity_id!(
    /// Identifier of a [`Course`](super::Course).
    CourseId,
    "course#"
);
entity_id!(
    /// Identifier of a [`Section`](super::Section).
    ///
    /// Unlike the other kinds, section identifiers are not present in the
    /// record store: they are assigned densely by
    /// [`Program`](super::Program) construction, in (course, section index)
    /// order.
    SectionId,
    "section#"
);

/// Entity kinds, used to report which lookup table a failed
/// identifier resolution targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Teacher,
    TimeBlock,
    ClassPeriod,
    Room,
    RoomProperty,
    Course,
    Section,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Teacher => "teacher",
            EntityKind::TimeBlock => "time block",
            EntityKind::ClassPeriod => "class period",
            EntityKind::Room => "room",
            EntityKind::RoomProperty => "room property",
            EntityKind::Course => "course",
            EntityKind::Section => "section",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RoomId(3).to_string(), "room#3");
        assert_eq!(PeriodId(0).to_string(), "period#0");
        assert_eq!(EntityKind::ClassPeriod.to_string(), "class period");
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time property; just exercise conversions.
        let r: RoomId = 7u32.into();
        assert_eq!(r, RoomId(7));
    }
}
