//! Room and room property entities.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use crate::serial::{SerialRoom, SerialRoomProperty};

use super::{PeriodId, PropertyId, RoomId};

/// A tag attachable to rooms (e.g. "has projector").
#[derive(Debug)]
pub struct RoomProperty {
    serial: SerialRoomProperty,
}

impl RoomProperty {
    pub(crate) fn new(serial: SerialRoomProperty) -> Self {
        Self { serial }
    }

    /// Property identifier.
    pub fn id(&self) -> PropertyId {
        self.serial.property_id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.serial.name
    }
}

impl fmt::Display for RoomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.serial.name.is_empty() {
            write!(f, "{}", self.id())
        } else {
            f.write_str(&self.serial.name)
        }
    }
}

/// A room in which sections may be scheduled.
///
/// Wraps the room's record; the availability and property sets are
/// resolved on first access and memoized.
#[derive(Debug)]
pub struct Room {
    serial: SerialRoom,
    available: OnceLock<HashSet<PeriodId>>,
    properties: OnceLock<HashSet<PropertyId>>,
}

impl Room {
    pub(crate) fn new(serial: SerialRoom) -> Self {
        Self {
            serial,
            available: OnceLock::new(),
            properties: OnceLock::new(),
        }
    }

    /// Room identifier.
    pub fn id(&self) -> RoomId {
        self.serial.room_id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.serial.name
    }

    /// Seating capacity.
    pub fn capacity(&self) -> u32 {
        self.serial.capacity
    }

    /// Periods this room is available for scheduling.
    pub fn available_periods(&self) -> &HashSet<PeriodId> {
        self.available
            .get_or_init(|| self.serial.available_periods.iter().copied().collect())
    }

    /// Whether this room is available during a period.
    pub fn is_available(&self, period: PeriodId) -> bool {
        self.available_periods().contains(&period)
    }

    /// Properties this room offers.
    pub fn properties(&self) -> &HashSet<PropertyId> {
        self.properties
            .get_or_init(|| self.serial.room_properties.iter().copied().collect())
    }

    /// Whether this room offers a property.
    pub fn has_property(&self, property: PropertyId) -> bool {
        self.properties().contains(&property)
    }
}

impl fmt::Display for Room {
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
    fn test_room_accessors() {
        let r = Room::new(
            SerialRoom::new(5, "R1", 30)
                .with_available_period(1)
                .with_available_period(2)
                .with_property(9),
        );

        assert_eq!(r.id(), RoomId(5));
        assert_eq!(r.capacity(), 30);
        assert!(r.is_available(PeriodId(1)));
        assert!(!r.is_available(PeriodId(3)));
        assert!(r.has_property(PropertyId(9)));
        assert!(!r.has_property(PropertyId(8)));
    }

    #[test]
    fn test_property_sets_memoized() {
        let r = Room::new(SerialRoom::new(5, "R1", 30).with_property(9));
        let first = r.properties() as *const _;
        let second = r.properties() as *const _;
        assert_eq!(first, second);
    }
}
