//! Time structure: blocks and periods.
//!
//! A [`TimeBlock`] is an ordered run of consecutive [`ClassPeriod`]s
//! (e.g. "Saturday morning"). Periods are totally ordered by
//! (block position, index within block); a multi-period class occupies
//! consecutive periods within one block and never wraps into the next.

use std::fmt;

use super::{BlockId, PeriodId};

/// An ordered group of consecutive class periods.
#[derive(Debug)]
pub struct TimeBlock {
    id: BlockId,
    description: String,
    position: usize,
    periods: Vec<PeriodId>,
}

impl TimeBlock {
    pub(crate) fn new(
        id: BlockId,
        description: String,
        position: usize,
        periods: Vec<PeriodId>,
    ) -> Self {
        Self {
            id,
            description,
            position,
            periods,
        }
    }

    /// Block identifier.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Position of this block in the program's block ordering.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Periods in this block, in block order.
    pub fn periods(&self) -> &[PeriodId] {
        &self.periods
    }

    /// Number of periods in this block.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the block has no periods. Validation rejects such blocks,
    /// so this is false for any block reachable through a `Program`.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// The run of `length` consecutive periods starting at `start_index`,
    /// or `None` if the block ends first.
    pub fn span_from(&self, start_index: usize, length: usize) -> Option<&[PeriodId]> {
        let end = start_index.checked_add(length)?;
        self.periods.get(start_index..end)
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.id)
        } else {
            f.write_str(&self.description)
        }
    }
}

/// The smallest schedulable time unit.
///
/// Carries a navigational back-reference to its containing block (by
/// identifier — the block owns the period, not the other way around).
#[derive(Debug)]
pub struct ClassPeriod {
    id: PeriodId,
    description: String,
    block: BlockId,
    block_position: usize,
    index: usize,
}

impl ClassPeriod {
    pub(crate) fn new(
        id: PeriodId,
        description: String,
        block: BlockId,
        block_position: usize,
        index: usize,
    ) -> Self {
        Self {
            id,
            description,
            block,
            block_position,
            index,
        }
    }

    /// Period identifier.
    pub fn id(&self) -> PeriodId {
        self.id
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The containing block.
    pub fn block(&self) -> BlockId {
        self.block
    }

    /// Index of this period within its block.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total-ordering key: (block position, index within block).
    pub fn position(&self) -> (usize, usize) {
        (self.block_position, self.index)
    }
}

impl fmt::Display for ClassPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.id)
        } else {
            f.write_str(&self.description)
        }
    }
}
