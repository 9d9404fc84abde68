//! Strongly typed agent identifier.
//!
//! Agent IDs are 1-based (`1..=n`), matching the numbering used in the
//! positions table.  The inner integer is `pub` for direct inspection, but
//! callers indexing into the population `Vec` should go through
//! [`AgentId::index`], which handles the 1-based offset.

use std::fmt;

/// The 1-based identity of an agent within a population.
///
/// Assigned once at population creation, never reused or reassigned.
/// `u32` caps the population at ~4.3 billion agents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Build an ID from a 0-based position in the population `Vec`.
    #[inline(always)]
    pub fn from_index(i: usize) -> AgentId {
        AgentId(i as u32 + 1)
    }

    /// The 0-based position of this agent in the population `Vec`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for u32 {
    #[inline(always)]
    fn from(id: AgentId) -> u32 {
        id.0
    }
}
