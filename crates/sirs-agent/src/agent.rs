//! One mobile point agent.

use sirs_core::AgentId;

use crate::Health;

/// A single agent: an owned record inside the population's contiguous `Vec`.
///
/// The driver mutates agents via index only; no aliased references are ever
/// handed out across a rule application.
#[derive(Clone, Debug)]
pub struct Agent {
    /// Unique 1-based identity, assigned at creation, never reassigned.
    pub id: AgentId,

    /// Current compartment.  Mutated in place by the transition rules.
    pub health: Health,

    /// Position in `[0, side_length)²`; wraps toroidally on movement.
    pub x: f64,
    pub y: f64,

    /// Per-step displacement magnitude.  Drawn once at creation from
    /// `|mean_speed + std_speed · N(0,1)|` and fixed for the agent's
    /// lifetime.
    pub speed: f64,

    /// The ids of agents within `contact_radius` of this agent **at
    /// population-creation time**, in ascending id order.
    ///
    /// A frozen snapshot: infection spreads only through this list for the
    /// lifetime of the run, no matter where the agents move afterwards.
    pub contacts: Vec<AgentId>,
}

impl Agent {
    /// Euclidean distance to `other` at the agents' current positions.
    ///
    /// Plain (non-wrapping) distance: the contact graph is defined on raw
    /// coordinates, not on the torus.
    #[inline]
    pub fn distance_to(&self, other: &Agent) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
