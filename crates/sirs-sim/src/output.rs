//! Plain data row types accumulated by the driver.

use sirs_agent::Health;

/// Aggregate compartment counts for one timestep.
///
/// Invariant: the three fields sum to the population size `n` on every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCounts {
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
}

impl StateCounts {
    pub const ZERO: StateCounts = StateCounts {
        susceptible: 0,
        infected: 0,
        recovered: 0,
    };

    /// Count the compartments of a full agent slice.
    pub fn tally(agents: &[sirs_agent::Agent]) -> StateCounts {
        let mut counts = StateCounts::ZERO;
        for agent in agents {
            match agent.health {
                Health::Susceptible => counts.susceptible += 1,
                Health::Infected => counts.infected += 1,
                Health::Recovered => counts.recovered += 1,
            }
        }
        counts
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }
}

/// One agent's post-step position and health — one row per
/// (timestep, agent) pair in the positions table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    /// Timestep, 1-based (`1..=total_time`).
    pub time: u64,
    /// Agent id, 1-based (`1..=n`).
    pub agent_id: u32,
    pub x: f64,
    pub y: f64,
    pub health: Health,
}

/// The finished result of a run: two append-only tables, returned as an
/// immutable value once the population has been discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationOutput {
    /// One row per timestep; row index + 1 is the timestep.
    pub states: Vec<StateCounts>,
    /// One row per (timestep, agent) pair — `n · total_time` rows.
    pub positions: Vec<PositionRow>,
}
