//! Population creation: initial draws and the frozen contact graph.
//!
//! # Draw order
//!
//! For each agent id 1..=n, in order: health (Bernoulli on
//! `initial_infection_probability`), `x`, `y` (uniform in
//! `[0, side_length)`), then speed (`|mean_speed + std_speed · N(0,1)|`).
//! This order is part of the reproducibility contract — reordering the
//! draws changes every fixed-seed run.
//!
//! # Contact graph
//!
//! After all agents exist, one O(n²) pass computes each agent's contact
//! list: `j ∈ contacts(i)` iff `distance(i, j) < contact_radius` and
//! `i ≠ j`.  Both directions of each pair are evaluated independently, but
//! the distance predicate is symmetric, so the stored relation is too (a
//! tested invariant, not an assumption).  The lists are never recomputed:
//! this snapshot is the only transmission topology the run will ever use.

use sirs_core::{AgentId, Settings, SimRng};

use crate::{Agent, Health};

/// The agent population for one run.
///
/// Created once per run, mutated in place by each timestep, exclusively
/// owned by the driver for the run's duration, and discarded when the run
/// ends — only the accumulated output tables survive it.
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Create `settings.n` agents and freeze their contact graph.
    ///
    /// `n = 0` yields an empty population — a degenerate but valid run.
    pub fn create(settings: &Settings, rng: &mut SimRng) -> Population {
        let n = settings.n;
        let side = settings.side_length.get();
        let p0 = settings.initial_infection_probability.get();
        let mean_speed = settings.mean_speed.get();
        let std_speed = settings.std_speed.get();

        let mut agents = Vec::with_capacity(n);
        for i in 0..n {
            let health = if rng.gen_bool(p0) {
                Health::Infected
            } else {
                Health::Susceptible
            };
            let x = rng.gen_range(0.0..side);
            let y = rng.gen_range(0.0..side);
            let speed = (mean_speed + std_speed * rng.standard_normal()).abs();

            agents.push(Agent {
                id: AgentId::from_index(i),
                health,
                x,
                y,
                speed,
                contacts: Vec::new(),
            });
        }

        let mut population = Population { agents };
        population.freeze_contacts(settings.contact_radius.get());
        population
    }

    /// Wrap an explicit agent list, taking its contact lists as given.
    ///
    /// For crafted scenarios (tests, replays); [`Population::create`] is
    /// the normal path and the only one that computes the contact graph.
    pub fn from_agents(agents: Vec<Agent>) -> Population {
        Population { agents }
    }

    /// The O(n²) contact-graph pass.  Runs exactly once, at creation.
    fn freeze_contacts(&mut self, radius: f64) {
        let lists = contact_lists(&self.agents, radius);
        for (agent, contacts) in self.agents.iter_mut().zip(lists) {
            agent.contacts = contacts;
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

// ── Contact-list construction ─────────────────────────────────────────────────

/// Compute every agent's contact list against the frozen positions.
///
/// Each list is an independent pure function of the (immutable) position
/// array, so the `parallel` build produces byte-identical output to the
/// sequential one.
#[cfg(not(feature = "parallel"))]
fn contact_lists(agents: &[Agent], radius: f64) -> Vec<Vec<AgentId>> {
    agents
        .iter()
        .map(|agent| contacts_of(agent, agents, radius))
        .collect()
}

#[cfg(feature = "parallel")]
fn contact_lists(agents: &[Agent], radius: f64) -> Vec<Vec<AgentId>> {
    use rayon::prelude::*;

    agents
        .par_iter()
        .map(|agent| contacts_of(agent, agents, radius))
        .collect()
}

/// All agents strictly within `radius` of `agent`, excluding itself,
/// in ascending id order (the array's scan order).
fn contacts_of(agent: &Agent, agents: &[Agent], radius: f64) -> Vec<AgentId> {
    agents
        .iter()
        .filter(|other| other.id != agent.id && agent.distance_to(other) < radius)
        .map(|other| other.id)
        .collect()
}
