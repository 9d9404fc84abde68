//! The four stochastic transition rules, applied once per timestep.
//!
//! Order is fixed and load-bearing: move, infect, recover, lose immunity.
//! Later rules see the effects of earlier ones within the same step
//! (an agent infected by rule ② is eligible to recover in rule ③ of the
//! same step).
//!
//! # Same-step infection cascades
//!
//! The infect rule reads contacts' health live while iterating agents in
//! ascending id order, so an agent infected earlier in the pass can infect
//! a later agent within the same step.  This matches the reference
//! sequential-iteration semantics and is preserved on purpose — replacing
//! it with a simultaneous-update snapshot would silently change every
//! fixed-seed trajectory.

use std::f64::consts::TAU;

use sirs_agent::{Agent, Health, Population};
use sirs_core::{Settings, SimRng};

use crate::StateCounts;

/// Apply one full timestep to `population` and return the post-step
/// compartment counts.
///
/// The counts always sum to the population size.
pub fn step(population: &mut Population, settings: &Settings, rng: &mut SimRng) -> StateCounts {
    let agents = population.agents_mut();

    move_agents(agents, settings.side_length.get(), rng);
    infect(agents, settings.infection_probability.get(), rng);
    recover(agents, settings.recovery_probability.get(), rng);
    lose_immunity(agents, settings.immunity_loss_probability.get(), rng);

    StateCounts::tally(agents)
}

// ── Rule ①: Move ──────────────────────────────────────────────────────────────

/// Displace every agent by its fixed speed along a fresh uniform heading,
/// wrapping both coordinates onto the torus.
pub(crate) fn move_agents(agents: &mut [Agent], side: f64, rng: &mut SimRng) {
    for agent in agents.iter_mut() {
        let angle = rng.gen_range(0.0..TAU);
        agent.x = wrap(agent.x + agent.speed * angle.cos(), side);
        agent.y = wrap(agent.y + agent.speed * angle.sin(), side);
    }
}

/// Map a raw coordinate onto `[0, side)`.
///
/// `rem_euclid` alone can round up to exactly `side` for a tiny negative
/// input (the mathematically correct `side - ε` is closer to `side` than
/// to the largest representable value below it), so that one boundary
/// case is folded back to `0`.
#[inline]
pub(crate) fn wrap(v: f64, side: f64) -> f64 {
    let w = v.rem_euclid(side);
    if w < side { w } else { 0.0 }
}

// ── Rule ②: Infect ────────────────────────────────────────────────────────────

/// For each susceptible agent, scan its frozen contact list in stored
/// order; every currently-infected contact triggers one independent
/// Bernoulli(`p`) draw, and the first success flips the agent and stops
/// the scan.
///
/// An agent exposed to `k` infected contacts is therefore infected with
/// probability `1 - (1 - p)^m`, where `m ≤ k` is the number of infected
/// contacts scanned before the first success — short-circuit semantics,
/// not a single draw against the whole set.  Agents already infected or
/// recovered are never candidates.
pub(crate) fn infect(agents: &mut [Agent], p: f64, rng: &mut SimRng) {
    for i in 0..agents.len() {
        if agents[i].health != Health::Susceptible {
            continue;
        }
        let mut caught = false;
        for k in 0..agents[i].contacts.len() {
            let j = agents[i].contacts[k].index();
            // Live read: a contact infected earlier in this same pass counts.
            if agents[j].health == Health::Infected && rng.gen_bool(p) {
                caught = true;
                break;
            }
        }
        if caught {
            agents[i].health = Health::Infected;
        }
    }
}

// ── Rule ③: Recover ───────────────────────────────────────────────────────────

/// Every infected agent independently transitions to recovered with
/// probability `p`.
pub(crate) fn recover(agents: &mut [Agent], p: f64, rng: &mut SimRng) {
    for agent in agents.iter_mut() {
        if agent.health == Health::Infected && rng.gen_bool(p) {
            agent.health = Health::Recovered;
        }
    }
}

// ── Rule ④: Lose immunity ─────────────────────────────────────────────────────

/// Every recovered agent independently transitions back to susceptible
/// with probability `p`.
pub(crate) fn lose_immunity(agents: &mut [Agent], p: f64, rng: &mut SimRng) {
    for agent in agents.iter_mut() {
        if agent.health == Health::Recovered && rng.gen_bool(p) {
            agent.health = Health::Susceptible;
        }
    }
}
