//! `sirs-sim` — timestep loop orchestrator for the SIRS simulator.
//!
//! # Four-rule timestep
//!
//! ```text
//! for step in 1..=total_time:
//!   ① Move            — uniform random heading, toroidal wrap
//!   ② Infect          — scan each susceptible agent's frozen contact list;
//!                       one Bernoulli draw per infected contact,
//!                       short-circuiting at the first success
//!   ③ Recover         — each infected agent, Bernoulli(recovery_probability)
//!   ④ Lose immunity   — each recovered agent, Bernoulli(immunity_loss_probability)
//!   then: count compartments, append one states row and n position rows
//! ```
//!
//! Rules run in this fixed order and agents are processed in ascending id
//! order within each rule; both orderings are part of the reproducibility
//! contract.  One step fully completes before the next begins.
//!
//! The per-step transition ([`step`]) is a pure function of pre-step state
//! and random draws; persisting aggregates is a separate concern handled by
//! [`SimObserver`] implementations, so the transition logic is testable
//! without touching any I/O resource.

pub mod observer;
pub mod output;
pub mod sim;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use observer::{NoopObserver, SimObserver};
pub use output::{PositionRow, SimulationOutput, StateCounts};
pub use sim::{Simulation, run};
pub use step::step;
