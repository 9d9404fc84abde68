//! `sirs-agent` — the agent population for the SIRS epidemic simulator.
//!
//! # What lives here
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`health`]     | `Health` — the closed three-state compartment enum   |
//! | [`agent`]      | `Agent` — one mobile point agent                     |
//! | [`population`] | `Population` — creation draws + frozen contact graph |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Builds the O(n²) contact graph on Rayon's thread pool.  |

pub mod agent;
pub mod health;
pub mod population;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::Agent;
pub use health::Health;
pub use population::Population;
