//! `sirs-core` — foundational types for the SIRS epidemic simulator.
//!
//! This crate is a dependency of every other `sirs-*` crate.  It intentionally
//! has no `sirs-*` dependencies and minimal external ones (`rand`,
//! `rand_distr`, `thiserror`, and `serde` for the settings mirror).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `AgentId`                                           |
//! | [`params`]   | `Probability`, `PositiveNumber` range-checked values|
//! | [`rng`]      | `SimRng` — the run's single deterministic RNG       |
//! | [`settings`] | `RawSettings` (file mirror), validated `Settings`   |
//! | [`error`]    | `SettingsError`                                     |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod settings;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::SettingsError;
pub use ids::AgentId;
pub use params::{PositiveNumber, Probability, RangeError};
pub use rng::SimRng;
pub use settings::{RawSettings, Settings};
