//! `sirs-output` — file-backed output for the SIRS simulator.
//!
//! Two concerns live here:
//!
//! - the **record sink**: the per-step aggregate-counts CSV appended to
//!   live during a run ([`RecordWriter`] + [`RecordObserver`]);
//! - **table export**: writing a finished run's states and positions
//!   tables to CSV for external visualization
//!   ([`write_states_csv`], [`write_positions_csv`]).
//!
//! The record sink is a side channel: it must reflect the same counts as
//! the returned `SimulationOutput`, and a failed write never aborts the
//! simulation — the first error is stored in the observer and surfaced
//! after the run via [`RecordObserver::take_error`].

pub mod csv;
pub mod error;
pub mod observer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::{RecordWriter, write_positions_csv, write_states_csv};
pub use error::{OutputError, OutputResult};
pub use observer::RecordObserver;
