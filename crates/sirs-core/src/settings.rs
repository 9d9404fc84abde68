//! Validated simulation settings.
//!
//! # Design
//!
//! The settings file is mirrored 1:1 by [`RawSettings`] (plain serde
//! `Deserialize`, no checks).  The application crate parses the file with
//! whatever format reader it likes (the `outbreak` demo uses `serde_json`)
//! and hands the raw value to [`Settings::validate`], which routes every
//! numeric field through [`Probability`] / [`PositiveNumber`].  The first
//! failing field aborts construction with that field's error — a
//! partially-validated `Settings` is never observable, and nothing is ever
//! silently clamped.
//!
//! `Settings` is immutable once constructed; the driver only reads it.

use std::path::PathBuf;

use crate::error::SettingsError;
use crate::params::{PositiveNumber, Probability};

// ── RawSettings ───────────────────────────────────────────────────────────────

/// Unvalidated mirror of the settings-file keys.
///
/// Field names match the file keys exactly.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RawSettings {
    /// Population size.
    pub n: usize,
    /// Number of timesteps to simulate.
    pub total_time: u64,
    pub initial_infection_probability: f64,
    pub side_length: f64,
    pub contact_radius: f64,
    pub mean_speed: f64,
    pub std_speed: f64,
    pub infection_probability: f64,
    pub recovery_probability: f64,
    pub immunity_loss_probability: f64,
    /// Append per-step aggregate counts to `record_file` during the run.
    #[serde(default)]
    pub record: bool,
    #[serde(default = "default_record_file")]
    pub record_file: PathBuf,
    /// Master RNG seed.  The same seed always produces identical results.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_record_file() -> PathBuf {
    PathBuf::from("states.csv")
}

fn default_seed() -> u64 {
    42
}

// ── Settings ──────────────────────────────────────────────────────────────────

/// Validated, immutable simulation configuration.
///
/// Every numeric field has passed its range check; holders may rely on the
/// wrapper invariants without re-validating.
#[derive(Clone, Debug)]
pub struct Settings {
    pub n: usize,
    pub total_time: u64,
    pub initial_infection_probability: Probability,
    pub infection_probability: Probability,
    pub recovery_probability: Probability,
    pub immunity_loss_probability: Probability,
    /// Side of the square simulation area.  Strictly positive — a zero-area
    /// world has no well-defined positions.
    pub side_length: PositiveNumber,
    pub contact_radius: PositiveNumber,
    pub mean_speed: PositiveNumber,
    pub std_speed: PositiveNumber,
    pub record: bool,
    pub record_file: PathBuf,
    pub seed: u64,
}

impl Settings {
    /// Validate a raw settings value, surfacing the first offending field.
    pub fn validate(raw: RawSettings) -> Result<Settings, SettingsError> {
        fn prob(field: &'static str, v: f64) -> Result<Probability, SettingsError> {
            Probability::new(v).map_err(|e| SettingsError::new(field, e))
        }
        fn pos(field: &'static str, v: f64) -> Result<PositiveNumber, SettingsError> {
            PositiveNumber::new(v).map_err(|e| SettingsError::new(field, e))
        }

        Ok(Settings {
            n: raw.n,
            total_time: raw.total_time,
            initial_infection_probability: prob(
                "initial_infection_probability",
                raw.initial_infection_probability,
            )?,
            infection_probability: prob("infection_probability", raw.infection_probability)?,
            recovery_probability: prob("recovery_probability", raw.recovery_probability)?,
            immunity_loss_probability: prob(
                "immunity_loss_probability",
                raw.immunity_loss_probability,
            )?,
            side_length: PositiveNumber::new_nonzero(raw.side_length)
                .map_err(|e| SettingsError::new("side_length", e))?,
            contact_radius: pos("contact_radius", raw.contact_radius)?,
            mean_speed: pos("mean_speed", raw.mean_speed)?,
            std_speed: pos("std_speed", raw.std_speed)?,
            record: raw.record,
            record_file: raw.record_file,
            seed: raw.seed,
        })
    }
}

impl TryFrom<RawSettings> for Settings {
    type Error = SettingsError;

    fn try_from(raw: RawSettings) -> Result<Settings, SettingsError> {
        Settings::validate(raw)
    }
}

/// Shorthand constructor used throughout the workspace's tests:
/// probabilities and geometry as raw numbers, recording off.
///
/// # Panics
/// Panics on out-of-range inputs, so test intent stays visible at the
/// call site.  Not for use outside `#[cfg(test)]` code.
#[doc(hidden)]
#[allow(clippy::too_many_arguments)]
pub fn test_settings(
    n: usize,
    total_time: u64,
    initial_infection_probability: f64,
    side_length: f64,
    contact_radius: f64,
    mean_speed: f64,
    std_speed: f64,
    infection_probability: f64,
    recovery_probability: f64,
    immunity_loss_probability: f64,
    seed: u64,
) -> Settings {
    Settings::validate(RawSettings {
        n,
        total_time,
        initial_infection_probability,
        side_length,
        contact_radius,
        mean_speed,
        std_speed,
        infection_probability,
        recovery_probability,
        immunity_loss_probability,
        record: false,
        record_file: default_record_file(),
        seed,
    })
    .expect("test settings must validate")
}
