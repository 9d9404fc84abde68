//! Simulation observer trait for progress reporting and record sinks.

use crate::StateCounts;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at step
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks return nothing; an observer
/// that can fail (a file-backed record sink, say) stores its error
/// internally and exposes it after the run.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: u64, counts: &StateCounts) {
///         if step % self.interval == 0 {
///             println!("step {step}: {} infected", counts.infected);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each step, before any rule runs.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called after all four rules, with the post-step compartment counts.
    fn on_step_end(&mut self, _step: u64, _counts: &StateCounts) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
