//! The `Simulation` driver and its step loop.

use sirs_agent::Population;
use sirs_core::{Settings, SimRng};

use crate::SimObserver;
use crate::output::{PositionRow, SimulationOutput, StateCounts};
use crate::step::step;

/// The simulation driver.
///
/// Owns the validated settings, the agent population, and the run's RNG.
/// Steps are strictly sequential: one timestep fully completes (all four
/// rules over all agents, plus output accumulation) before the next
/// begins.  The population is exclusively owned here for the run's
/// duration; no external mutation is possible mid-run.
pub struct Simulation {
    pub settings: Settings,
    pub population: Population,
    rng: SimRng,
    /// Steps completed so far (0 before the first step).
    pub current_step: u64,
}

impl Simulation {
    /// Build the initial population from validated settings.
    ///
    /// All creation draws come from the settings' seed, so constructing
    /// twice from the same settings yields identical populations.
    pub fn new(settings: Settings) -> Simulation {
        let mut rng = SimRng::new(settings.seed);
        let population = Population::create(&settings, &mut rng);
        Simulation {
            settings,
            population,
            rng,
            current_step: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current position to `total_time`, consuming the
    /// simulation and returning the accumulated output tables.
    ///
    /// The population is discarded on return — only the per-step
    /// aggregates and snapshots survive the run.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimulationOutput {
        // Saturate: a caller may already have stepped past total_time via
        // `run_steps`, which ignores the end bound.
        let remaining = self.settings.total_time.saturating_sub(self.current_step);
        let mut output = SimulationOutput {
            states: Vec::with_capacity(remaining as usize),
            positions: Vec::with_capacity(remaining as usize * self.population.len()),
        };
        self.run_steps(remaining, observer, &mut output);
        observer.on_sim_end(self.current_step);
        output
    }

    /// Advance exactly `n` steps, appending to `output`.
    ///
    /// Useful for tests and incremental stepping; `run` is implemented on
    /// top of it.
    pub fn run_steps<O: SimObserver>(
        &mut self,
        n: u64,
        observer: &mut O,
        output: &mut SimulationOutput,
    ) {
        for _ in 0..n {
            let now = self.current_step + 1;
            observer.on_step_start(now);

            let counts = self.step_once();
            debug_assert_eq!(counts.total(), self.population.len());

            output.states.push(counts);
            for agent in self.population.agents() {
                output.positions.push(PositionRow {
                    time: now,
                    agent_id: agent.id.into(),
                    x: agent.x,
                    y: agent.y,
                    health: agent.health,
                });
            }

            observer.on_step_end(now, &counts);
        }
    }

    /// Apply one timestep without recording any output rows.
    pub fn step_once(&mut self) -> StateCounts {
        let counts = step(&mut self.population, &self.settings, &mut self.rng);
        self.current_step += 1;
        counts
    }
}

/// Convenience entry point: build and run a whole simulation in one call.
pub fn run<O: SimObserver>(settings: Settings, observer: &mut O) -> SimulationOutput {
    Simulation::new(settings).run(observer)
}
