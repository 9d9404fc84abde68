//! outbreak — run one SIRS epidemic from a JSON settings file.
//!
//! ```text
//! cargo run -p outbreak -- demos/outbreak/settings.json
//! ```
//!
//! Writes three CSV artifacts next to the configured `record_file`:
//! the live record sink (when `record` is true) plus the finished states
//! and positions tables for external plotting.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use sirs_core::{RawSettings, Settings};
use sirs_output::{RecordObserver, RecordWriter, write_positions_csv, write_states_csv};
use sirs_sim::{NoopObserver, Simulation, SimulationOutput, StateCounts};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "settings.json".to_string());

    // 1. Load and validate settings.
    let file = File::open(&path).with_context(|| format!("open settings file `{path}`"))?;
    let raw: RawSettings =
        serde_json::from_reader(file).with_context(|| format!("parse settings file `{path}`"))?;
    let settings = Settings::validate(raw).context("validate settings")?;

    println!("=== outbreak — agent-based SIRS epidemic ===");
    println!(
        "Agents: {}  |  Steps: {}  |  Seed: {}",
        settings.n, settings.total_time, settings.seed
    );
    println!(
        "Area: {:.1} × {:.1}  |  Contact radius: {:.1}  |  Speed: {:.2} ± {:.2}",
        settings.side_length.get(),
        settings.side_length.get(),
        settings.contact_radius.get(),
        settings.mean_speed.get(),
        settings.std_speed.get(),
    );
    println!();

    // 2. Run, with the record sink attached when recording is enabled.
    if let Some(parent) = settings.record_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory `{}`", parent.display()))?;
    }
    let t0 = Instant::now();
    let output = run_with_sink(settings.clone())?;
    let elapsed = t0.elapsed();

    // 3. Export the two tables for external visualization.
    let out_dir = settings
        .record_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let states_path = out_dir.join("states_table.csv");
    let positions_path = out_dir.join("positions_table.csv");
    write_states_csv(&states_path, &output.states).context("write states table")?;
    write_positions_csv(&positions_path, &output.positions).context("write positions table")?;

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {} : {} rows", states_path.display(), output.states.len());
    println!(
        "  {} : {} rows",
        positions_path.display(),
        output.positions.len()
    );
    if settings.record {
        println!(
            "  {} : record sink, {} lines + header",
            settings.record_file.display(),
            output.states.len()
        );
    }
    println!();

    let final_counts = output.states.last().copied().unwrap_or(StateCounts::ZERO);
    println!("{:<14} {:<10} {:<10}", "Susceptible", "Infected", "Recovered");
    println!("{}", "-".repeat(34));
    println!(
        "{:<14} {:<10} {:<10}",
        final_counts.susceptible, final_counts.infected, final_counts.recovered
    );

    Ok(())
}

/// Build and run the simulation, attaching the record sink if enabled.
///
/// A sink write failure mid-run is reported on stderr but does not abort
/// the run; a sink that cannot even be opened is a hard error.
fn run_with_sink(settings: Settings) -> Result<SimulationOutput> {
    if settings.record {
        let writer = RecordWriter::create(&settings.record_file).with_context(|| {
            format!("open record file `{}`", settings.record_file.display())
        })?;
        let mut observer = RecordObserver::new(writer);
        let output = Simulation::new(settings).run(&mut observer);
        if let Some(e) = observer.take_error() {
            eprintln!("warning: record sink failed mid-run: {e}");
        }
        Ok(output)
    } else {
        Ok(Simulation::new(settings).run(&mut NoopObserver))
    }
}
