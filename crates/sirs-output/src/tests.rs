//! Integration tests for the record sink and table exporters.

use tempfile::TempDir;

use sirs_agent::Health;
use sirs_core::settings::test_settings;
use sirs_sim::{PositionRow, Simulation, StateCounts};

use crate::csv::RecordWriter;
use crate::observer::RecordObserver;
use crate::{write_positions_csv, write_states_csv};

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn counts(s: usize, i: usize, r: usize) -> StateCounts {
    StateCounts {
        susceptible: s,
        infected: i,
        recovered: r,
    }
}

#[cfg(test)]
mod record_sink {
    use super::*;

    #[test]
    fn creates_file_with_exact_header() {
        let dir = tmp();
        let path = dir.path().join("states.csv");
        let mut w = RecordWriter::create(&path).unwrap();
        w.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().next(), Some("Susceptible,Infected,Recovered"));
    }

    #[test]
    fn appends_one_line_per_step_in_order() {
        let dir = tmp();
        let path = dir.path().join("states.csv");
        let mut w = RecordWriter::create(&path).unwrap();
        w.append(&counts(8, 2, 0)).unwrap();
        w.append(&counts(7, 2, 1)).unwrap();
        w.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, ["Susceptible,Infected,Recovered", "8,2,0", "7,2,1"]);
    }

    #[test]
    fn create_truncates_an_existing_file() {
        let dir = tmp();
        let path = dir.path().join("states.csv");
        std::fs::write(&path, "stale contents\nmore stale\n").unwrap();

        let mut w = RecordWriter::create(&path).unwrap();
        w.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Susceptible,Infected,Recovered\n");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = RecordWriter::create(&dir.path().join("states.csv")).unwrap();
        w.append(&counts(1, 0, 0)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn unwritable_path_fails_at_open() {
        let result = RecordWriter::create(std::path::Path::new(
            "/nonexistent-dir-for-sure/states.csv",
        ));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod record_observer {
    use super::*;

    #[test]
    fn sink_mirrors_the_returned_states_table() {
        let dir = tmp();
        let path = dir.path().join("states.csv");

        let s = test_settings(10, 15, 0.2, 100.0, 10.0, 1.0, 0.1, 0.2, 0.05, 0.01, 42);
        let mut obs = RecordObserver::new(RecordWriter::create(&path).unwrap());
        let output = Simulation::new(s).run(&mut obs);
        assert!(obs.take_error().is_none());

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1 + 15);
        assert_eq!(lines[0], "Susceptible,Infected,Recovered");
        for (line, row) in lines[1..].iter().zip(&output.states) {
            assert_eq!(
                *line,
                format!("{},{},{}", row.susceptible, row.infected, row.recovered)
            );
        }
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn mid_run_write_failure_is_non_fatal_and_stored() {
        // /dev/full accepts the open but rejects every flush with ENOSPC.
        // The sink buffers ~8 KiB, so 4000 six-byte count lines guarantee
        // a failing flush mid-run, not just at finish.  The run itself
        // must complete with its in-memory tables intact; only the first
        // error is kept and later appends are skipped.
        let s = test_settings(0, 4000, 0.0, 100.0, 10.0, 1.0, 0.1, 0.2, 0.05, 0.01, 42);
        let writer = RecordWriter::create(std::path::Path::new("/dev/full")).unwrap();
        let mut obs = RecordObserver::new(writer);
        let output = Simulation::new(s).run(&mut obs);

        assert_eq!(output.states.len(), 4000);
        assert!(output.states.iter().all(|c| c.total() == 0));
        assert!(obs.take_error().is_some());
        assert!(obs.take_error().is_none(), "take_error drains the slot");
    }
}

#[cfg(test)]
mod exporters {
    use super::*;

    #[test]
    fn states_table_header_and_rows() {
        let dir = tmp();
        let path = dir.path().join("out_states.csv");
        write_states_csv(&path, &[counts(9, 1, 0), counts(8, 1, 1)]).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["susceptible", "infected", "recovered"]);
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "9");
        assert_eq!(&rows[1][2], "1");
    }

    #[test]
    fn positions_table_header_and_labels() {
        let dir = tmp();
        let path = dir.path().join("out_positions.csv");
        let rows = vec![
            PositionRow {
                time: 1,
                agent_id: 1,
                x: 10.5,
                y: 20.25,
                health: Health::Infected,
            },
            PositionRow {
                time: 1,
                agent_id: 2,
                x: 0.0,
                y: 99.0,
                health: Health::Susceptible,
            },
        ];
        write_positions_csv(&path, &rows).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "agent_id", "x", "y", "health"]);
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&read[0][4], "Infected");
        assert_eq!(&read[1][4], "Susceptible");
        assert_eq!(&read[0][2], "10.5");
    }
}
