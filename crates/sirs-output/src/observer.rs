//! `RecordObserver` — bridges `SimObserver` to the record sink.

use sirs_sim::{SimObserver, StateCounts};

use crate::OutputError;
use crate::csv::RecordWriter;

/// A [`SimObserver`] that appends every step's aggregate counts to a
/// [`RecordWriter`].
///
/// Errors are stored internally because observer hooks have no return
/// value — and deliberately so: a failing sink must not abort or corrupt
/// the in-memory run.  After `run()` returns, check for a write failure
/// with [`take_error`][Self::take_error].  Only the first error is kept;
/// later appends are skipped once the sink has failed.
pub struct RecordObserver {
    writer: RecordWriter,
    last_error: Option<OutputError>,
}

impl RecordObserver {
    pub fn new(writer: RecordWriter) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl SimObserver for RecordObserver {
    fn on_step_end(&mut self, _step: u64, counts: &StateCounts) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.append(counts);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_step: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
