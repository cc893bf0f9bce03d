//! Recorded landmark streams.
//!
//! A recording is JSON lines, one detector result per tick. `null` or `[]`
//! means no hand; otherwise the line is an array of `{"x", "y", "z"}` objects
//! (`z` may be omitted). Blank lines are skipped.

use crate::{landmarks::LandmarkPoint, Error, Result};
use std::io::BufRead;

/// One recorded detector result
pub type Detection = Result<Option<Vec<LandmarkPoint>>>;

/// Parse a single recording line
///
/// # Errors
///
/// Returns `DetectorFault` if the line is not a valid detector result.
pub fn parse_line(line: &str) -> Detection {
    serde_json::from_str::<Option<Vec<LandmarkPoint>>>(line)
        .map_err(|e| Error::DetectorFault(format!("Malformed landmark record: {e}")))
}

/// Iterate the detector results of a recording
///
/// Parse failures are yielded as errors so the caller can treat them as
/// detector faults; read failures end the stream with an `Io` error.
pub fn read_detections<R: BufRead>(reader: R) -> impl Iterator<Item = Detection> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(parse_line(&line)),
        Err(e) => Some(Err(Error::Io(e))),
    })
}
