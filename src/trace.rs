use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::{Error, Result, Trace, ValueSet};

/// Reads a host's decision trace: one value set per line, in round order.
///
/// A decision trace may be shorter than the number of agreements in the
/// run if the host was stopped before deciding them all.
pub fn read_decisions(path: &Path) -> Result<Trace> {
    parse_trace(path)
}

/// Reads a host's proposal trace, dropping the leading header line so
/// entries line up with round indices.
pub fn read_proposals(path: &Path) -> Result<Trace> {
    let mut rounds = parse_trace(path)?;
    if rounds.is_empty() {
        return Err(Error::MissingProposalHeader {
            path: path.to_path_buf(),
        });
    }
    rounds.remove(0);
    Ok(rounds)
}

/// Splits one trace line into the set of values it carries.
///
/// A line that is empty after trimming is a recorded round with no
/// values, it parses to the empty set rather than being skipped so that
/// line position keeps mapping 1:1 to round index. On failure returns the
/// offending token.
pub fn parse_value_set(line: &str) -> std::result::Result<ValueSet, String> {
    line.split_whitespace()
        .map(|token| token.parse::<u64>().map_err(|_| token.to_string()))
        .collect()
}

fn parse_trace(path: &Path) -> Result<Trace> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::MissingTraceFile {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    let mut rounds = Trace::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let set = parse_value_set(&line?).map_err(|token| Error::MalformedTrace {
            path: path.to_path_buf(),
            line: idx + 1,
            token,
        })?;
        rounds.push(set);
    }

    debug!("read {} rounds from {:?}", rounds.len(), path);
    Ok(rounds)
}
