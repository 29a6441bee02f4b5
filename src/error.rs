use std::path::PathBuf;

use thiserror::Error;

use crate::HostId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("We experienced an IO error")]
    Io(#[from] std::io::Error),
    #[error("The log directory {dir:?} does not exist")]
    MissingLogDir { dir: PathBuf },
    #[error("Expected trace file {path:?} is missing")]
    MissingTraceFile { path: PathBuf },
    #[error("Proposal file {path:?} is empty, it must start with the header line")]
    MissingProposalHeader { path: PathBuf },
    #[error("Trace {path:?} line {line}: {token:?} is not a non-negative integer")]
    MalformedTrace {
        path: PathBuf,
        line: usize,
        token: String,
    },
    #[error(
        "Host {host} has {lines} proposal rounds but the run expects {expected}, the config file is truncated"
    )]
    TruncatedProposals {
        host: HostId,
        lines: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
