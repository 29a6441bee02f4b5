use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::{Error, HostId, Result};

/// Which of a host's two trace files is being addressed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TraceKind {
    /// `proc{NN}.config`: the proposals the host was started with.
    Proposals,
    /// `proc{NN}.output`: the decisions the host logged before it exited.
    Decisions,
}

impl TraceKind {
    fn extension(&self) -> &'static str {
        match self {
            TraceKind::Proposals => "config",
            TraceKind::Decisions => "output",
        }
    }
}

/// File name for one host's trace, host indices zero-padded to two digits.
pub fn file_name(host: HostId, kind: TraceKind) -> String {
    format!("proc{:02}.{}", host, kind.extension())
}

/// Where a run left its per-host trace files.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LogLayout {
    base_dir: PathBuf,
}

impl LogLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Every trace file of a run lives directly under the base directory.
    pub fn trace_path(&self, host: HostId, kind: TraceKind) -> PathBuf {
        self.base_dir.join(file_name(host, kind))
    }

    pub fn ensure_exists(&self) -> Result<()> {
        if self.base_dir.is_dir() {
            Ok(())
        } else {
            Err(Error::MissingLogDir {
                dir: self.base_dir.clone(),
            })
        }
    }
}

impl Display for LogLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base_dir.display())
    }
}
