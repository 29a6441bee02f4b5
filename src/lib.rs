//! Post-hoc validator for lattice agreement execution traces.
//!
//! A run of the protocol leaves one pair of files per host: the proposals
//! it was configured with and the decisions it logged, one set of values
//! per agreement instance. This crate replays those records and checks
//! the safety properties the protocol guarantees:
//!
//! - **Validity 1**: a host decides every value it proposed.
//! - **Validity 2**: a host never decides a value nobody proposed.
//! - **Consistency**: decisions of any two hosts for the same agreement
//!   are comparable by subset inclusion.
//!
//! Violations are findings, not errors: the sweep reports each one and
//! keeps going so a single run surfaces every problem it contains.

use std::collections::BTreeSet;

pub mod early_stop;
pub mod error;
pub mod layout;
pub mod properties;
pub mod trace;
pub mod validator;
pub mod violation;

pub use crate::early_stop::EarlyStopTracker;
pub use crate::error::{Error, Result};
pub use crate::layout::{LogLayout, TraceKind};
pub use crate::properties::RoundContext;
pub use crate::validator::{Report, Validator};
pub use crate::violation::Violation;

/// Hosts are numbered `1..=nb_hosts`, matching their log file names.
pub type HostId = usize;

/// Agreement instances are numbered from zero and shared across hosts:
/// round `r` in one host's trace is the same instance as round `r` in any
/// other host's trace.
pub type Round = usize;

/// The values a host proposes or decides for one agreement instance.
pub type ValueSet = BTreeSet<u64>;

/// One host's proposals or decisions, indexed by round.
pub type Trace = Vec<ValueSet>;
