use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};
use serde::Serialize;

use crate::early_stop::EarlyStopTracker;
use crate::layout::{LogLayout, TraceKind};
use crate::properties::RoundContext;
use crate::violation::Violation;
use crate::{trace, Error, HostId, Result, Trace};

/// The outcome of one validation sweep.
///
/// Diagnostics go to stdout as they are found; the report carries the
/// same findings in structured form. An empty `violations` means the run
/// upheld every property that was actually checked, `early_stopped` says
/// which hosts were exempted from checking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub early_stopped: BTreeSet<HostId>,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Replays a recorded run against the lattice agreement safety properties.
///
/// All trace files are read to completion before any check runs; the
/// tables are never mutated afterwards.
#[derive(Debug)]
pub struct Validator {
    nb_agreements: usize,
    proposals: BTreeMap<HostId, Trace>,
    decisions: BTreeMap<HostId, Trace>,
}

impl Validator {
    /// Reads every host's proposal and decision files from the log layout.
    pub fn load(layout: &LogLayout, nb_hosts: usize, nb_agreements: usize) -> Result<Self> {
        info!(
            "loading traces of {} hosts from {}",
            nb_hosts, layout
        );
        let mut proposals = BTreeMap::new();
        let mut decisions = BTreeMap::new();
        for host in 1..=nb_hosts {
            let proposed = trace::read_proposals(&layout.trace_path(host, TraceKind::Proposals))?;
            let decided = trace::read_decisions(&layout.trace_path(host, TraceKind::Decisions))?;
            debug!(
                "host {}: {} proposal rounds, {} decision rounds",
                host,
                proposed.len(),
                decided.len()
            );
            proposals.insert(host, proposed);
            decisions.insert(host, decided);
        }
        Self::from_tables(proposals, decisions, nb_agreements)
    }

    /// Builds a validator over already-extracted tables.
    ///
    /// Proposal traces must cover every agreement of the run; decision
    /// traces may be shorter when a host was stopped early.
    pub fn from_tables(
        proposals: BTreeMap<HostId, Trace>,
        decisions: BTreeMap<HostId, Trace>,
        nb_agreements: usize,
    ) -> Result<Self> {
        for host in decisions.keys() {
            let lines = proposals.get(host).map(Vec::len).unwrap_or(0);
            if lines < nb_agreements {
                return Err(Error::TruncatedProposals {
                    host: *host,
                    lines,
                    expected: nb_agreements,
                });
            }
        }
        Ok(Self {
            nb_agreements,
            proposals,
            decisions,
        })
    }

    /// Runs the full sweep: every round, every host, every host pair.
    ///
    /// Checking never aborts on a violation so one pass reports every
    /// problem the run contains. A host flagged as stopped early is
    /// exempt from every check, at every round, and exempts any pair it
    /// belongs to. That includes rounds the host did decide before
    /// stopping, so a violation committed just before the stop goes
    /// unreported; see DESIGN.md for why this lenient policy is kept.
    pub fn run(&self) -> Report {
        let mut tracker = EarlyStopTracker::new(self.nb_agreements);
        let mut violations = Vec::new();
        let hosts = Vec::from_iter(self.decisions.keys().copied());

        for round in 0..self.nb_agreements {
            let ctx = RoundContext::new(round, &self.proposals);
            debug!(
                "agreement {}: union of proposals has {} values",
                round,
                ctx.proposed_union().len()
            );

            for &host in hosts.iter() {
                let decisions = &self.decisions[&host];
                if tracker.was_stopped_early(host, decisions) {
                    continue;
                }
                let decided = &decisions[round];
                let proposal = &self.proposals[&host][round];

                let checks = [
                    ctx.check_validity1(host, proposal, decided),
                    ctx.check_validity2(host, decided),
                ];
                for violation in checks.into_iter().flatten() {
                    println!("{violation}");
                    violations.push(violation);
                }
            }

            for (i, &h1) in hosts.iter().enumerate() {
                for &h2 in hosts[i + 1..].iter() {
                    if tracker.was_stopped_early(h1, &self.decisions[&h1])
                        || tracker.was_stopped_early(h2, &self.decisions[&h2])
                    {
                        continue;
                    }
                    let pair = (
                        (h1, &self.decisions[&h1][round]),
                        (h2, &self.decisions[&h2][round]),
                    );
                    if let Some(violation) = ctx.check_consistency(pair.0, pair.1) {
                        println!("{violation}");
                        violations.push(violation);
                    }
                }
            }
        }

        if violations.is_empty() {
            println!("Successfully validated all tests");
        }

        info!(
            "sweep finished: {} violations, {} hosts stopped early",
            violations.len(),
            tracker.flagged().len()
        );
        Report {
            early_stopped: tracker.into_flagged(),
            violations,
        }
    }
}
