//! Synthesizes agreement runs for the validator tests.
//!
//! A generated run is correct by construction: every host's decision for
//! a round is a prefix union of the hosts' proposals, so decisions sit on
//! one inclusion chain and stay inside the all-proposals union. Tests
//! break a run on purpose with the mutators before validating it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use lattice_validator::layout::{file_name, TraceKind};
use lattice_validator::{HostId, Round, Trace, Validator, ValueSet};
use rand::prelude::StdRng;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Run {
    pub nb_agreements: usize,
    pub proposals: BTreeMap<HostId, Trace>,
    pub decisions: BTreeMap<HostId, Trace>,
}

impl Run {
    /// Generates a run that upholds Validity 1, Validity 2 and Consistency.
    pub fn valid(nb_hosts: usize, nb_agreements: usize, rng: &mut StdRng) -> Self {
        let mut proposals: BTreeMap<HostId, Trace> =
            BTreeMap::from_iter((1..=nb_hosts).map(|h| (h, Trace::new())));
        let mut decisions = proposals.clone();

        for _ in 0..nb_agreements {
            let proposed: Vec<ValueSet> = (0..nb_hosts)
                .map(|_| {
                    let n_values = rng.gen_range(0, 4);
                    ValueSet::from_iter((0..n_values).map(|_| rng.gen_range(0u64, 50)))
                })
                .collect();

            // prefix unions of the proposals form the decision chain
            let mut chain = Vec::with_capacity(nb_hosts);
            let mut acc = ValueSet::new();
            for p in proposed.iter() {
                acc.extend(p.iter().copied());
                chain.push(acc.clone());
            }

            for host in 1..=nb_hosts {
                // any prefix that covers the host's own proposal will do
                let cut = rng.gen_range(host - 1, nb_hosts);
                proposals
                    .get_mut(&host)
                    .unwrap()
                    .push(proposed[host - 1].clone());
                decisions.get_mut(&host).unwrap().push(chain[cut].clone());
            }
        }

        Self {
            nb_agreements,
            proposals,
            decisions,
        }
    }

    /// Drops every decision of `host` from round `keep` onwards.
    pub fn truncate_decisions(&mut self, host: HostId, keep: usize) {
        self.decisions.get_mut(&host).unwrap().truncate(keep);
    }

    /// Slips an extra value into one recorded decision.
    pub fn inject_decision_value(&mut self, host: HostId, round: Round, value: u64) {
        self.decisions.get_mut(&host).unwrap()[round].insert(value);
    }

    pub fn validator(&self) -> Validator {
        Validator::from_tables(
            self.proposals.clone(),
            self.decisions.clone(),
            self.nb_agreements,
        )
        .expect("generated proposal traces cover the run")
    }

    /// Writes the run as `proc{NN}.config` / `proc{NN}.output` pairs.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<()> {
        for (host, trace) in self.proposals.iter() {
            let vs = trace.iter().map(ValueSet::len).max().unwrap_or(0).max(1);
            let ds = ValueSet::from_iter(trace.iter().flatten().copied())
                .len()
                .max(1);
            let mut lines = vec![format!("{} {} {}", self.nb_agreements, vs, ds)];
            lines.extend(trace.iter().map(format_set));
            fs::write(
                dir.join(file_name(*host, TraceKind::Proposals)),
                lines.join("\n") + "\n",
            )?;
        }
        for (host, trace) in self.decisions.iter() {
            let lines = Vec::from_iter(trace.iter().map(format_set));
            fs::write(
                dir.join(file_name(*host, TraceKind::Decisions)),
                lines.join("\n") + "\n",
            )?;
        }
        Ok(())
    }
}

pub fn format_set(set: &ValueSet) -> String {
    Vec::from_iter(set.iter().map(u64::to_string)).join(" ")
}

/// Shorthand for building a `ValueSet` literal.
pub fn set(values: impl IntoIterator<Item = u64>) -> ValueSet {
    ValueSet::from_iter(values)
}

/// Builds a trace table from per-host lists of rounds.
pub fn table<const N: usize>(hosts: [(HostId, Vec<ValueSet>); N]) -> BTreeMap<HostId, Trace> {
    BTreeMap::from_iter(hosts)
}
