//! Probe command handler.
//!
//! Shows what the resolver would see without deciding or persisting anything.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use qutescoop_core::{CandidateProbe, CandidateSet, Capability, DirectoryResolver};

use crate::bootstrap::CliContext;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct ProbeRow {
    path: String,
    priority: usize,
    capability: Capability,
    subdirs: BTreeMap<String, Capability>,
}

impl From<&CandidateProbe> for ProbeRow {
    fn from(probe: &CandidateProbe) -> Self {
        Self {
            path: probe.candidate.path.display().to_string(),
            priority: probe.candidate.priority,
            capability: probe.capability,
            subdirs: probe.subdirs.iter().cloned().collect(),
        }
    }
}

/// Probe the platform candidates and print the capability table.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let candidates = CandidateSet::discover().map_err(CliError::from)?;
    let fallback = candidates.fallback().to_path_buf();
    let resolver =
        DirectoryResolver::new(candidates, &ctx.filesystem, &ctx.settings, &ctx.prompter);
    let rows: Vec<ProbeRow> = resolver.probe_candidates().iter().map(ProbeRow::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_table(&rows));
        println!("fallback = {}", fallback.display());
    }
    Ok(())
}

fn render_table(rows: &[ProbeRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "#{} {} [{}]", row.priority, row.path, row.capability);
        for (name, capability) in &row.subdirs {
            let _ = writeln!(out, "    {name:<12} {capability}");
        }
    }
    out
}
