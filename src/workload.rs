use log::warn;
use regex::Regex;

use crate::core::{ProcId, Ticks};

/// One parsed workload entry. Arrival times are data here so the engine
/// stays general; the input layer below pins them to the ordinal rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: ProcId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

/// Build a workload where process `i` arrives at tick `i` — the arrival
/// model used for file input, where a process's arrival is its position
/// among the parsed lines.
pub fn staggered(bursts: &[Ticks]) -> Vec<Job> {
    bursts
        .iter()
        .enumerate()
        .map(|(id, &burst_time)| Job {
            id,
            arrival_time: id as Ticks,
            burst_time,
        })
        .collect()
}

/// Parse workload text, one `P<id>,<burst_time>` entry per line. The
/// textual id is discarded: a process's id is its 0-based position among
/// the successfully parsed lines. Lines that don't match the pattern
/// (including zero or unparseable bursts) are skipped with a warning.
pub fn parse(input: &str) -> Vec<Job> {
    let line_re = Regex::new(r"^P[^,]+,(\d+)$").expect("workload line pattern");

    let mut bursts = Vec::new();
    for (lineno, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let burst = line_re
            .captures(trimmed)
            .and_then(|caps| caps[1].parse::<Ticks>().ok())
            .filter(|&burst| burst > 0);
        match burst {
            Some(burst) => bursts.push(burst),
            None => warn!("skipping malformed workload line {}: {:?}", lineno + 1, line),
        }
    }
    staggered(&bursts)
}
