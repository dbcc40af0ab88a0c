use std::fmt;

use average::Estimate;

use crate::core::{ProcId, Process, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStats {
    pub proc: ProcId,
    pub wait_time: Ticks,
    pub turnaround_time: Ticks,
}

/// Final per-process times and their arithmetic means.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub processes: Vec<ProcessStats>,
    pub avg_wait_time: f64,
    pub avg_turnaround_time: f64,
}

impl Summary {
    pub fn new(procs: &[Process]) -> Self {
        debug_assert!(!procs.is_empty(), "Summary of an empty process set");
        let processes = procs
            .iter()
            .map(|p| ProcessStats {
                proc: p.id,
                wait_time: p.wait_time,
                turnaround_time: p.turnaround_time,
            })
            .collect();
        Self {
            processes,
            avg_wait_time: avg(procs.iter().map(|p| p.wait_time as f64)),
            avg_turnaround_time: avg(procs.iter().map(|p| p.turnaround_time as f64)),
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stats in &self.processes {
            writeln!(f, "\nP{}", stats.proc)?;
            writeln!(f, "\tWaiting time:\t\t{:3}", stats.wait_time)?;
            writeln!(f, "\tTurnaround time:\t{:3}", stats.turnaround_time)?;
        }
        writeln!(f)?;
        writeln!(f, "Total average waiting time:\t{:.1}", self.avg_wait_time)?;
        writeln!(
            f,
            "Total average turnaround time:\t{:.1}",
            self.avg_turnaround_time
        )
    }
}
