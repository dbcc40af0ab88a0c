use std::fmt;

use crate::core::{ProcId, SimCtx, Ticks};

/// What happened on one tick: a process occupied the CPU, or nothing was
/// runnable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Run {
        proc: ProcId,
        remaining: Ticks,
        wait: Ticks,
        turnaround: Ticks,
    },
    Idle,
}

/// One line of the simulation trace. The counters are a start-of-tick
/// snapshot, taken before the tick's execution and accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    pub tick: Ticks,
    pub event: TickEvent,
}

impl TraceRecord {
    pub(crate) fn capture(ctx: &SimCtx, active: Option<ProcId>) -> Self {
        let event = match active {
            Some(id) => {
                let proc = ctx.proc(id);
                TickEvent::Run {
                    proc: id,
                    remaining: proc.remaining_time,
                    wait: proc.wait_time,
                    turnaround: proc.turnaround_time,
                }
            }
            None => TickEvent::Idle,
        };
        Self {
            tick: ctx.now(),
            event,
        }
    }

    pub fn running(&self) -> Option<ProcId> {
        match self.event {
            TickEvent::Run { proc, .. } => Some(proc),
            TickEvent::Idle => None,
        }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.event {
            TickEvent::Run {
                proc,
                remaining,
                wait,
                turnaround,
            } => write!(
                f,
                "T{} : P{} - Burst left {:2}, Wait time {}, Turnaround time {}",
                self.tick, proc, remaining, wait, turnaround
            ),
            TickEvent::Idle => write!(f, "T{} : idle", self.tick),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_run_and_idle_lines() {
        let run = TraceRecord {
            tick: 0,
            event: TickEvent::Run {
                proc: 0,
                remaining: 4,
                wait: 0,
                turnaround: 0,
            },
        };
        assert_eq!(
            run.to_string(),
            "T0 : P0 - Burst left  4, Wait time 0, Turnaround time 0"
        );

        let idle = TraceRecord {
            tick: 3,
            event: TickEvent::Idle,
        };
        assert_eq!(idle.to_string(), "T3 : idle");
    }
}
