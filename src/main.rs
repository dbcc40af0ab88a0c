use std::fs;
use std::num::NonZeroU64;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use schedsim::{workload, FcfsScheduler, RoundRobinScheduler, Scheduler, Sim, SjfScheduler};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("schedsim")
        .about("Discrete-time CPU scheduling simulator")
        .arg(
            Arg::new("fcfs")
                .short('f')
                .action(ArgAction::SetTrue)
                .help("First Come First Served"),
        )
        .arg(
            Arg::new("sjf")
                .short('s')
                .action(ArgAction::SetTrue)
                .help("Shortest Job First (preemptive on remaining time)"),
        )
        .arg(
            Arg::new("quantum")
                .short('r')
                .value_name("QUANTUM")
                .value_parser(value_parser!(u64).range(1..))
                .help("Round Robin with the given time quantum"),
        )
        .group(
            ArgGroup::new("algorithm")
                .args(["fcfs", "sjf", "quantum"])
                .required(true),
        )
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .required(true)
                .help("Workload file, one P<id>,<burst_time> line per process"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("input")
        .expect("input file is required");
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;

    let jobs = workload::parse(&contents);
    if jobs.is_empty() {
        bail!("no processes to schedule");
    }

    if matches.get_flag("fcfs") {
        println!("First Come First Served");
        run(Sim::new(jobs, FcfsScheduler::new()));
    } else if matches.get_flag("sjf") {
        println!("Shortest Job First");
        run(Sim::new(jobs, SjfScheduler::new()));
    } else {
        let quantum = *matches
            .get_one::<u64>("quantum")
            .expect("the algorithm group guarantees a quantum");
        let quantum = NonZeroU64::new(quantum).expect("clap rejects a zero quantum");
        println!("Round Robin with Quantum {quantum}");
        run(Sim::new(jobs, RoundRobinScheduler::new(quantum)));
    }

    Ok(())
}

fn run<S: Scheduler>(mut sim: Sim<S>) {
    while !sim.all_complete() {
        println!("{}", sim.step());
    }
    print!("{}", sim.summary());
}
