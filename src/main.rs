//! `cpu-schedule`: run the simulator on a JSON request.
//!
//! ```text
//! cpu-schedule [FILE]                                  read request from FILE or stdin
//! cpu-schedule --random N [--seed S] [--quantum Q]     simulate a generated workload
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use u_cpu_schedule::runner::{PolicyRunner, RunnerConfig};
use u_cpu_schedule::telemetry::init_tracing;
use u_cpu_schedule::wire::{self, CalculateRequest, WireProcess};
use u_cpu_schedule::workload::WorkloadGenerator;
use u_cpu_schedule::SimulationError;

/// Simulate FCFS and Round Robin scheduling for a process set.
#[derive(Debug, Parser)]
#[command(name = "cpu-schedule", version, about)]
struct Cli {
    /// JSON request file (stdin when omitted)
    #[arg(value_name = "FILE", conflicts_with = "random")]
    file: Option<PathBuf>,

    /// Generate N random processes instead of reading a request
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for the generated workload
    #[arg(long, value_name = "S", default_value_t = 0)]
    seed: u64,

    /// Round Robin quantum for the generated workload
    #[arg(long, value_name = "Q", requires = "random", allow_negative_numbers = true)]
    quantum: Option<i64>,
}

#[derive(Debug)]
enum Source {
    Stdin,
    File(PathBuf),
    Random {
        count: usize,
        seed: u64,
        quantum: Option<i64>,
    },
}

impl Cli {
    fn source(self) -> Source {
        match (self.file, self.random) {
            (_, Some(count)) => Source::Random {
                count,
                seed: self.seed,
                quantum: self.quantum,
            },
            (Some(path), None) => Source::File(path),
            (None, None) => Source::Stdin,
        }
    }
}

fn load_request(source: Source) -> io::Result<Result<CalculateRequest, SimulationError>> {
    let body = match source {
        Source::Stdin => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            body
        }
        Source::File(path) => fs::read_to_string(path)?,
        Source::Random {
            count,
            seed,
            quantum,
        } => {
            info!(count, seed, "generating random workload");
            let processes = WorkloadGenerator::new(count)
                .generate_seeded(seed)
                .into_iter()
                .map(|p| WireProcess {
                    id: p.id,
                    at: p.arrival_time,
                    bt: p.burst_time,
                })
                .collect();
            return Ok(Ok(CalculateRequest { processes, quantum }));
        }
    };
    Ok(serde_json::from_str(&body).map_err(SimulationError::from))
}

fn main() -> ExitCode {
    init_tracing();

    let source = Cli::parse().source();

    let request = match load_request(source) {
        Ok(request) => request,
        Err(err) => {
            error!(%err, "failed to read request");
            return ExitCode::from(1);
        }
    };

    let runner = PolicyRunner::new(RunnerConfig::from_env());
    let response = request.and_then(|req| wire::calculate(&runner, req));

    match response.and_then(|r| serde_json::to_string_pretty(&r).map_err(SimulationError::from)) {
        Ok(body) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "simulation rejected");
            println!("{}", wire::error_json(&err));
            ExitCode::from(2)
        }
    }
}
