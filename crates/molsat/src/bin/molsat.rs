use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::ArgAction;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use itertools::Itertools;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use molsat::Cnf;
use molsat::Outcome;
use molsat::Solver;
use molsat::SolverConfig;
use molsat::SolverError;

/// Solve a SAT instance in a simulated DNA test tube.
#[derive(Debug, Parser)]
#[command(name = "molsat", version, about)]
struct Cli {
    /// DIMACS CNF file.
    #[arg(required_unless_present = "clauses", conflicts_with = "clauses")]
    input: Option<PathBuf>,

    /// Clauses in compact form, e.g. "1 2 -3; -1 2".
    #[arg(short, long)]
    clauses: Option<String>,

    /// JSON file with solver settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed of the random source.
    #[arg(short, long)]
    seed: Option<u64>,

    /// PCR rounds of the first amplification.
    #[arg(long)]
    pcr_rounds: Option<usize>,

    /// Length of node and literal sequences.
    #[arg(long)]
    node_length: Option<usize>,

    /// Use error-free probes.
    #[arg(long)]
    exact: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn solver_config(&self) -> Result<SolverConfig, SolverError> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_json_file(path)?,
            None => SolverConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(rounds) = self.pcr_rounds {
            config.pcr_rounds = rounds;
        }
        if let Some(length) = self.node_length {
            config.node_length = length;
        }
        config.exact_detection |= self.exact;
        Ok(config)
    }

    fn formula(&self) -> Result<Cnf, SolverError> {
        match (&self.input, &self.clauses) {
            (Some(path), _) => Ok(Cnf::try_from(fs::read_to_string(path)?.as_str())?),
            (None, Some(compact)) => Ok(Cnf::from_compact(compact)?),
            (None, None) => unreachable!("clap requires an input or --clauses"),
        }
    }
}

fn run(cli: &Cli) -> Result<bool, SolverError> {
    let config = cli.solver_config()?;
    let cnf = cli.formula()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    println!("Formula: {cnf}");
    let solver = Solver::new(cnf, &config, &mut rng)?;
    let run = solver.solve(&mut rng)?;

    for report in &run.stages {
        println!("  {:<36} {:>8}", report.stage.to_string(), report.strands);
    }
    match run.outcome {
        Outcome::Found(assignment) => {
            let shown = assignment.iter()
                .enumerate()
                .map(|(i, v)| format!("x{}={v}", i + 1))
                .join(" ");
            println!("{} {shown}", "Solution:".green().bold());
            Ok(true)
        }
        Outcome::NotFound => {
            println!("{}", "No solution found.".yellow().bold());
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}
