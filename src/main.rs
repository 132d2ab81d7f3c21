use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, ValueEnum};
use steiner_mst::{parse_instance, write_solution, PruneStrategy, SteinerParams, SteinerTree};

/// Approximate a Steiner tree with the MST heuristic.
///
/// Reads `n m`, then `m` lines of `u v w`, then `t` and `t` terminal ids. Prints
/// `COST <total>`, `EDGES`, and one `u v w` line per edge of the pruned tree.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Read the instance from this file instead of standard input
    #[arg(long)]
    input: Option<PathBuf>,

    /// How non-terminal leaves are searched for while pruning
    #[arg(long, value_enum, default_value_t = StrategyArg::Rescan)]
    prune_strategy: StrategyArg,

    /// Check the pruned tree and log any violation as a warning
    #[arg(long)]
    verify: bool,

    /// Skip the range and finiteness checks on edges
    #[arg(long)]
    no_validate: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Rescan,
    WorkQueue,
}

impl From<StrategyArg> for PruneStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Rescan => PruneStrategy::Rescan,
            StrategyArg::WorkQueue => PruneStrategy::WorkQueue,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("Unable to read {}: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)
                .map_err(|err| format!("Unable to read standard input: {err}"))?;
            buffer
        }
    };

    let instance = parse_instance(&input).map_err(|err| err.to_string())?;
    let params = SteinerParams::builder()
        .prune_strategy(cli.prune_strategy.into())
        .validate_input(!cli.no_validate)
        .verify_output(cli.verify)
        .build();
    let solver = SteinerTree::new(&instance.graph, &instance.terminals, params);
    let solution = solver.solve().map_err(|err| err.to_string())?;

    let stdout = io::stdout();
    write_solution(&mut stdout.lock(), &solution.edges, solution.cost)
        .map_err(|err| format!("Unable to write solution: {err}"))
}
