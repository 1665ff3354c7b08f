use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use nonet_core::{Grid, ParseError, SolveError, SolveMode, Solver, Trace};

const EXIT_CONTRADICTION: u8 = 1;
const EXIT_PARSE: u8 = 2;

#[derive(Parser)]
#[command(name = "nonet", version, about = "Sudoku solver: propagation plus MRV backtracking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print the completed board
    Solve {
        /// 81-character puzzle string ('.' for blanks), or '-' to read stdin
        puzzle: String,
        /// Fail on the first contradiction instead of backtracking
        #[arg(long)]
        no_backtrack: bool,
        /// Print the deduction/guess trail
        #[arg(long)]
        trace: bool,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run one bounded propagation step and report the forced cell
    Step {
        /// 81-character puzzle string ('.' for blanks), or '-' to read stdin
        puzzle: String,
    },
    /// Parse a puzzle and report its state
    Check {
        /// 81-character puzzle string ('.' for blanks), or '-' to read stdin
        puzzle: String,
    },
}

#[derive(Serialize)]
struct SolveReport<'a> {
    input: &'a str,
    solution: String,
    trace: Vec<Trace>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Solve(_) => EXIT_CONTRADICTION,
            _ => EXIT_PARSE,
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Solve {
            puzzle,
            no_backtrack,
            trace,
            json,
        } => {
            let input = read_puzzle(&puzzle)?;
            let mut grid = Grid::from_string(&input)?;
            let mode = if no_backtrack {
                SolveMode::NoBacktrack
            } else {
                SolveMode::Backtrack
            };
            let trail = Solver::with_mode(mode).solve(&mut grid)?;
            log::debug!("solved with {} trace entries", trail.len());
            if json {
                let report = SolveReport {
                    input: &input,
                    solution: grid.to_string_compact(),
                    trace: trail,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", grid);
                println!("{}", grid.to_string_compact());
                if trace {
                    for entry in &trail {
                        println!("{:?} {} = {}", entry.kind, entry.pos, entry.value);
                    }
                }
            }
            Ok(())
        }
        Command::Step { puzzle } => {
            let input = read_puzzle(&puzzle)?;
            let mut grid = Grid::from_string(&input)?;
            match grid.single_step() {
                Some(forced) => println!("{} = {}", forced.pos, forced.value),
                None => println!("no forced cell"),
            }
            println!("{}", grid.to_string_compact());
            Ok(())
        }
        Command::Check { puzzle } => {
            let input = read_puzzle(&puzzle)?;
            let grid = Grid::from_string(&input)?;
            if grid.is_solved() {
                println!("solved");
            } else if grid.is_unsolvable() {
                println!("unsolvable");
            } else {
                println!(
                    "open: {} cells, {} givens",
                    grid.empty_count(),
                    grid.given_count()
                );
            }
            Ok(())
        }
    }
}

/// The puzzle argument, or stdin when it is "-". Whitespace is trimmed so
/// piped input may end with a newline.
fn read_puzzle(arg: &str) -> Result<String, CliError> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf.trim().to_string())
    } else {
        Ok(arg.trim().to_string())
    }
}
