use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use railway_planner::input::{InputError, PlannerInput};
use railway_planner::report::{answer_line, Reporter, OUTPUT_FILE, USAGE};
use railway_planner::{PlannerError, Solution, Solver, Strategy};
use thiserror::Error;

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    init_tracing();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("railway_planner: {err}");
            match Reporter::create(OUTPUT_FILE) {
                Ok(mut reporter) => {
                    if let Err(err) = reporter.write_message(USAGE) {
                        eprintln!("railway_planner: cannot write {OUTPUT_FILE}: {err}");
                    }
                }
                Err(err) => eprintln!("railway_planner: cannot create {OUTPUT_FILE}: {err}"),
            }
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = match Reporter::create(&options.output) {
        Ok(reporter) => reporter,
        Err(err) => {
            eprintln!(
                "railway_planner: cannot create {}: {err}",
                options.output.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let (message, code) = match run(&options) {
        Ok(solution) => (answer_line(solution), ExitCode::SUCCESS),
        Err(err) => (err.to_string(), ExitCode::FAILURE),
    };
    if let Err(err) = reporter.write_message(&message) {
        eprintln!(
            "railway_planner: cannot write {}: {err}",
            options.output.display()
        );
        return ExitCode::FAILURE;
    }
    code
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Planner(#[from] PlannerError),
}

fn run(options: &Options) -> Result<Solution, RunError> {
    let input = PlannerInput::from_path(&options.input)?;
    let mut builder = Solver::builder().with_strategy(options.strategy);
    if let Some(b) = options.block_size {
        builder = builder.with_block_size(b);
    }
    let solution = builder
        .build()
        .solve(input.target, &input.alphabet, &input.rails)?;
    Ok(solution)
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

struct Options {
    input: PathBuf,
    output: PathBuf,
    strategy: Strategy,
    block_size: Option<usize>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut input = None;
        let mut output = PathBuf::from(OUTPUT_FILE);
        let mut strategy = Strategy::default();
        let mut block_size = None;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--output=") {
                output = PathBuf::from(value);
            } else if arg == "--output" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --output".to_string())?
                    .into();
                output = PathBuf::from(value);
            } else if let Some(value) = arg.strip_prefix("--strategy=") {
                strategy = value.parse()?;
            } else if arg == "--strategy" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --strategy".to_string())?
                    .into();
                strategy = value.parse()?;
            } else if let Some(value) = arg.strip_prefix("--block-size=") {
                block_size = Some(parse_block_size(value)?);
            } else if arg == "--block-size" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --block-size".to_string())?
                    .into();
                block_size = Some(parse_block_size(&value)?);
            } else if arg.starts_with("--") {
                return Err(format!("unrecognized argument '{arg}'"));
            } else if input.is_none() {
                input = Some(PathBuf::from(arg));
            } else {
                return Err("expected exactly one input file".to_string());
            }
        }

        Ok(Self {
            input: input.ok_or_else(|| "missing input file".to_string())?,
            output,
            strategy,
            block_size,
        })
    }

    fn print_help() {
        println!(
            "\
{USAGE} [<options>]

Writes the minimal price (or -1) or a diagnostic to the output file.

Options:
  --output <path>               Output file (default: {OUTPUT_FILE})
  --strategy <full|rolling>     Evaluation strategy (default: full)
  --block-size <N>              Sweep block size for the rolling strategy (default: sqrt of target)
  -h, --help                    Print this help message
"
        );
    }
}

fn parse_block_size(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .filter(|&b| b > 0)
        .ok_or_else(|| "block size must be a positive integer".to_string())
}
