use std::env;
use std::time::Instant;

use railway_planner::{Price, Rail, RailCatalog, Solution, Solver, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const CONNECTORS: usize = 4;
const RAILS: usize = 24;
const MAX_RAIL_LENGTH: usize = 16;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Railway Planner Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!(
        "Instances: {CONNECTORS} connectors, {RAILS} rails of length 1..={MAX_RAIL_LENGTH}."
    );
    eprintln!(
        "  • full_table is checked against an unindexed reference DP (up to target {})",
        options.verify_limit
    );
    eprintln!("  • rolling is checked against full_table over the same range");
    eprintln!("  • wall_s: wall-clock seconds; rss_delta_kib: resident memory delta");
    eprintln!();

    let catalog = probe_catalog();
    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Full cost table...");
    measurements.extend(run_strategy(
        Strategy::FullTable,
        &[256, 1024, 4096, 16384, 65536],
        &catalog,
        &options,
        &mut sys,
    ));
    eprintln!();

    eprintln!("[2/2] Rolling window sweep...");
    measurements.extend(run_strategy(
        Strategy::Rolling,
        &[256, 1024, 4096, 16384, 65536, 262_144, 1_048_576],
        &catalog,
        &options,
        &mut sys,
    ));
    eprintln!();

    let failed = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .count();
    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All verified runs passed.");
    } else {
        eprintln!("✗ {failed} run(s) failed verification.");
    }
    eprintln!("{}", "=".repeat(80));

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a non-negative integer".to_string())?;
            } else if arg == "--verify-limit" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a non-negative integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --release --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest target length to verify against a baseline (default: 4096)
  -h, --help                    Print this help message
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    target: usize,
    answer: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_strategy(
    strategy: Strategy,
    targets: &[usize],
    catalog: &RailCatalog,
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    let solver = Solver::builder().with_strategy(strategy).build();
    let scenario = match strategy {
        Strategy::FullTable => "full_table",
        Strategy::Rolling => "rolling",
    };
    let total = targets.len();

    targets
        .iter()
        .enumerate()
        .map(|(idx, &target)| {
            eprint!("      [{}/{}] target {}... ", idx + 1, total, target);
            let before = rss_kib(sys);
            let start = Instant::now();
            let outcome = solver.solve_catalog(target, catalog);
            let wall_s = start.elapsed().as_secs_f64();
            let rss_delta_kib = rss_kib(sys).saturating_sub(before);

            let (answer, verification_status, verification_detail) = match outcome {
                Err(err) => (
                    "error".to_string(),
                    VerificationStatus::Failed,
                    Some(err.to_string()),
                ),
                Ok(solution) if target <= options.verify_limit => {
                    let expected = match strategy {
                        Strategy::FullTable => Ok(reference_solution(catalog, target)),
                        Strategy::Rolling => Solver::new().solve_catalog(target, catalog),
                    };
                    match expected {
                        Ok(expected) if expected == solution => {
                            (solution.to_string(), VerificationStatus::Passed, None)
                        }
                        Ok(expected) => (
                            solution.to_string(),
                            VerificationStatus::Failed,
                            Some(format!("expected {expected}, got {solution}")),
                        ),
                        Err(err) => (
                            solution.to_string(),
                            VerificationStatus::Failed,
                            Some(format!("baseline failed: {err}")),
                        ),
                    }
                }
                Ok(solution) => (solution.to_string(), VerificationStatus::NotChecked, None),
            };

            eprintln!(
                "{} price={}, time={:.3}s, status={}",
                verification_status.icon(),
                answer,
                wall_s,
                verification_status.label()
            );
            Measurement {
                scenario,
                target,
                answer,
                wall_s,
                rss_delta_kib,
                verification_status,
                verification_detail,
            }
        })
        .collect()
}

/// Deterministic catalog with a mix of short and long rails across connectors.
fn probe_catalog() -> RailCatalog {
    let mut catalog = RailCatalog::new(CONNECTORS);
    for i in 0..RAILS {
        let start = i % CONNECTORS;
        let end = (i * 7 + 3) % CONNECTORS;
        let length = (i * 5 + 2) % MAX_RAIL_LENGTH + 1;
        let price = ((i * 13) % 29 + 1) as Price * length as Price;
        catalog
            .push(Rail::new(start, end, length, price))
            .expect("generated rails are valid");
    }
    catalog
}

/// The recurrence exactly as stated, scanning every rail for every cell.
fn reference_solution(catalog: &RailCatalog, target: usize) -> Solution {
    let c = catalog.connector_count();
    let mut table = vec![vec![None::<Price>; c]; target + 1];
    table[0] = vec![Some(0); c];
    for l in 1..=target {
        for k in 0..c {
            let mut best: Option<Price> = None;
            for rail in catalog.rails() {
                if rail.end() != k {
                    continue;
                }
                let candidate = if rail.length() == l {
                    Some(rail.price())
                } else if rail.length() < l {
                    table[l - rail.length()][rail.start()].map(|p| p + rail.price())
                } else {
                    None
                };
                if let Some(v) = candidate {
                    best = Some(best.map_or(v, |b| b.min(v)));
                }
            }
            table[l][k] = best;
        }
    }
    table[target]
        .iter()
        .flatten()
        .copied()
        .min()
        .map_or(Solution::Infeasible, Solution::Optimal)
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,target,answer,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.target,
            m.answer,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .chain(std::iter::once("scenario".len()))
        .max()
        .unwrap_or(0);

    println!(
        "{:<col1$}  {:>10}  {:>14}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "target", "answer", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<10}  {:-<14}  {:-<10}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>10}  {:>14}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.target,
            m.answer,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"target\":{},\"answer\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.target,
            m.answer,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}
