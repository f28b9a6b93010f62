use anyhow::{bail, Result};
use clap::Parser;
use gridstat::{
    harness, AnalysisConfig, Operation, SuiteReport, DEFAULT_PASS_MARK, DEFAULT_TOLERANCE,
};
use tracing::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridstat", version, about = "Run the grid operation self-check")]
struct Cli {
    #[arg(
        long = "only",
        value_name = "OPERATION",
        help = "Run only the named operation (repeatable), e.g. count_evens"
    )]
    only: Vec<Operation>,
    #[arg(
        long,
        default_value_t = DEFAULT_TOLERANCE,
        allow_negative_numbers = true,
        help = "Absolute tolerance for float results, negative values mean exact"
    )]
    tolerance: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_PASS_MARK,
        allow_negative_numbers = true,
        help = "Lowest passing score for the count_passing suite"
    )]
    pass_mark: i32,
    #[arg(long, help = "Exit with an error when any operation fails")]
    strict: bool,
    #[arg(short, long, help = "Log every scenario evaluation")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<SuiteReport> {
    let config = AnalysisConfig::new(cli.pass_mark, cli.tolerance);
    debug!("Running with {:?}", config);

    let report = if cli.only.is_empty() {
        harness::run_all(&config)
    } else {
        harness::run_operations(&cli.only, &config)
    };
    println!("{report}");

    let failed = report.failures().count();
    if cli.strict && failed > 0 {
        bail!("{} of {} operations failed", failed, report.reports.len());
    }

    Ok(report)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)?;
    Ok(())
}
