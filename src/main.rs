//! Strip packing scheduler CLI

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use u_shelf::io::{load_task_set, write_tasks, SwfConverter, TaskGenerator};
use u_shelf::packing::Algorithm;
use u_shelf::scheduler::{EpsilonSummary, PackingReport, StripScheduler};
use u_shelf::validation::{ValidationError, ValidationErrorKind};
use u_shelf::{Error, Result};

#[derive(Parser)]
#[command(name = "u-shelf")]
#[command(about = "NFDH / FFDH strip packing for parallel tasks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a task file with one algorithm
    Run {
        /// Task file with one "r t" pair per line
        tasks: PathBuf,

        /// Strip width (number of processors)
        width: i64,

        /// Packing algorithm
        #[arg(value_enum, ignore_case = true)]
        algorithm: AlgorithmArg,

        /// Fail if more than this many shelves are needed (FFDH only)
        #[arg(long)]
        max_shelves: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pack a task file with both algorithms
    Compare {
        /// Task file with one "r t" pair per line
        tasks: PathBuf,

        /// Strip width (number of processors)
        width: i64,
    },

    /// Write a random task file to stdout
    Generate {
        /// Number of tasks
        count: usize,

        /// Strip width (number of processors)
        width: i64,

        /// Random seed
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },

    /// Convert an SWF workload log to a task file on stdout
    ConvertSwf {
        /// SWF log file
        #[arg(value_name = "LOG")]
        path: PathBuf,

        /// Maximum number of jobs to take (0 reads the whole log)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    #[value(name = "NFDH")]
    Nfdh,
    #[value(name = "FFDH")]
    Ffdh,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Nfdh => Algorithm::Nfdh,
            AlgorithmArg::Ffdh => Algorithm::Ffdh,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            tasks,
            width,
            algorithm,
            max_shelves,
            json,
        } => {
            let algorithm = Algorithm::from(algorithm);
            let scheduler = build_scheduler(algorithm, max_shelves)?;
            let task_set = load_task_set(&tasks, width)?;
            let report = scheduler.schedule(&task_set, algorithm)?;
            print_report(&report, json)?;
        }

        Commands::Compare { tasks, width } => {
            let task_set = load_task_set(&tasks, width)?;
            let reports = StripScheduler::new().compare(&task_set)?;
            for report in &reports {
                println!("[{}]", report.algorithm);
                println!("{report}");
            }
            let summaries = EpsilonSummary::from_reports(&reports);
            if let Some(best) = EpsilonSummary::most_accurate(&summaries) {
                println!("best={}", best.algorithm);
            }
        }

        Commands::Generate { count, width, seed } => {
            let generated = TaskGenerator::new(width).generate_seeded(count, seed);
            write_tasks(BufWriter::new(io::stdout().lock()), &generated)?;
        }

        Commands::ConvertSwf { path, limit } => {
            let mut converter = SwfConverter::new();
            if let Some(limit) = limit {
                converter = converter.with_limit(limit);
            }
            let converted = converter.convert_file(&path)?;
            if converted.is_empty() {
                return Err(Error::Validation(vec![ValidationError::new(
                    ValidationErrorKind::EmptyTaskSet,
                    format!("No valid jobs in {}", path.display()),
                )]));
            }
            log::info!("converted {} jobs from {}", converted.len(), path.display());
            write_tasks(BufWriter::new(io::stdout().lock()), &converted)?;
        }
    }

    Ok(())
}

/// Applies `--max-shelves`, which only FFDH honors.
fn build_scheduler(algorithm: Algorithm, max_shelves: Option<usize>) -> Result<StripScheduler> {
    match (algorithm, max_shelves) {
        (_, None) => Ok(StripScheduler::new()),
        (Algorithm::Ffdh, Some(limit)) => Ok(StripScheduler::new().with_max_shelves(limit)),
        (Algorithm::Nfdh, Some(_)) => Err(Error::Config("--max-shelves is FFDH only".into())),
    }
}

fn print_report(report: &PackingReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
