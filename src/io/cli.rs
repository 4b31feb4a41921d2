//! Command-line interface for solving, checking, validating and generating query batches

use crate::algorithm::optimizer::solve;
use crate::io::batch::{Strictness, parse_batch, render_batch, write_outcomes};
use crate::io::checker::{CheckMode, check_output};
use crate::io::configuration::{DEFAULT_CASE_COUNT, DEFAULT_SEED};
use crate::io::error::{Result, WithContext};
use crate::io::generator::{CaseProfile, generate_cases};
use crate::io::progress::ProgressManager;
use crate::io::validator::validate_input;
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, error, info};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "kiteparade")]
#[command(
    author,
    version,
    about = "Minimum kite fleets under ribbon, batch and parade divisibility constraints"
)]
/// Command-line arguments for the kite fleet tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and all logs below error level
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Operations offered by the command line
#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Solve a query batch, one result per line
    Solve {
        /// Query file (standard input when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Results file (standard output when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject values outside the documented domain
        #[arg(long)]
        strict: bool,
    },

    /// Verify a results file against its query batch, printing True or False
    Check {
        /// Query file the results were produced from
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Results file to verify
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Cross-check small queries against exhaustive search
        #[arg(short, long)]
        exhaustive: bool,
    },

    /// Check that a query file is well formed and in domain, printing True or False
    Validate {
        /// Query file (standard input when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },

    /// Generate a query batch
    Generate {
        /// Family of queries to draw from
        #[arg(short, long, value_enum, default_value_t = CaseProfile::Small)]
        profile: CaseProfile,

        /// Number of queries
        #[arg(short = 'n', long, default_value_t = DEFAULT_CASE_COUNT)]
        count: usize,

        /// Random seed for reproducible generation
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Query file to write (standard output when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by `--quiet` and the number of `-v` flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Orchestrates one command-line operation with optional progress tracking
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the requested operation
    ///
    /// A check or validation that fails is reported as `False`, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an input file cannot be read, an output file
    /// cannot be written, or a batch to solve is malformed
    pub fn process(&mut self) -> Result<()> {
        match self.cli.command.clone() {
            Command::Solve {
                input,
                output,
                strict,
            } => self.process_solve(input.as_deref(), output.as_deref(), strict),
            Command::Check {
                input,
                output,
                exhaustive,
            } => Self::process_check(&input, &output, exhaustive),
            Command::Validate { input } => Self::process_validate(input.as_deref()),
            Command::Generate {
                profile,
                count,
                seed,
                output,
            } => Self::process_generate(profile, count, seed, output.as_deref()),
        }
    }

    fn process_solve(
        &mut self,
        input: Option<&Path>,
        output: Option<&Path>,
        strict: bool,
    ) -> Result<()> {
        let start_time = Instant::now();
        let strictness = if strict {
            Strictness::Domain
        } else {
            Strictness::Lenient
        };
        let queries = parse_batch(&read_input(input)?, strictness)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(queries.len());
        }

        let mut outcomes = Vec::with_capacity(queries.len());
        for (index, query) in queries.iter().enumerate() {
            outcomes.push(solve(query));
            if let Some(ref pm) = self.progress_manager {
                pm.record(index);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        write_output(output, |writer| write_outcomes(writer, &outcomes))?;

        info!(
            "solved {} queries ({} feasible) in {:.2?}",
            queries.len(),
            outcomes.iter().filter(|outcome| outcome.is_feasible()).count(),
            start_time.elapsed()
        );
        Ok(())
    }

    fn process_check(input: &Path, output: &Path, exhaustive: bool) -> Result<()> {
        let input_text = read_input(Some(input))?;
        let output_text = read_input(Some(output))?;
        let mode = if exhaustive {
            CheckMode::Exhaustive
        } else {
            CheckMode::Structural
        };

        let accepted = match check_output(&input_text, &output_text, mode) {
            Ok(()) => {
                info!("all results in '{}' accepted", output.display());
                true
            }
            Err(err) => {
                error!("{err}");
                false
            }
        };
        write_verdict(accepted)
    }

    fn process_validate(input: Option<&Path>) -> Result<()> {
        let text = read_input(input)?;
        let valid = match validate_input(&text) {
            Ok(()) => true,
            Err(err) => {
                error!("{err}");
                false
            }
        };
        write_verdict(valid)
    }

    fn process_generate(
        profile: CaseProfile,
        count: usize,
        seed: u64,
        output: Option<&Path>,
    ) -> Result<()> {
        let queries = generate_cases(profile, count, seed);
        let text = render_batch(&queries);
        write_output(output, |writer| writer.write_all(text.as_bytes()))?;

        info!("generated {} {profile:?} queries with seed {seed}", queries.len());
        Ok(())
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_path(path, "read"),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .with_path(Path::new("<stdin>"), "read")?;
            Ok(text)
        }
    }
}

fn write_output<F>(path: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    match path {
        Some(path) => {
            let file = File::create(path).with_path(path, "create")?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)
                .and_then(|()| writer.flush())
                .with_path(path, "write")
        }
        None => {
            let mut writer = BufWriter::new(std::io::stdout().lock());
            write(&mut writer)
                .and_then(|()| writer.flush())
                .with_path(Path::new("<stdout>"), "write")
        }
    }
}

fn write_verdict(verdict: bool) -> Result<()> {
    let text = if verdict { "True\n" } else { "False\n" };
    write_output(None, |writer| writer.write_all(text.as_bytes()))
}
