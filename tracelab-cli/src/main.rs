//! TraceLab CLI — credible-set analysis of posterior sample traces.
//!
//! Commands:
//! - `analyze` — burn-in removal, frequency counting, credible-set report
//! - `freq` — ranked frequency table of the whole trace, no credible cut

mod ingest;

use std::fs;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tracelab_core::analysis::{analyze_trace, TraceAnalysisConfig};
use tracelab_core::frequency::FrequencySet;
use tracelab_core::report::{render_frequency_table, render_report, ReportDetail};

use crate::ingest::read_trace;

#[derive(Parser)]
#[command(
    name = "tracelab",
    about = "TraceLab CLI — credible-set analysis of posterior sample traces"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a trace: burn-in removal, frequency counting, credible set.
    Analyze {
        /// Trace file: one outcome per line, or CSV with --column.
        trace: PathBuf,

        /// Credible mass in (0, 1]. Defaults to 0.95.
        #[arg(long)]
        mass: Option<f64>,

        /// Burn-in fraction in [0, 1). Defaults to 0.1.
        #[arg(long)]
        burnin: Option<f64>,

        /// Outcome to locate within the credible set.
        #[arg(long)]
        target: Option<String>,

        /// CSV column holding the outcomes (plain line mode if omitted).
        #[arg(long)]
        column: Option<String>,

        /// TOML config file; explicit flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print header lines only, without the member table.
        #[arg(long, default_value_t = false)]
        summary: bool,

        /// Write the report to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the ranked frequency table of the whole trace.
    Freq {
        /// Trace file: one outcome per line, or CSV with --column.
        trace: PathBuf,

        /// CSV column holding the outcomes (plain line mode if omitted).
        #[arg(long)]
        column: Option<String>,

        /// Show only the N most frequent outcomes.
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            trace,
            mass,
            burnin,
            target,
            column,
            config,
            summary,
            output,
        } => run_analyze(trace, mass, burnin, target, column, config, summary, output),
        Commands::Freq { trace, column, top } => run_freq(trace, column, top),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_analyze(
    trace: PathBuf,
    mass: Option<f64>,
    burnin: Option<f64>,
    target: Option<String>,
    column: Option<String>,
    config: Option<PathBuf>,
    summary: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut analysis_config = match config {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            TraceAnalysisConfig::from_toml_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => TraceAnalysisConfig::default(),
    };
    if let Some(mass) = mass {
        analysis_config.credible_mass = mass;
    }
    if let Some(burnin) = burnin {
        analysis_config.burnin_fraction = burnin;
    }

    let samples = read_trace(&trace, column.as_deref())
        .with_context(|| format!("failed to ingest trace {}", trace.display()))?;

    let analysis = analyze_trace(&samples, target.as_ref(), &analysis_config)
        .context("trace analysis failed")?;

    let detail = if summary {
        ReportDetail::Summary
    } else {
        ReportDetail::Full
    };

    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            render_report(&analysis, &mut file, detail)?;
        }
        None => {
            let stdout = io::stdout();
            render_report(&analysis, &mut stdout.lock(), detail)?;
        }
    }

    Ok(())
}

fn run_freq(trace: PathBuf, column: Option<String>, top: Option<usize>) -> Result<()> {
    let samples = read_trace(&trace, column.as_deref())
        .with_context(|| format!("failed to ingest trace {}", trace.display()))?;

    let mut set = FrequencySet::new();
    for sample in samples {
        set.add(sample);
    }

    let stdout = io::stdout();
    render_frequency_table(&set.ranked(), &mut stdout.lock(), top)?;
    Ok(())
}
