//! Report rendering — plain-text reports for trace analyses.
//!
//! Non-tabular lines are prefixed with `#` so a report file can be read
//! straight into R; the member table is tab-separated. Rendering writes to
//! any `io::Write`, so callers decide between stdout and a file.

use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use crate::analysis::TraceAnalysis;
use crate::format::{format_decimal, format_sigfig, pad_right};
use crate::frequency::{RankedDistribution, RankedOutcomes};

/// How much of the report to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDetail {
    /// Header lines only.
    Summary,
    /// Header lines plus the member table.
    Full,
}

/// Render the analysis report.
///
/// The full report lists every credible-set member with its rank, count,
/// individual percentage, and running cumulative percentage. A located
/// target is marked with `*` and summarized on a trailing `#` line.
pub fn render_report<T, W>(
    analysis: &TraceAnalysis<T>,
    out: &mut W,
    detail: ReportDetail,
) -> io::Result<()>
where
    T: Display + Eq + Hash,
    W: Write,
{
    let credible = &analysis.credible;

    writeln!(out, "# burn-in = {}", analysis.burnin)?;
    writeln!(
        out,
        "# samples used (total - burn-in) = {}",
        analysis.samples_used()
    )?;
    writeln!(
        out,
        "# trace = {}, config = {}",
        analysis.trace_hash.short(),
        analysis.config_hash.short()
    )?;
    writeln!(out, "#")?;
    // Scale to percent with a rounding guard: 0.8 * 100.0 is 80.00000000000001
    // in f64 and would otherwise print as a fraction.
    let mass_pct = (credible.mass * 100.0 * 1e9).round() / 1e9;
    writeln!(
        out,
        "# {}% credible set ({} distinct outcomes, {} samples in total)",
        format_sigfig(mass_pct, 4),
        credible.len(),
        credible.accumulated_frequency
    )?;

    if detail == ReportDetail::Summary || credible.is_empty() {
        return Ok(());
    }

    let total = credible.total_frequency as f64;
    writeln!(out, "Rank\tCount\tPercent\tRunning\tOutcome")?;

    let mut running = 0u64;
    for (index, member) in credible.members.iter().enumerate() {
        let count = analysis
            .frequencies
            .frequency_of(member)
            .unwrap_or_default();
        running += count;

        let marker = if credible.target_rank == Some(index + 1) {
            " *"
        } else {
            ""
        };
        writeln!(
            out,
            "{}\t{}\t{}%\t{}%\t{}{}",
            index + 1,
            count,
            format_decimal(100.0 * count as f64 / total, 2),
            format_decimal(100.0 * running as f64 / total, 2),
            member,
            marker
        )?;
    }

    if let Some(rank) = credible.target_rank {
        writeln!(
            out,
            "# target at rank {}: probability {}%, cumulative {}%",
            rank,
            format_decimal(100.0 * credible.target_probability, 2),
            format_decimal(100.0 * credible.target_cumulative, 2)
        )?;
    }

    Ok(())
}

/// Render a ranked frequency table without a credible-set cut.
///
/// Columns are space-padded for terminal reading rather than tab-separated.
/// With `top = Some(n)` only the `n` most frequent outcomes are listed and a
/// trailing line states how many were omitted.
pub fn render_frequency_table<T, W>(
    ranked: &RankedOutcomes<T>,
    out: &mut W,
    top: Option<usize>,
) -> io::Result<()>
where
    T: Display + PartialEq,
    W: Write,
{
    let total = ranked.total_frequency();
    if ranked.is_empty() || total == 0 {
        writeln!(out, "# empty trace")?;
        return Ok(());
    }

    let shown = top.unwrap_or(ranked.len()).min(ranked.len());
    let rank_width = shown.to_string().len().max("Rank".len());
    let count_width = ranked
        .frequency_at(0)
        .to_string()
        .len()
        .max("Count".len());

    writeln!(
        out,
        "{}  {}  {}  Outcome",
        pad_right("Rank", rank_width),
        pad_right("Count", count_width),
        pad_right("Percent", 7)
    )?;

    for (index, (outcome, count)) in ranked.iter().take(shown).enumerate() {
        let percent = format!(
            "{}%",
            format_decimal(100.0 * count as f64 / total as f64, 2)
        );
        writeln!(
            out,
            "{}  {}  {}  {}",
            pad_right(&(index + 1).to_string(), rank_width),
            pad_right(&count.to_string(), count_width),
            pad_right(&percent, 7),
            outcome
        )?;
    }

    if shown < ranked.len() {
        writeln!(out, "# {} more outcomes not shown", ranked.len() - shown)?;
    }

    Ok(())
}
