//! End-to-end trace analysis scenarios, from raw samples to rendered report.

use tracelab_core::analysis::{analyze_trace, TraceAnalysisConfig};
use tracelab_core::report::{render_report, ReportDetail};

/// Build a trace realizing the rank order A=50, B=30, C=15, D=5.
fn abcd_trace() -> Vec<&'static str> {
    let mut samples = Vec::new();
    for (outcome, n) in [("A", 50usize), ("B", 30), ("C", 15), ("D", 5)] {
        samples.extend(std::iter::repeat(outcome).take(n));
    }
    samples
}

fn config(burnin_fraction: f64, credible_mass: f64) -> TraceAnalysisConfig {
    TraceAnalysisConfig {
        burnin_fraction,
        credible_mass,
    }
}

#[test]
fn eighty_percent_set_excludes_late_target() {
    // cutoff = floor(0.8 * 100) = 80: A (50) then B (80) and the scan stops,
    // so C is inside the distribution but outside the credible set.
    let analysis = analyze_trace(&abcd_trace(), Some(&"C"), &config(0.0, 0.8)).unwrap();
    let set = &analysis.credible;

    assert_eq!(set.members, ["A", "B"]);
    assert_eq!(set.accumulated_frequency, 80);
    assert_eq!(set.target_rank, None);
    assert_eq!(set.target_probability, 0.0);
    assert_eq!(set.target_cumulative, 1.0);
}

#[test]
fn ninety_seven_percent_set_needs_whole_distribution() {
    // cutoff = floor(0.97 * 100) = 97: all four outcomes are consumed and the
    // target B is matched mid-scan.
    let analysis = analyze_trace(&abcd_trace(), Some(&"B"), &config(0.0, 0.97)).unwrap();
    let set = &analysis.credible;

    assert_eq!(set.members, ["A", "B", "C", "D"]);
    assert_eq!(set.accumulated_frequency, 100);
    assert_eq!(set.target_rank, Some(2));
    assert_eq!(set.target_probability, 0.30);
    assert_eq!(set.target_cumulative, 0.80);
}

#[test]
fn burnin_changes_the_counted_distribution() {
    // Stack the burned prefix with "D" so the retained counts differ from the
    // raw ones: the 100 leading D samples are discarded.
    let mut samples = vec!["D"; 100];
    samples.extend(abcd_trace());

    let analysis = analyze_trace(&samples, None, &config(0.5, 0.95)).unwrap();

    assert_eq!(analysis.total_samples, 200);
    assert_eq!(analysis.burnin, 100);
    assert_eq!(analysis.samples_used(), 100);
    assert_eq!(analysis.frequencies.frequency_of(&"D"), Some(5));
    assert_eq!(analysis.credible.total_frequency, 100);
}

#[test]
fn defaults_apply_ninety_five_percent_and_ten_percent_burnin() {
    let analysis =
        analyze_trace(&abcd_trace(), None, &TraceAnalysisConfig::default()).unwrap();

    // burnin = floor(100 * 0.1) = 10 leading "A" samples; retained counts are
    // A=40, B=30, C=15, D=5, total 90, cutoff = floor(0.95 * 90) = 85.
    assert_eq!(analysis.burnin, 10);
    assert_eq!(analysis.credible.members, ["A", "B", "C"]);
    assert_eq!(analysis.credible.accumulated_frequency, 85);
}

#[test]
fn report_reflects_the_analysis() {
    let analysis = analyze_trace(&abcd_trace(), Some(&"B"), &config(0.0, 0.8)).unwrap();

    let mut out = Vec::new();
    render_report(&analysis, &mut out, ReportDetail::Full).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(report.contains("# burn-in = 0"));
    assert!(report.contains("# 80% credible set (2 distinct outcomes, 80 samples in total)"));
    assert!(report.contains("1\t50\t50.00%\t50.00%\tA"));
    assert!(report.contains("2\t30\t30.00%\t80.00%\tB *"));
    assert!(report.contains("# target at rank 2: probability 30.00%, cumulative 80.00%"));
    assert!(report.contains(&format!("# trace = {}", analysis.trace_hash.short())));
}

#[test]
fn identical_retained_traces_share_a_fingerprint() {
    let first = analyze_trace(&abcd_trace(), None, &config(0.0, 0.95)).unwrap();
    let second = analyze_trace(&abcd_trace(), None, &config(0.0, 0.5)).unwrap();

    assert_eq!(first.trace_hash, second.trace_hash);
    assert_ne!(first.config_hash, second.config_hash);
}
