//! TraceLab Core — credible-set analysis of posterior sample traces.
//!
//! This crate contains the heart of the analysis pipeline:
//! - Frequency sets (outcome counting with an explicit ranked view)
//! - The credible-set builder (minimal high-mass prefix + target location)
//! - Trace analysis (burn-in removal over a sample sequence)
//! - Report rendering and number formatting
//! - Trace/config fingerprinting for reproducible reports

pub mod analysis;
pub mod credible;
pub mod fingerprint;
pub mod format;
pub mod frequency;
pub mod report;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: analysis results can cross thread boundaries.
    ///
    /// Analyses are pure values; a worker thread producing them for a
    /// consumer elsewhere must never be blocked on this.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<frequency::FrequencySet<String>>();
        require_sync::<frequency::FrequencySet<String>>();
        require_send::<frequency::RankedOutcomes<String>>();
        require_sync::<frequency::RankedOutcomes<String>>();
        require_send::<credible::CredibleSet<String>>();
        require_sync::<credible::CredibleSet<String>>();
        require_send::<analysis::TraceAnalysis<String>>();
        require_sync::<analysis::TraceAnalysis<String>>();
        require_send::<analysis::TraceAnalysisConfig>();
        require_sync::<analysis::TraceAnalysisConfig>();
        require_send::<fingerprint::TraceHash>();
        require_sync::<fingerprint::TraceHash>();
    }
}
