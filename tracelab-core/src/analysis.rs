//! Trace analysis — burn-in removal, frequency counting, credible-set cut.
//!
//! A posterior trace is an ordered sequence of sampled outcomes (for example
//! tree topologies drawn by an MCMC sampler). `analyze_trace` discards the
//! burn-in prefix, counts the retained samples into a [`FrequencySet`], and
//! takes the credible set at the configured mass. The whole pipeline is a
//! pure function of its inputs; the returned [`TraceAnalysis`] is immutable.

use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::credible::{CredibleSet, CredibleSetError};
use crate::fingerprint::{ConfigHash, TraceHash};
use crate::frequency::{FrequencySet, DEFAULT_CREDIBLE_MASS};

/// Fraction of leading samples discarded when the caller does not choose one.
pub const DEFAULT_BURNIN_FRACTION: f64 = 0.1;

/// Analysis parameters. Loadable from TOML; flags or callers may override
/// individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceAnalysisConfig {
    /// Fraction of leading samples discarded before counting, in [0, 1).
    pub burnin_fraction: f64,
    /// Requested credible mass, in (0, 1].
    pub credible_mass: f64,
}

impl Default for TraceAnalysisConfig {
    fn default() -> Self {
        Self {
            burnin_fraction: DEFAULT_BURNIN_FRACTION,
            credible_mass: DEFAULT_CREDIBLE_MASS,
        }
    }
}

impl TraceAnalysisConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Hash of the canonical `burnin:mass` rendering.
    pub fn config_hash(&self) -> ConfigHash {
        let canonical = format!("{}:{}", self.burnin_fraction, self.credible_mass);
        ConfigHash::from_bytes(canonical.as_bytes())
    }
}

/// Errors from trace analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    #[error("burn-in fraction {0} is outside [0, 1)")]
    InvalidBurnin(f64),

    #[error(transparent)]
    Credible(#[from] CredibleSetError),
}

/// Result of analyzing one trace: counts, credible set, and provenance.
#[derive(Debug, Clone)]
pub struct TraceAnalysis<T> {
    /// Samples in the trace before burn-in removal.
    pub total_samples: usize,
    /// Leading samples discarded.
    pub burnin: usize,
    /// Frequencies of the retained samples.
    pub frequencies: FrequencySet<T>,
    /// Credible set of the retained samples.
    pub credible: CredibleSet<T>,
    /// Content hash of the retained sample sequence.
    pub trace_hash: TraceHash,
    /// Hash of the analysis configuration.
    pub config_hash: ConfigHash,
}

impl<T> TraceAnalysis<T> {
    /// Samples actually analyzed (total minus burn-in).
    pub fn samples_used(&self) -> usize {
        self.total_samples - self.burnin
    }
}

/// Number of leading samples to discard: `floor(total * fraction)`.
pub fn burnin_count(total: usize, fraction: f64) -> usize {
    (total as f64 * fraction) as usize
}

/// Analyze a sample trace, optionally locating `target` within the credible
/// set.
///
/// An empty trace is not an error: the analysis reports zero samples used
/// and the vacuous empty credible set.
///
/// # Errors
///
/// [`TraceError::InvalidBurnin`] if the burn-in fraction is outside [0, 1);
/// invalid credible masses propagate from the builder.
pub fn analyze_trace<T>(
    samples: &[T],
    target: Option<&T>,
    config: &TraceAnalysisConfig,
) -> Result<TraceAnalysis<T>, TraceError>
where
    T: Eq + Hash + Clone + Display,
{
    let fraction = config.burnin_fraction;
    if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
        return Err(TraceError::InvalidBurnin(fraction));
    }

    let total_samples = samples.len();
    let burnin = burnin_count(total_samples, fraction);
    let retained = &samples[burnin..];

    let mut frequencies = FrequencySet::new();
    for sample in retained {
        frequencies.add(sample.clone());
    }

    let credible = frequencies.credible_set(config.credible_mass, target)?;

    Ok(TraceAnalysis {
        total_samples,
        burnin,
        trace_hash: TraceHash::of_samples(retained),
        config_hash: config.config_hash(),
        frequencies,
        credible,
    })
}
