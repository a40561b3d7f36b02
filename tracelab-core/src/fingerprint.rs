//! Analysis fingerprinting — deterministic identity for traces and configs.
//!
//! - `TraceHash`: content hash of the post-burn-in sample sequence.
//! - `ConfigHash`: hash of the canonical config rendering.
//!
//! Both are BLAKE3 hex digests, stable across builds and platforms, and are
//! printed in report headers so two reports can be compared for provenance.

use std::fmt;
use std::fmt::Display;

/// Content hash of an analyzed sample sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceHash(pub String);

impl TraceHash {
    /// Hash the samples in order. Each sample's rendering is length-prefixed
    /// so that adjacent samples cannot collide by concatenation
    /// (["ab", "c"] vs ["a", "bc"]).
    pub fn of_samples<T: Display>(samples: &[T]) -> Self {
        let mut hasher = blake3::Hasher::new();
        for sample in samples {
            let rendered = sample.to_string();
            hasher.update(&(rendered.len() as u64).to_le_bytes());
            hasher.update(rendered.as_bytes());
        }
        Self(hasher.finalize().to_hex().to_string())
    }

    /// Leading 12 hex characters, for report headers.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for TraceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hash of a canonical configuration rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigHash(pub String);

impl ConfigHash {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(blake3::hash(bytes).to_hex().to_string())
    }

    /// Leading 12 hex characters, for report headers.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for ConfigHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_hash_is_order_sensitive() {
        let forward = TraceHash::of_samples(&["a", "b", "c"]);
        let backward = TraceHash::of_samples(&["c", "b", "a"]);
        assert_ne!(forward, backward);
    }

    #[test]
    fn trace_hash_resists_concatenation_collisions() {
        let split_early = TraceHash::of_samples(&["ab", "c"]);
        let split_late = TraceHash::of_samples(&["a", "bc"]);
        assert_ne!(split_early, split_late);
    }

    #[test]
    fn trace_hash_is_deterministic() {
        let one = TraceHash::of_samples(&["x", "y"]);
        let two = TraceHash::of_samples(&["x", "y"]);
        assert_eq!(one, two);
        assert_eq!(one.short().len(), 12);
    }

    #[test]
    fn config_hash_distinguishes_configs() {
        let a = ConfigHash::from_bytes(b"0.1:0.95");
        let b = ConfigHash::from_bytes(b"0.2:0.95");
        assert_ne!(a, b);
        assert_eq!(a.0.len(), 64);
    }
}
