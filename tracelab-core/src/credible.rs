//! Credible-set computation — the minimal high-mass prefix of a ranked
//! distribution, plus where a target outcome falls inside it.
//!
//! A single linear scan over a [`RankedDistribution`]: accumulate counts in
//! rank order until the cumulative count reaches `floor(mass * total)`, and
//! capture the target's rank/probability/cumulative share the first time it
//! is encountered. The scan stops at the element that crosses the cutoff
//! (that element is included), so a target ranked beyond the stop point is
//! reported as not found even if it exists in the full distribution: the
//! result describes the target's status *within the credible set*.

use thiserror::Error;

use crate::frequency::RankedDistribution;

/// Rejected inputs. Both are caller errors raised before any scanning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CredibleSetError {
    #[error("credible mass {0} is outside (0, 1]")]
    InvalidMass(f64),

    #[error("nonempty distribution has zero total frequency")]
    EmptyDistribution,
}

/// The minimal prefix of a ranked distribution whose cumulative share reaches
/// the requested mass, with target-location statistics.
///
/// Immutable once returned: one `credible_set` call populates it with a
/// single scan and no field changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CredibleSet<T> {
    /// Requested cumulative mass, fixed at construction.
    pub mass: f64,
    /// Members in distribution rank order. This *is* the credible set.
    pub members: Vec<T>,
    /// Sum of the members' counts.
    pub accumulated_frequency: u64,
    /// Total count of the distribution at build time.
    pub total_frequency: u64,
    /// 1-based rank of the target within the scanned prefix, `None` if the
    /// target was absent or not reached before the scan stopped.
    pub target_rank: Option<usize>,
    /// Individual share (count / total) of the target; 0.0 when not found.
    pub target_probability: f64,
    /// Cumulative share through the target; 1.0 when not found, so an absent
    /// target reads as "beyond the full distribution".
    pub target_cumulative: f64,
}

impl<T> CredibleSet<T> {
    /// Number of outcomes in the set.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Cumulative share actually reached. At least the requested mass except
    /// for the truncation slack of the integer cutoff; 0.0 for the vacuous
    /// empty-distribution case.
    pub fn achieved_mass(&self) -> f64 {
        if self.total_frequency == 0 {
            0.0
        } else {
            self.accumulated_frequency as f64 / self.total_frequency as f64
        }
    }

    /// Whether the target was located within the set.
    pub fn contains_target(&self) -> bool {
        self.target_rank.is_some()
    }
}

/// Compute the credible set of `dist` at `mass`, locating `target` if it is
/// reached during the scan.
///
/// `dist` must already be ranked by non-increasing frequency (see
/// [`RankedDistribution`]); the ordering is not verified here. Ties at the
/// cutoff boundary are broken by scan order: the first element to reach the
/// cutoff ends the scan, and equal-count elements beyond it are excluded.
///
/// # Errors
///
/// [`CredibleSetError::InvalidMass`] if `mass` is not in (0, 1], and
/// [`CredibleSetError::EmptyDistribution`] if a nonempty distribution sums
/// to zero. A distribution with no outcomes is not an error: the scan is
/// vacuous and the returned set is empty.
pub fn credible_set<T, D>(
    mass: f64,
    target: Option<&T>,
    dist: &D,
) -> Result<CredibleSet<T>, CredibleSetError>
where
    T: PartialEq + Clone,
    D: RankedDistribution<T> + ?Sized,
{
    if !mass.is_finite() || mass <= 0.0 || mass > 1.0 {
        return Err(CredibleSetError::InvalidMass(mass));
    }
    let total = dist.total_frequency();
    if total == 0 && !dist.is_empty() {
        return Err(CredibleSetError::EmptyDistribution);
    }

    // Truncated, not rounded; with the crossing element included the achieved
    // share can exceed the requested mass but never stops short of the cutoff.
    let cutoff = (mass * total as f64) as u64;

    let mut set = CredibleSet {
        mass,
        members: Vec::new(),
        accumulated_frequency: 0,
        total_frequency: total,
        target_rank: None,
        target_probability: 0.0,
        target_cumulative: 1.0,
    };

    for rank in 0..dist.len() {
        let count = dist.frequency_at(rank);
        let outcome = dist.outcome_at(rank);

        set.accumulated_frequency += count;
        set.members.push(outcome.clone());

        // First match only; once set, the target fields are never overwritten.
        if set.target_rank.is_none() {
            if let Some(target) = target {
                if outcome == target {
                    set.target_rank = Some(rank + 1);
                    set.target_probability = count as f64 / total as f64;
                    set.target_cumulative =
                        set.accumulated_frequency as f64 / total as f64;
                }
            }
        }

        if set.accumulated_frequency >= cutoff {
            break;
        }
    }

    Ok(set)
}
