//! Encoding of the constrained subset-sum problem as a QUBO.
//!
//! Picking exactly C elements of S that sum to N is expressed as minimizing
//! `(Σ x_i s_i − N)² + γ(Σ x_i − C)²` over binary x. Since `x² = x` for
//! binary variables the expansion collapses into linear terms, pairwise
//! couplings and a constant, which is exactly the [`Qubo`] shape.
//!
//! Variables are keyed by position in S, not by value, so equal-valued
//! elements stay distinct instead of silently merging their coefficients.

use crate::anneal::{self, AnnealOptions};
use crate::error::SumseekError;
use crate::qubo::Qubo;
use crate::sample::{Sample, SampleSet};
use ndarray::Array1;
use sprs::TriMat;

/// A constrained subset-sum instance: find exactly `c` elements of `s`
/// summing to `n`, with constraint violations weighted by `gamma`.
///
/// The penalty weight is a caller responsibility: a `gamma` too small lets
/// the sum objective pay for breaking the cardinality constraint, and the
/// annealer will happily return an infeasible "optimum". Nothing here
/// validates sufficiency.
#[derive(Debug, Clone)]
pub struct SubsetSum {
    s: Vec<u64>,
    n: u64,
    c: usize,
    gamma: f64,
}

/// Outcome of an end-to-end solve: the full ranked sample set, the decoded
/// best subset, and whether that subset actually satisfies both constraints.
#[derive(Debug, Clone)]
pub struct Solution {
    pub samples: SampleSet,
    pub subset: Vec<u64>,
    pub feasible: bool,
}

impl SubsetSum {
    /// Builds an instance, failing fast on configuration the encoding cannot
    /// give meaning to.
    pub fn new(s: Vec<u64>, n: u64, c: usize, gamma: f64) -> Result<Self, SumseekError> {
        if s.is_empty() {
            return Err(SumseekError::EmptyCandidateSet);
        }
        if let Some(index) = s.iter().position(|&e| e == 0) {
            return Err(SumseekError::ZeroElement { index });
        }
        if !(gamma > 0.0) {
            return Err(SumseekError::NonPositiveGamma { gamma });
        }
        Ok(Self { s, n, c, gamma })
    }

    /// Instance over the evenly spaced candidate set `1..=size`.
    pub fn evenly_spaced(size: usize, n: u64, c: usize, gamma: f64) -> Result<Self, SumseekError> {
        Self::new((1..=size as u64).collect(), n, c, gamma)
    }

    pub fn candidates(&self) -> &[u64] {
        &self.s
    }

    pub fn target_sum(&self) -> u64 {
        self.n
    }

    pub fn cardinality(&self) -> usize {
        self.c
    }

    /// Expands the penalized objective into QUBO coefficients.
    ///
    /// Diagonal i picks up `s_i² − 2·N·s_i` from the sum objective and
    /// `γ(1 − 2C)` from the cardinality penalty; every unordered pair picks
    /// up `2·s_i·s_j + 2γ`; the dropped constants `N² + γC²` become the
    /// offset. Evaluating the result at any binary assignment reproduces the
    /// penalized objective exactly.
    pub fn to_qubo(&self) -> Qubo {
        let num_x = self.s.len();
        let n = self.n as f64;
        let card = self.c as f64;

        let mut q = TriMat::<f64>::new((num_x, num_x));
        let mut c = Array1::<f64>::zeros(num_x);

        for i in 0..num_x {
            let s_i = self.s[i] as f64;
            c[i] = s_i * s_i - 2.0 * n * s_i + self.gamma * (1.0 - 2.0 * card);
            for j in (i + 1)..num_x {
                let s_j = self.s[j] as f64;
                q.add_triplet(i, j, 2.0 * s_i * s_j + 2.0 * self.gamma);
            }
        }

        let offset = n * n + self.gamma * card * card;

        Qubo::new(q.to_csr(), c, offset)
    }

    /// Projects a sample back onto the candidate set: the values whose
    /// variable is set, ascending.
    pub fn decode(&self, sample: &Sample) -> Vec<u64> {
        let mut subset: Vec<u64> = sample
            .x
            .iter()
            .zip(self.s.iter())
            .filter(|(&x_i, _)| x_i == 1)
            .map(|(_, &s_i)| s_i)
            .collect();
        subset.sort_unstable();
        subset
    }

    /// The validation predicate: does the subset hit both the target sum and
    /// the target cardinality?
    pub fn check(&self, subset: &[u64]) -> bool {
        subset.iter().sum::<u64>() == self.n && subset.len() == self.c
    }

    /// Encode, anneal and decode in one go. An empty sample set (zero reads)
    /// decodes to an empty, infeasible subset rather than an error.
    pub fn solve(&self, options: &AnnealOptions) -> Result<Solution, SumseekError> {
        let qubo = self.to_qubo();
        let samples = anneal::anneal(&qubo, options)?;
        let subset = match samples.first() {
            Some(best) => self.decode(best),
            None => Vec::new(),
        };
        let feasible = self.check(&subset);
        Ok(Solution {
            samples,
            subset,
            feasible,
        })
    }
}
