//! # sumseek
//!
//! Solves a constrained subset-sum problem — pick exactly C elements of a
//! candidate set S whose sum is N — by encoding it as a QUBO and minimizing
//! that QUBO with simulated annealing.
//!
//! ```rust
//! use sumseek::{AnnealOptions, SubsetSum};
//!
//! let problem = SubsetSum::evenly_spaced(7, 10, 2, 50.0).unwrap();
//! let result = problem.solve(&AnnealOptions::default().with_seed(42)).unwrap();
//!
//! assert!(result.feasible);
//! assert_eq!(result.subset.iter().sum::<u64>(), 10);
//! ```
//!
//! The annealer gives no optimality guarantee; when the instance is
//! infeasible, or the penalty weight is too small to dominate the sum
//! objective, the best sample simply fails the validation predicate and the
//! caller decides whether to retry with more reads or a larger gamma.

pub mod anneal;
pub mod encode;
pub mod error;
pub mod qubo;
pub mod sample;

pub use anneal::{anneal, AnnealOptions, CoolingSchedule};
pub use encode::{Solution, SubsetSum};
pub use error::SumseekError;
pub use qubo::Qubo;
pub use sample::{Sample, SampleSet};
