use thiserror::Error;

/// Configuration failures surfaced by the encoder and the annealer.
///
/// Infeasibility of the underlying subset-sum instance is deliberately not an
/// error: an infeasible problem still has a well defined QUBO and a well
/// defined minimum, and the caller decides what to do with a best-effort
/// sample that fails validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SumseekError {
    #[error("The candidate set is empty")]
    EmptyCandidateSet,
    #[error("Candidate element at position {index} is zero; elements must be positive")]
    ZeroElement { index: usize },
    #[error("Penalty weight must be positive, got {gamma}")]
    NonPositiveGamma { gamma: f64 },
    #[error("Cooling schedule has no temperature rungs")]
    EmptySchedule,
    #[error("Cooling schedule temperatures must be positive and strictly decreasing ({t_start} -> {t_end})")]
    BadTemperature { t_start: f64, t_end: f64 },
}
