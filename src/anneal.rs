//! Simulated-annealing minimizer for QUBOs.
//!
//! Each read is an independent single-spin-flip Metropolis walk down a
//! cooling ladder. Reads share nothing but the read-only QUBO and the
//! schedule, so they run in parallel and merge afterwards into one ranked
//! [`SampleSet`].

use crate::error::SumseekError;
use crate::qubo::Qubo;
use crate::sample::SampleSet;
use ndarray::Array1;
use rayon::prelude::*;
use smolprng::{Algorithm, JsfLarge, PRNG};

/// Temperature ladder shape. Both variants produce `num_temps` strictly
/// decreasing temperatures from `t_start` down to `t_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingSchedule {
    /// Exponential decay, the usual default.
    Geometric {
        t_start: f64,
        t_end: f64,
        num_temps: usize,
    },
    /// Uniform decrease over the ladder.
    Linear {
        t_start: f64,
        t_end: f64,
        num_temps: usize,
    },
}

impl CoolingSchedule {
    /// A geometric ladder sized to the given QUBO: it starts at an upper
    /// bound on any single-flip |ΔE| (`max_i |c_i| + Σ_j |q_ij|`), so the
    /// first rungs accept nearly every move, and ends cold at 0.1.
    pub fn default_for(qubo: &Qubo) -> Self {
        let mut max_shift = 0.0f64;
        for (i, row) in qubo.couplings().iter().enumerate() {
            let shift = qubo.c[i].abs() + row.iter().map(|(_, w)| w.abs()).sum::<f64>();
            max_shift = max_shift.max(shift);
        }
        Self::Geometric {
            t_start: max_shift.max(1.0),
            t_end: 0.1,
            num_temps: 100,
        }
    }

    /// Materializes the ladder, failing fast on rungs the Metropolis rule
    /// cannot use.
    pub fn temperatures(&self) -> Result<Vec<f64>, SumseekError> {
        let (t_start, t_end, num_temps) = match *self {
            Self::Geometric {
                t_start,
                t_end,
                num_temps,
            }
            | Self::Linear {
                t_start,
                t_end,
                num_temps,
            } => (t_start, t_end, num_temps),
        };

        if num_temps == 0 {
            return Err(SumseekError::EmptySchedule);
        }
        if !(t_end > 0.0) || !(t_start > t_end) || !t_start.is_finite() {
            return Err(SumseekError::BadTemperature { t_start, t_end });
        }

        if num_temps == 1 {
            return Ok(vec![t_start]);
        }

        let steps = (num_temps - 1) as f64;
        let temps = match self {
            Self::Geometric { .. } => {
                let ratio = (t_end / t_start).powf(1.0 / steps);
                (0..num_temps)
                    .map(|k| t_start * ratio.powi(k as i32))
                    .collect()
            }
            Self::Linear { .. } => {
                let slope = (t_start - t_end) / steps;
                (0..num_temps)
                    .map(|k| t_start - slope * k as f64)
                    .collect()
            }
        };

        Ok(temps)
    }
}

/// Knobs for one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealOptions {
    /// Independent reads; each produces one final assignment.
    pub num_reads: usize,
    /// Full variable sweeps at every temperature rung.
    pub sweeps_per_temp: usize,
    /// Ladder override; `None` uses [`CoolingSchedule::default_for`] the
    /// QUBO being annealed.
    pub schedule: Option<CoolingSchedule>,
    /// Base seed; read r uses `seed + r`, so runs are reproducible and reads
    /// stay decorrelated.
    pub seed: u64,
    /// Start each read from random bits rather than all zeros.
    pub random_init: bool,
}

impl Default for AnnealOptions {
    fn default() -> Self {
        Self {
            num_reads: 200,
            sweeps_per_temp: 8,
            schedule: None,
            seed: 0,
            random_init: true,
        }
    }
}

impl AnnealOptions {
    pub fn with_num_reads(mut self, num_reads: usize) -> Self {
        self.num_reads = num_reads;
        self
    }

    pub fn with_sweeps_per_temp(mut self, sweeps: usize) -> Self {
        self.sweeps_per_temp = sweeps;
        self
    }

    pub fn with_schedule(mut self, schedule: CoolingSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_random_init(mut self, random_init: bool) -> Self {
        self.random_init = random_init;
        self
    }
}

/// Minimizes a QUBO by simulated annealing.
///
/// Zero reads is not an error; it returns an empty sample set and the caller
/// treats that as "nothing found". The returned set is sorted ascending by
/// energy and its occurrence counts sum to `num_reads`.
pub fn anneal(qubo: &Qubo, options: &AnnealOptions) -> Result<SampleSet, SumseekError> {
    let temps = options
        .schedule
        .unwrap_or_else(|| CoolingSchedule::default_for(qubo))
        .temperatures()?;

    if options.num_reads == 0 {
        return Ok(SampleSet::default());
    }

    let couplings = qubo.couplings();

    // reads share only read-only state; merge order is the read index, which
    // keeps the sample set identical across thread counts
    let reads: Vec<(Array1<usize>, f64)> = (0..options.num_reads)
        .into_par_iter()
        .map(|read| {
            let mut prng = PRNG {
                generator: JsfLarge::from(options.seed.wrapping_add(read as u64)),
            };
            run_read(qubo, &couplings, &temps, options, &mut prng)
        })
        .collect();

    Ok(SampleSet::from_reads(reads))
}

/// One read: sweep every variable at every rung, Metropolis-accepting flips
/// by their local energy delta, then evaluate the final state once in full.
fn run_read<T: Algorithm>(
    qubo: &Qubo,
    couplings: &[Vec<(usize, f64)>],
    temps: &[f64],
    options: &AnnealOptions,
    prng: &mut PRNG<T>,
) -> (Array1<usize>, f64) {
    let num_x = qubo.num_x();

    let mut x = Array1::<usize>::zeros(num_x);
    if options.random_init {
        for i in 0..num_x {
            if prng.gen_f64() < 0.5 {
                x[i] = 1;
            }
        }
    }

    // local field of variable i: c_i plus its couplings to currently-set
    // variables; flipping i costs (1 - 2 x_i) * field_i
    let mut field: Vec<f64> = (0..num_x)
        .map(|i| {
            qubo.c[i]
                + couplings[i]
                    .iter()
                    .map(|&(j, w)| w * x[j] as f64)
                    .sum::<f64>()
        })
        .collect();

    for &t in temps {
        for _ in 0..options.sweeps_per_temp {
            for k in 0..num_x {
                let delta = 1.0 - 2.0 * x[k] as f64;
                let d_e = delta * field[k];

                if d_e <= 0.0 || prng.gen_f64() < (-d_e / t).exp() {
                    x[k] = 1 - x[k];
                    for &(j, w) in &couplings[k] {
                        field[j] += delta * w;
                    }
                }
            }
        }
    }

    let energy = qubo.eval(&x);
    (x, energy)
}
