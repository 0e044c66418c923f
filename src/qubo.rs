//! QUBO container used by the encoder and the annealer.
//!
//! Couplings are stored once per unordered pair in the upper triangle of a
//! sparse matrix; linear terms live in a dense vector so every variable has a
//! diagonal entry even when its coefficient is zero, and the variable set can
//! be enumerated from the QUBO alone.

use ndarray::Array1;
use smolprng::{Algorithm, PRNG};
use sprs::{CsMat, TriMat};

pub struct Qubo {
    /// Off-diagonal couplings, upper triangle only (row < col).
    pub q: CsMat<f64>,
    /// Linear coefficients, one per variable.
    pub c: Array1<f64>,
    /// Constant folded out of the objective; added to every reported energy.
    pub offset: f64,
}

impl Qubo {
    /// Builds a QUBO from an upper-triangular coupling matrix, linear terms
    /// and a constant offset.
    ///
    /// # Panics
    ///
    /// Panics if the coupling matrix is not square or does not match the
    /// length of the linear term vector.
    pub fn new(q: CsMat<f64>, c: Array1<f64>, offset: f64) -> Self {
        assert_eq!(q.rows(), q.cols());
        assert_eq!(q.cols(), c.len());
        Self { q, c, offset }
    }

    /// Number of binary variables.
    pub fn num_x(&self) -> usize {
        self.c.len()
    }

    /// Evaluates the energy of a binary assignment, offset included.
    ///
    /// This is the reporting evaluation; the annealer's inner loop uses
    /// incremental flip deltas instead.
    pub fn eval(&self, x: &Array1<usize>) -> f64 {
        let xf = x.mapv(|xi| xi as f64);
        let quad: f64 = self
            .q
            .iter()
            .map(|(value, (i, j))| value * xf[i] * xf[j])
            .sum();
        quad + self.c.dot(&xf) + self.offset
    }

    /// Coupling coefficient for an unordered variable pair. Symmetric in its
    /// arguments; zero when the pair has no stored entry.
    pub fn pair_coefficient(&self, i: usize, j: usize) -> f64 {
        let (row, col) = if i <= j { (i, j) } else { (j, i) };
        self.q.get(row, col).copied().unwrap_or(0.0)
    }

    /// Materializes the symmetric adjacency view of the couplings, one
    /// neighbor list per variable. Built once per anneal so the sweep loop
    /// never walks the sparse matrix.
    pub fn couplings(&self) -> Vec<Vec<(usize, f64)>> {
        let mut adj = vec![Vec::new(); self.num_x()];
        for (value, (i, j)) in self.q.iter() {
            adj[i].push((j, *value));
            adj[j].push((i, *value));
        }
        adj
    }

    /// Generates a random QUBO, used for exercising the annealer away from
    /// the subset-sum structure.
    pub fn make_random_qubo<T: Algorithm>(num_x: usize, prng: &mut PRNG<T>, sparsity: f64) -> Self {
        let mut q = TriMat::<f64>::new((num_x, num_x));
        for i in 0..num_x {
            for j in (i + 1)..num_x {
                if prng.gen_f64() < sparsity {
                    q.add_triplet(i, j, prng.gen_f64() - 0.5f64);
                }
            }
        }

        let mut c = Array1::<f64>::zeros(num_x);
        for i in 0..num_x {
            c[i] = prng.gen_f64() - 0.5f64;
        }

        Self::new(q.to_csr(), c, 0.0)
    }
}
