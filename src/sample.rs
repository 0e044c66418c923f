//! Ranked collections of annealed assignments.

use ndarray::Array1;
use std::collections::HashMap;
use std::fmt;

/// One distinct final assignment, its evaluated energy (offset included) and
/// the number of reads that ended on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub x: Array1<usize>,
    pub energy: f64,
    pub occurrences: usize,
}

/// Samples sorted by ascending energy. Ties keep the order in which the
/// assignments were first produced, so a fixed seed gives a fixed ranking.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Aggregates raw per-read results: identical assignments collapse into
    /// one sample with an occurrence count, then everything is ranked by
    /// energy.
    pub fn from_reads(reads: Vec<(Array1<usize>, f64)>) -> Self {
        let mut samples: Vec<Sample> = Vec::new();
        let mut seen: HashMap<Vec<usize>, usize> = HashMap::new();

        for (x, energy) in reads {
            match seen.get(&x.to_vec()) {
                Some(&at) => samples[at].occurrences += 1,
                None => {
                    seen.insert(x.to_vec(), samples.len());
                    samples.push(Sample {
                        x,
                        energy,
                        occurrences: 1,
                    });
                }
            }
        }

        // stable sort keeps first-encountered order among equal energies
        samples.sort_by(|a, b| a.energy.total_cmp(&b.energy));

        Self { samples }
    }

    /// Lowest-energy sample, or `None` when no reads were taken.
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

impl std::ops::Index<usize> for SampleSet {
    type Output = Sample;

    fn index(&self, idx: usize) -> &Sample {
        &self.samples[idx]
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl fmt::Display for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12}  {:>6}  assignment", "energy", "occ.")?;
        for sample in &self.samples {
            let bits: String = sample.x.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect();
            writeln!(f, "{:>12.2}  {:>6}  {}", sample.energy, sample.occurrences, bits)?;
        }
        Ok(())
    }
}
