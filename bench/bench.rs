#![feature(test)]
extern crate test;

use sumseek::{anneal, AnnealOptions, SubsetSum};

#[bench]
fn bench_anneal_evenly_spaced(b: &mut test::Bencher) {
    // pick 23 of 1..=250 summing to 1156
    let problem = SubsetSum::evenly_spaced(250, 1156, 23, 5000.0).unwrap();
    let qubo = problem.to_qubo();
    let options = AnnealOptions::default().with_num_reads(8).with_seed(0);

    b.iter(|| anneal(&qubo, &options).unwrap())
}
