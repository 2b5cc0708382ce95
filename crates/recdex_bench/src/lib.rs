//! Benchmark workloads.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use recdex_core::StorageEngine;
use recdex_testkit::{LinearStore, StudentRecord};

const LAST_NAMES: [&str; 8] = [
    "Garcia", "Kim", "Lee", "Nguyen", "Novak", "Smith", "Smythe", "Silva",
];

/// Order in which keys are handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Ascending keys; the unique index degrades to a chain.
    Sorted,
    /// Seeded random permutation.
    Shuffled,
}

impl KeyOrder {
    /// Label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sorted => "sorted",
            Self::Shuffled => "shuffled",
        }
    }
}

/// Keys `0..count` in the requested order.
pub fn keys(count: usize, order: KeyOrder) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..count as i64).collect();
    if order == KeyOrder::Shuffled {
        keys.shuffle(&mut StdRng::seed_from_u64(0x5eed));
    }
    keys
}

/// Students for `keys`, cycling through a fixed set of last names.
pub fn students(keys: &[i64]) -> Vec<StudentRecord> {
    keys.iter()
        .map(|&k| StudentRecord::new(k, LAST_NAMES[k as usize % LAST_NAMES.len()]))
        .collect()
}

/// An engine loaded with `count` students in `order`.
pub fn loaded_engine(count: usize, order: KeyOrder) -> StorageEngine<StudentRecord> {
    let mut engine = StorageEngine::new();
    for student in students(&keys(count, order)) {
        engine.insert_record(student);
    }
    engine
}

/// A linear store loaded the same way as [`loaded_engine`].
pub fn loaded_model(count: usize, order: KeyOrder) -> LinearStore<StudentRecord> {
    let mut model = LinearStore::new();
    for student in students(&keys(count, order)) {
        model.insert(student);
    }
    model
}

/// Seeded probe keys drawn from `0..count`.
pub fn probes(count: usize, samples: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(0xbeef);
    (0..samples)
        .map(|_| rng.gen_range(0..count as i64))
        .collect()
}
