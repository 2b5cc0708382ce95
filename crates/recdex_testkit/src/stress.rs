//! Stress tests for the shared engine.
//!
//! These drive a [`SharedEngine`] from several threads with a mix of
//! inserts, deletes, and queries, then check that the indexes still agree
//! with the heap.

use crate::fixtures::StudentRecord;
use recdex_core::SharedEngine;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Operations that took effect or returned a hit.
    pub hits: usize,
    /// Deletes of absent keys and lookups that found nothing.
    pub misses: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(hits: usize, misses: usize, duration: Duration) -> Self {
        let total = hits + misses;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            hits,
            misses,
            duration,
            ops_per_second,
        }
    }

    /// Prints a summary of the test.
    pub fn print_summary(&self, name: &str) {
        println!("\n=== {} ===", name);
        println!("Total operations: {}", self.total_ops);
        println!("Hits: {}", self.hits);
        println!("Misses: {}", self.misses);
        println!("Duration: {:?}", self.duration);
        println!("Throughput: {:.2} ops/sec", self.ops_per_second);
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Operations per thread.
    pub operations: usize,
    /// Number of worker threads.
    pub threads: usize,
    /// Size of the key space each thread draws from.
    pub key_space: i64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            operations: 2_000,
            threads: 4,
            key_space: 500,
        }
    }
}

const NAMES: [&str; 6] = ["Lee", "lee", "Kim", "Smith", "smythe", "Ng"];

/// Runs a mixed workload from `config.threads` threads.
///
/// Each thread owns a disjoint key band so that every delete it issues
/// refers to a key it inserted itself. Operations cycle through insert,
/// find, delete, and prefix scan.
pub fn stress_mixed_operations(
    engine: &SharedEngine<StudentRecord>,
    config: &StressConfig,
) -> StressTestResult {
    let hits = Arc::new(AtomicUsize::new(0));
    let misses = Arc::new(AtomicUsize::new(0));
    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let engine = engine.clone();
            let hits = Arc::clone(&hits);
            let misses = Arc::clone(&misses);
            let operations = config.operations;
            let key_space = config.key_space.max(1);
            let base = t as i64 * key_space;

            thread::spawn(move || {
                for i in 0..operations {
                    let key = base + (i as i64 * 7919) % key_space;
                    let hit = match i % 4 {
                        0 => {
                            let name = NAMES[i % NAMES.len()];
                            engine.insert_record(StudentRecord::new(key, name));
                            true
                        }
                        1 => engine.find_by_key(&key).value.is_some(),
                        2 => engine.delete_by_id(&key),
                        _ => !engine.prefix_by_secondary("l").value.is_empty(),
                    };
                    if hit {
                        hits.fetch_add(1, Ordering::Relaxed);
                    } else {
                        misses.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("stress worker panicked");
    }

    StressTestResult::new(
        hits.load(Ordering::Relaxed),
        misses.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

/// Runs concurrent readers against a pre-populated engine.
pub fn stress_concurrent_reads(
    engine: &SharedEngine<StudentRecord>,
    config: &StressConfig,
) -> StressTestResult {
    for key in 0..config.key_space {
        engine.insert_record(StudentRecord::new(key, NAMES[key as usize % NAMES.len()]));
    }

    let hits = Arc::new(AtomicUsize::new(0));
    let misses = Arc::new(AtomicUsize::new(0));
    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let engine = engine.clone();
            let hits = Arc::clone(&hits);
            let misses = Arc::clone(&misses);
            let operations = config.operations;
            let key_space = config.key_space.max(1);

            thread::spawn(move || {
                for i in 0..operations {
                    // Half the probes land outside the populated range.
                    let key = ((i + t) as i64 * 31) % (key_space * 2);
                    if engine.find_by_key(&key).value.is_some() {
                        hits.fetch_add(1, Ordering::Relaxed);
                    } else {
                        misses.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("stress worker panicked");
    }

    StressTestResult::new(
        hits.load(Ordering::Relaxed),
        misses.load(Ordering::Relaxed),
        start.elapsed(),
    )
}
