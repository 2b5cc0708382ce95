//! Property-based test generators using proptest.
//!
//! Key and name spaces are kept small on purpose so that generated
//! workloads hit duplicate keys, shared last names, and deletes of live
//! records often.

use crate::fixtures::StudentRecord;
use proptest::prelude::*;

/// Strategy for last names: short, mixed case, drawn from a tiny alphabet
/// so prefixes collide.
pub fn last_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Da-d][a-dA-D]{0,3}").expect("Invalid regex")
}

/// Strategy for students with ids in `0..max_id`.
pub fn student_strategy(max_id: i64) -> impl Strategy<Value = StudentRecord> {
    (0..max_id, last_name_strategy(), 1u8..=4)
        .prop_map(|(id, last, year)| StudentRecord::new(id, last).year(year))
}

/// One engine mutation or query.
#[derive(Debug, Clone)]
pub enum EngineOp {
    /// Insert a record.
    Insert(StudentRecord),
    /// Delete by key.
    Delete(i64),
    /// Point lookup.
    Find(i64),
    /// Closed key range.
    Range(i64, i64),
    /// Secondary-key prefix.
    Prefix(String),
}

/// Strategy for a single operation over ids in `0..max_id`.
pub fn engine_op_strategy(max_id: i64) -> impl Strategy<Value = EngineOp> {
    prop_oneof![
        4 => student_strategy(max_id).prop_map(EngineOp::Insert),
        2 => (0..max_id).prop_map(EngineOp::Delete),
        1 => (0..max_id).prop_map(EngineOp::Find),
        1 => (0..max_id, 0..max_id).prop_map(|(a, b)| EngineOp::Range(a.min(b), a.max(b))),
        1 => prop::string::string_regex("[a-dA-D]{0,2}")
            .expect("Invalid regex")
            .prop_map(EngineOp::Prefix),
    ]
}

/// Strategy for an operation sequence.
pub fn engine_ops_strategy(max_id: i64, max_len: usize) -> impl Strategy<Value = Vec<EngineOp>> {
    prop::collection::vec(engine_op_strategy(max_id), 0..max_len)
}

/// Case and shrink budgets for the engine property tests.
///
/// `quick` backs the in-crate generator checks, `default` the model check
/// that runs on every `cargo test`, and `thorough` the ignored long-running
/// model check.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Operation sequences to generate.
    pub cases: u32,
    /// Maximum shrink iterations on failure.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Small budget for generator sanity checks.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Large budget for the ignored CI run.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Builds the `ProptestConfig` for a `proptest!` block.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
