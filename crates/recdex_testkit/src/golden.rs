//! Golden test utilities for scenario outcomes.
//!
//! A scenario script is run against a fresh engine and every call is
//! recorded as a [`Step`], including the comparison count. The recorded
//! steps are compared against a checked-in JSON file. Comparison counts are
//! deterministic for a given insert order, so any change to tree traversal
//! shows up as a golden diff.

use crate::fixtures::{engine_with, Query, Scenario, StudentRecord};
use recdex_core::{StorageEngine, Traced};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Recorded outcome of one scripted call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// `find_by_key`
    FindByKey {
        /// Looked-up key.
        key: i64,
        /// Ids returned (zero or one).
        ids: Vec<i64>,
        /// Comparisons reported.
        comparisons: u64,
    },
    /// `range_by_key`
    RangeByKey {
        /// Lower bound.
        lo: i64,
        /// Upper bound.
        hi: i64,
        /// Ids returned, in result order.
        ids: Vec<i64>,
        /// Comparisons reported.
        comparisons: u64,
    },
    /// `prefix_by_secondary`
    PrefixBySecondary {
        /// Prefix as passed in.
        prefix: String,
        /// Ids returned, in result order.
        ids: Vec<i64>,
        /// Comparisons reported.
        comparisons: u64,
    },
    /// `delete_by_id`
    DeleteById {
        /// Deleted key.
        key: i64,
        /// Whether the delete took effect.
        deleted: bool,
    },
}

fn ids<'a>(records: impl IntoIterator<Item = &'a StudentRecord>) -> Vec<i64> {
    records.into_iter().map(|s| s.id).collect()
}

/// Runs `script` against `engine`, recording each call.
pub fn run_script(engine: &mut StorageEngine<StudentRecord>, script: &[Query]) -> Vec<Step> {
    script
        .iter()
        .map(|query| match query {
            Query::Find(key) => {
                let Traced { value, comparisons } = engine.find_by_key(key);
                Step::FindByKey {
                    key: *key,
                    ids: ids(value),
                    comparisons,
                }
            }
            Query::Range(lo, hi) => {
                let Traced { value, comparisons } = engine.range_by_key(lo, hi);
                Step::RangeByKey {
                    lo: *lo,
                    hi: *hi,
                    ids: ids(value),
                    comparisons,
                }
            }
            Query::Prefix(prefix) => {
                let Traced { value, comparisons } = engine.prefix_by_secondary(prefix);
                Step::PrefixBySecondary {
                    prefix: prefix.clone(),
                    ids: ids(value),
                    comparisons,
                }
            }
            Query::Delete(key) => Step::DeleteById {
                key: *key,
                deleted: engine.delete_by_id(key),
            },
        })
        .collect()
}

/// Loads a scenario's records into a fresh engine and runs its script.
pub fn run_scenario(scenario: &Scenario) -> Vec<Step> {
    let mut engine = engine_with(scenario.records.iter().cloned());
    run_script(&mut engine, &scenario.script)
}

/// A golden test that compares JSON output against expected files.
pub struct GoldenTest {
    name: String,
    golden_dir: PathBuf,
    update_mode: bool,
}

impl GoldenTest {
    /// Creates a new golden test.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the test (used for file naming)
    /// * `golden_dir` - Directory containing golden files
    pub fn new(name: impl Into<String>, golden_dir: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            golden_dir: golden_dir.as_ref().to_path_buf(),
            update_mode: std::env::var("UPDATE_GOLDEN").is_ok(),
        }
    }

    /// Creates a golden test using this crate's `golden/` directory.
    pub fn with_default_dir(name: impl Into<String>) -> Self {
        Self::new(name, PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden"))
    }

    /// Asserts that `actual` serializes to the same JSON as the golden file.
    ///
    /// Values are compared structurally, so formatting in the file does not
    /// matter. If `UPDATE_GOLDEN` is set, the file is rewritten instead.
    pub fn assert_json<T: Serialize>(&self, actual: &T) {
        let path = self.file_path();
        let actual = serde_json::to_value(actual).expect("Failed to serialize actual value");

        if self.update_mode {
            let pretty = serde_json::to_string_pretty(&actual).expect("Failed to render JSON");
            self.update_golden_file(&path, pretty.as_bytes());
            return;
        }

        if !path.exists() {
            panic!(
                "Golden file not found: {:?}\n\
                 Run with UPDATE_GOLDEN=1 to create it.\n\
                 Actual:\n{:#}",
                path, actual
            );
        }

        let text = fs::read_to_string(&path).expect("Failed to read golden file");
        let expected: serde_json::Value =
            serde_json::from_str(&text).expect("Golden file is not valid JSON");

        if actual != expected {
            panic!(
                "Golden test '{}' failed:\n\
                 --- Expected ---\n{:#}\n\
                 --- Actual ---\n{:#}\n\
                 Run with UPDATE_GOLDEN=1 to update.",
                self.name, expected, actual
            );
        }
    }

    fn file_path(&self) -> PathBuf {
        self.golden_dir.join(format!("{}.json", self.name))
    }

    fn update_golden_file(&self, path: &Path, data: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create golden directory");
        }
        fs::write(path, data).expect("Failed to write golden file");
        println!("Updated golden file: {:?}", path);
    }
}
