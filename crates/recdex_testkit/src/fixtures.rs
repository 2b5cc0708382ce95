//! Test fixtures: a richer record type, sample data, and scripted scenarios.

use recdex_core::{Record, StorageEngine};
use serde::{Deserialize, Serialize};

/// A student row keyed by id and indexed by last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student id (unique key).
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name (secondary key).
    pub last_name: String,
    /// Declared major.
    pub major: String,
    /// Year of study.
    pub year: u8,
}

impl StudentRecord {
    /// Creates a student with placeholder first name and major.
    pub fn new(id: i64, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: format!("Student{id}"),
            last_name: last_name.into(),
            major: "Undeclared".into(),
            year: 1,
        }
    }

    /// Sets the first name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the major.
    #[must_use]
    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    /// Sets the year of study.
    #[must_use]
    pub fn year(mut self, year: u8) -> Self {
        self.year = year;
        self
    }
}

impl Record for StudentRecord {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.id
    }

    fn secondary(&self) -> &str {
        &self.last_name
    }
}

/// A small fixed roster with shared and mixed-case last names.
#[must_use]
pub fn roster() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(1004, "Nguyen").first_name("An").major("Physics").year(2),
        StudentRecord::new(1001, "Smith").first_name("Ada").major("Mathematics").year(3),
        StudentRecord::new(1007, "Lee").first_name("Min").major("Biology").year(1),
        StudentRecord::new(1002, "smith").first_name("Ben").major("History").year(4),
        StudentRecord::new(1009, "Smythe").first_name("Cal").major("Chemistry").year(2),
        StudentRecord::new(1003, "Kim").first_name("Dae").major("Economics").year(1),
        StudentRecord::new(1006, "LEE").first_name("Eun").major("Mathematics").year(3),
        StudentRecord::new(1008, "Garcia").first_name("Flor").major("Physics").year(2),
        StudentRecord::new(1005, "Ng").first_name("Gia").major("Art").year(4),
    ]
}

/// Builds an engine from `records`, inserting them in order.
pub fn engine_with<I>(records: I) -> StorageEngine<StudentRecord>
where
    I: IntoIterator<Item = StudentRecord>,
{
    let mut engine = StorageEngine::new();
    for record in records {
        engine.insert_record(record);
    }
    engine
}

/// One scripted engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `find_by_key(key)`
    Find(i64),
    /// `range_by_key(lo, hi)`
    Range(i64, i64),
    /// `prefix_by_secondary(prefix)`
    Prefix(String),
    /// `delete_by_id(key)`
    Delete(i64),
}

/// Records to load followed by a script of calls.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario name, also the golden file stem.
    pub name: &'static str,
    /// Records inserted before the script runs.
    pub records: Vec<StudentRecord>,
    /// Calls run in order.
    pub script: Vec<Query>,
}

/// Exact and range lookup over keys inserted out of order.
#[must_use]
pub fn scenario_exact_and_range() -> Scenario {
    Scenario {
        name: "exact_and_range",
        records: vec![
            StudentRecord::new(3, "Lee"),
            StudentRecord::new(1, "Lee"),
            StudentRecord::new(2, "Kim"),
        ],
        script: vec![
            Query::Find(2),
            Query::Range(1, 2),
            Query::Prefix("lee".into()),
        ],
    }
}

/// Case-insensitive prefix lookup.
#[must_use]
pub fn scenario_prefix() -> Scenario {
    Scenario {
        name: "prefix",
        records: vec![
            StudentRecord::new(5, "Smith"),
            StudentRecord::new(6, "smith"),
            StudentRecord::new(7, "Smythe"),
        ],
        script: vec![
            Query::Prefix("sm".into()),
            Query::Prefix("smi".into()),
            Query::Find(6),
        ],
    }
}

/// Delete followed by lookups that must miss.
#[must_use]
pub fn scenario_delete() -> Scenario {
    Scenario {
        name: "delete",
        records: vec![StudentRecord::new(10, "X")],
        script: vec![
            Query::Delete(10),
            Query::Delete(10),
            Query::Find(10),
            Query::Prefix("x".into()),
        ],
    }
}

/// All scripted scenarios.
#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    vec![scenario_exact_and_range(), scenario_prefix(), scenario_delete()]
}
