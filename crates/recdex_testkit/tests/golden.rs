//! Golden outcomes for the scripted scenarios.

use recdex_testkit::prelude::*;

fn check(scenario: Scenario) {
    init_tracing();
    let steps = run_scenario(&scenario);
    GoldenTest::with_default_dir(scenario.name).assert_json(&steps);
}

#[test]
fn golden_exact_and_range() {
    check(scenario_exact_and_range());
}

#[test]
fn golden_prefix() {
    check(scenario_prefix());
}

#[test]
fn golden_delete() {
    check(scenario_delete());
}

#[test]
fn every_scenario_has_a_golden_file() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("golden");
    for scenario in scenarios() {
        let path = dir.join(format!("{}.json", scenario.name));
        assert!(path.exists(), "missing {}", path.display());
    }
}
