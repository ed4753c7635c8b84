//! Golden fixture tests.
//!
//! Reads tests/testdata/trips_fixture.csv and checks the transform and the
//! splits against known values.

use std::path::PathBuf;

use tripbench_core::dataset::Dataset;
use tripbench_core::split::splits;
use tripbench_core::transform::process_data;
use tripbench_orchestration::interfaces::StrategyOutput;
use tripbench_orchestration::strategy::{Sequential, Strategy, Threaded};

fn load() -> Dataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/testdata/trips_fixture.csv");
    Dataset::from_path(&path, "trip_duration").unwrap()
}

#[test]
fn fixture_column() {
    assert_eq!(
        load().values,
        vec![500, 1500, 200, 3000, 1000, 1001, 999, 2000]
    );
}

#[test]
fn fixture_filtered_sorted() {
    assert_eq!(process_data(&load().values, 1000), vec![1001, 1500, 2000, 3000]);
}

#[test]
fn fixture_splits() {
    let ds = load();
    let expected: [&[i64]; 4] = [&[1500], &[1500, 3000], &[1500, 3000, 1001], &[1001, 1500, 2000, 3000]];
    for (split, want) in splits(&ds.values).iter().zip(expected) {
        let mut want = want.to_vec();
        want.sort_unstable();
        assert_eq!(process_data(split.values, 1000), want, "split {}", split.name);
    }
}

#[test]
fn fixture_strategies_agree() {
    let ds = load();
    let want = StrategyOutput::Single(vec![1001, 1500, 2000, 3000]);
    assert_eq!(Sequential.run(&ds.values, 1000).unwrap().output, want);
    assert_eq!(Threaded.run(&ds.values, 1000).unwrap().output, want);
}
