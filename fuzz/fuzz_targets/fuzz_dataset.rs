#![no_main]

use libfuzzer_sys::fuzz_target;

use tripbench_core::dataset::Dataset;
use tripbench_core::transform::process_data;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must produce a dataset or an error, never a panic
    if let Ok(ds) = Dataset::from_reader(data, "trip_duration") {
        let out = process_data(&ds.values, 1000);
        assert!(out.windows(2).all(|w| w[0] <= w[1]));
        assert!(out.iter().all(|&v| v > 1000));
    }
});
