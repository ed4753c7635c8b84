#![no_main]

use libfuzzer_sys::fuzz_target;

use tripbench_core::chunking::{merge_chunk_results, plan_chunks, ChunkResults};
use tripbench_core::transform::process_data;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the worker count, the rest are the values
    let workers = usize::from(data[0] % 32) + 1;
    let values: Vec<i64> = data[1..].iter().map(|&b| i64::from(b) * 16).collect();

    let mut results = ChunkResults::new();
    for (i, range) in plan_chunks(values.len(), workers).unwrap().into_iter().enumerate() {
        results.insert(i, process_data(&values[range], 1000));
    }
    assert_eq!(merge_chunk_results(&results), process_data(&values, 1000));
});
