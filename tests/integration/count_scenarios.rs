//! Measurement-level behavior: clone semantics, record shape, and count
//! stability when driven through the public runner surface.

use compas::{
    measure_search, measure_sort, BenchError, DataGenerator, OpCounter, SearchAlgorithm,
    SortAlgorithm,
};

#[test]
fn measured_counts_match_direct_invocation() {
    let mut generator = DataGenerator::from_seed(1234);
    let baseline = generator.generate(512);

    for algorithm in SortAlgorithm::all() {
        let record = measure_sort(&baseline, algorithm);

        let mut direct = baseline.clone();
        let mut counter = OpCounter::new();
        algorithm.run(&mut direct, &mut counter);

        assert_eq!(record.comparisons, counter.comparisons(), "{}", algorithm.label());
        assert_eq!(record.swaps, Some(counter.swaps()), "{}", algorithm.label());
        assert_eq!(record.size, 512);
    }
}

#[test]
fn baseline_stays_unsorted_across_a_full_comparison_run() {
    let mut generator = DataGenerator::from_seed(99);
    let baseline = generator.generate(256);
    let snapshot = baseline.clone();

    for algorithm in SortAlgorithm::all() {
        let _ = measure_sort(&baseline, algorithm);
        assert_eq!(baseline, snapshot, "{}", algorithm.label());
    }
}

#[test]
fn search_records_carry_no_swap_tally() {
    let mut generator = DataGenerator::from_seed(7);
    let baseline = generator.generate(1_000);
    let key = generator.pick_key(&baseline).unwrap();

    let linear = measure_search(&baseline, key, SearchAlgorithm::Linear).unwrap();
    assert_eq!(linear.swaps, None);
    assert!(linear.comparisons >= 1);

    let mut sorted = baseline.clone();
    sorted.sort_unstable();
    let binary = measure_search(&sorted, key, SearchAlgorithm::Binary).unwrap();
    assert_eq!(binary.swaps, None);
    // Worst case for n = 1000 is 10 probes at two comparisons each.
    assert!(binary.comparisons <= 20);
}

#[test]
fn empty_dataset_sorts_cleanly_but_fails_searches() {
    for algorithm in SortAlgorithm::all() {
        let record = measure_sort(&[], algorithm);
        assert_eq!(record.comparisons, 0, "{}", algorithm.label());
        assert_eq!(record.swaps, Some(0), "{}", algorithm.label());
    }
    for algorithm in SearchAlgorithm::all() {
        let err = measure_search(&[], 1, algorithm).unwrap_err();
        assert!(matches!(err, BenchError::InvalidArgument(_)), "{}", algorithm.label());
    }
}

#[test]
fn repeat_measurements_repeat_counts_not_timings() {
    let mut generator = DataGenerator::from_seed(55);
    let baseline = generator.generate(2_048);

    for algorithm in SortAlgorithm::all() {
        let first = measure_sort(&baseline, algorithm);
        let second = measure_sort(&baseline, algorithm);
        assert_eq!(first.comparisons, second.comparisons, "{}", algorithm.label());
        assert_eq!(first.swaps, second.swaps, "{}", algorithm.label());
    }
}
