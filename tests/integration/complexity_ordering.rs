//! Empirical complexity checks on large random inputs: quadratic sorts must
//! record more comparisons than the n log n family, and binary search must
//! beat linear search. Seeded datasets keep the assertions stable.

use compas::{measure_search, measure_sort, DataGenerator, SearchAlgorithm, SortAlgorithm};

const N: usize = 10_000;

fn comparisons(baseline: &[i32], algorithm: SortAlgorithm) -> u64 {
    measure_sort(baseline, algorithm).comparisons
}

#[test]
fn quadratic_sorts_compare_more_than_nlogn_sorts() {
    for seed in [3, 17, 4242] {
        let baseline = DataGenerator::from_seed(seed).generate(N);

        let quadratic = [
            SortAlgorithm::Bubble,
            SortAlgorithm::Insertion,
            SortAlgorithm::Selection,
        ];
        let log_linear = [
            SortAlgorithm::Quick,
            SortAlgorithm::Merge,
            SortAlgorithm::Heap,
        ];

        for slow in quadratic {
            for fast in log_linear {
                let slow_count = comparisons(&baseline, slow);
                let fast_count = comparisons(&baseline, fast);
                assert!(
                    slow_count > fast_count,
                    "seed {}: {} ({}) should exceed {} ({})",
                    seed,
                    slow.label(),
                    slow_count,
                    fast.label(),
                    fast_count
                );
            }
        }
    }
}

#[test]
fn shell_sort_sits_below_the_quadratic_sorts_on_random_input() {
    let baseline = DataGenerator::from_seed(11).generate(N);
    let shell = comparisons(&baseline, SortAlgorithm::Shell);
    for slow in [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
    ] {
        assert!(shell < comparisons(&baseline, slow), "{}", slow.label());
    }
}

#[test]
fn binary_search_compares_less_than_linear_on_sorted_data() {
    let mut generator = DataGenerator::from_seed(21);
    let mut data = generator.generate(N);
    data.sort_unstable();
    // A key from the back half makes the linear scan pay for its position.
    let key = data[N - 2];

    let linear = measure_search(&data, key, SearchAlgorithm::Linear).unwrap();
    let binary = measure_search(&data, key, SearchAlgorithm::Binary).unwrap();
    assert!(binary.comparisons < linear.comparisons);
    // log2(10_000) < 14 probes, two comparisons each.
    assert!(binary.comparisons <= 28);
}
