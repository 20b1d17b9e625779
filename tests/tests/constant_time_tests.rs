//! Data-independence of the constant-time sorting paths
//!
//! Operation-count and trace checks are deterministic and always run.
//! Wall-clock comparisons depend on the host and are `#[ignore]`d; run them
//! with `cargo test -p lesscanon-tests -- --ignored`.

use lesscanon::algorithms::sort::bitonic::{compare_exchange_count, padded_len};
use lesscanon::algorithms::{
    sort_records, Backend, CountingProbe, SortConfig, Sorter, TraceProbe,
};
use lesscanon::api::Secrecy;
use lesscanon::canon::{col_bitonic_sort_transpose, col_bitonic_sort_transpose_with_probe, TiePolicy};
use lesscanon::params::{LESS1, LESS3, LESS5};
use lesscanon_tests::constant_time::{TestConfig, TimingTester};
use lesscanon_tests::fixtures;

fn secret_sorters(q: usize) -> [Sorter; 2] {
    let scalar = SortConfig::scalar(q, Secrecy::Secret);
    [
        Sorter::new(scalar).unwrap(),
        Sorter::new(scalar.with_backend(Backend::Vectorized)).unwrap(),
    ]
}

#[test]
fn dispatcher_trace_is_independent_of_values() {
    let mut rng = fixtures::rng(1);
    for params in [LESS1, LESS3, LESS5] {
        let len = params.is_cols();
        let zeros = vec![0u8; len];
        let descending: Vec<u8> = (0..len).map(|i| (len - 1 - i) as u8 % 127).collect();
        let random = fixtures::random_elements(&mut rng, len, params.q);

        for sorter in secret_sorters(params.q) {
            let mut traces = Vec::new();
            for input in [&zeros, &descending, &random] {
                let mut out = vec![0u8; len];
                let mut probe = TraceProbe::default();
                sorter.sort_with_probe(&mut out, input, &mut probe).unwrap();
                traces.push(probe);
            }
            assert_eq!(traces[0], traces[1]);
            assert_eq!(traces[0], traces[2]);
            assert_eq!(traces[0].pairs.len(), compare_exchange_count(padded_len(len)));
        }
    }
}

#[test]
fn column_sort_count_depends_only_on_shape() {
    let mut rng = fixtures::rng(2);
    let params = LESS1;
    let scope = params.is_cols();
    let expected = compare_exchange_count(padded_len(scope));

    let random = fixtures::random_matrix(&mut rng, &params);
    let mut constant = random.clone();
    for r in 0..constant.rows() {
        for c in 0..constant.cols() {
            constant.set(r, c, 5).unwrap();
        }
    }

    for mut m in [random, constant] {
        let mut probe = CountingProbe::default();
        col_bitonic_sort_transpose_with_probe(&mut m, scope, TiePolicy::ByIndex, &mut probe).unwrap();
        assert_eq!(probe.count, expected);
    }
}

#[test]
fn record_sort_trace_matches_element_sort_trace() {
    let mut table = vec![0u8; 16 * 3];
    let mut records = TraceProbe::default();
    sort_records(&mut table, 3, &mut records).unwrap();

    let mut out = vec![0u8; 16];
    let mut elements = TraceProbe::default();
    secret_sorters(127)[0]
        .sort_with_probe(&mut out, &[0u8; 16], &mut elements)
        .unwrap();
    assert_eq!(records, elements);
}

#[test]
#[ignore = "wall-clock timing; run explicitly"]
fn bitonic_sort_timing() {
    let tester = TimingTester::new(TestConfig::for_sorting_network());
    let len = LESS5.is_cols();
    let sorted: Vec<u8> = (0..len).map(|i| (i % 127) as u8).collect();
    let reversed: Vec<u8> = sorted.iter().rev().copied().collect();

    for sorter in secret_sorters(127) {
        let mut out = vec![0u8; len];
        let mut out2 = vec![0u8; len];
        let analysis = tester
            .compare(
                || sorter.sort(&mut out, &sorted).unwrap(),
                || sorter.sort(&mut out2, &reversed).unwrap(),
            )
            .unwrap();
        println!("{}", analysis.summary(sorter.algorithm().name()));
        assert!(analysis.is_constant_time, "{}", analysis.summary(sorter.algorithm().name()));
    }
}

#[test]
#[ignore = "wall-clock timing; run explicitly"]
fn column_sort_timing() {
    let tester = TimingTester::new(TestConfig::for_column_sort());
    let mut rng = fixtures::rng(3);
    let params = LESS1;
    let random = fixtures::random_matrix(&mut rng, &params);
    let zeros = lesscanon::canon::InfoSetMatrix::for_params(&params).unwrap();

    let analysis = tester
        .compare(
            || {
                let mut m = random.clone();
                col_bitonic_sort_transpose(&mut m, params.is_cols(), TiePolicy::ByIndex).unwrap();
            },
            || {
                let mut m = zeros.clone();
                col_bitonic_sort_transpose(&mut m, params.is_cols(), TiePolicy::ByIndex).unwrap();
            },
        )
        .unwrap();
    println!("{}", analysis.summary("col_bitonic_sort_transpose"));
    assert!(analysis.is_constant_time, "{}", analysis.summary("col_bitonic_sort_transpose"));
}
