//! Generated checks for chunking round-trips and segment sizing.

use proptest::{
    prelude::{Just, Strategy, any, prop_oneof},
    prop_assert,
    prop_assert_eq,
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestCaseError, TestRng, TestRunner},
};
use rstest::rstest;

use super::support::{as_request, manager};
use crate::chunking::CookieOptions;

fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

/// Values biased towards the lengths where chunking switches on.
fn value_strategy(max_len: usize) -> impl Strategy<Value = String> {
    let lengths = prop_oneof![
        Just(0usize),
        Just(1usize),
        Just(max_len / 2),
        Just(max_len),
        0usize..=max_len,
    ];
    lengths.prop_flat_map(|len| {
        proptest::collection::vec(any::<char>(), len).prop_map(|chars| chars.into_iter().collect())
    })
}

#[rstest]
#[case(25, 256, 96)]
#[case(64, 2048, 64)]
#[case(4050, 12_000, 16)]
fn generated_values_round_trip(
    #[case] chunk_size: usize,
    #[case] max_len: usize,
    #[case] cases: u32,
) {
    let mut runner = deterministic_runner(cases);
    let options = CookieOptions::default().with_path(Some("/abc"));
    let manager = manager(Some(chunk_size), true);

    runner
        .run(&value_strategy(max_len), |value| {
            let batch = manager
                .chunk_value("Big", &value, &options)
                .map_err(|err| TestCaseError::fail(format!("chunking failed: {err}")))?;
            let rebuilt = manager
                .request_cookie(&as_request(&batch), "Big")
                .map_err(|err| TestCaseError::fail(format!("reassembly failed: {err}")))?;
            prop_assert_eq!(rebuilt.as_deref(), Some(value.as_str()));
            Ok(())
        })
        .expect("generated values should round-trip");
}

#[rstest]
#[case(25, 512, 96)]
#[case(300, 4096, 48)]
fn generated_segments_respect_the_data_budget(
    #[case] chunk_size: usize,
    #[case] max_len: usize,
    #[case] cases: u32,
) {
    let mut runner = deterministic_runner(cases);
    let options = CookieOptions::default().with_path(Some("/abc"));
    let template_length = options.template_length("Big");
    let data_budget = chunk_size - template_length - 3;
    let manager = manager(Some(chunk_size), false);

    runner
        .run(&value_strategy(max_len), |value| {
            let value_length = value.chars().count();
            let batch = manager
                .chunk_value("Big", &value, &options)
                .map_err(|err| TestCaseError::fail(format!("chunking failed: {err}")))?;

            if value_length == 0 || chunk_size > template_length + value_length {
                prop_assert_eq!(batch.len(), 1);
                return Ok(());
            }

            prop_assert_eq!(batch.chunk_count(), value_length.div_ceil(data_budget));
            let segments: Vec<usize> = batch
                .entries()
                .iter()
                .skip(1)
                .map(|(_, segment)| segment.chars().count())
                .collect();
            let (last, full) = segments.split_last().expect("at least one segment");
            prop_assert!(full.iter().all(|len| *len == data_budget));
            prop_assert!(*last > 0 && *last <= data_budget);
            Ok(())
        })
        .expect("generated segments should respect the budget");
}
