//! Tests for inbound reassembly and the partial-chunk policy.

use std::collections::{BTreeMap, HashMap};

use cookie::{Cookie, CookieJar};
use rstest::{fixture, rstest};

use super::support::{as_request, fifteen_char_template, manager, repeated};
use crate::{error::ChunkingError, store::RequestCookieMap};

fn request(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect()
}

/// Marker announcing three chunks with only the first two present.
#[fixture]
fn partial_request() -> HashMap<String, String> {
    request(&[
        ("Big", "chunks-3"),
        ("BigC1", "abcd"),
        ("BigC2", "efg"),
    ])
}

#[test]
fn reassembles_chunks_in_index_order() {
    let cookies = request(&[
        ("Big", "chunks-3"),
        ("BigC3", "ghi"),
        ("BigC1", "abc"),
        ("BigC2", "def"),
    ]);
    let value = manager(Some(30), false)
        .request_cookie(&cookies, "Big")
        .expect("reassemble");
    assert_eq!(value.as_deref(), Some("abcdefghi"));
}

#[test]
fn returns_plain_cookies_unchanged() {
    let cookies = request(&[("Big", "plain-value")]);
    let value = manager(Some(30), true)
        .request_cookie(&cookies, "Big")
        .expect("plain cookie");
    assert_eq!(value.as_deref(), Some("plain-value"));
}

#[test]
fn absent_cookie_yields_none() {
    let cookies = request(&[("Other", "chunks-2")]);
    let value = manager(Some(30), true)
        .request_cookie(&cookies, "Big")
        .expect("absent cookie");
    assert_eq!(value, None);
}

#[rstest]
#[case("chunks-")]
#[case("chunks-x")]
#[case("chunks-0")]
#[case("chunks--1")]
#[case("chunks-+2")]
#[case("chunks-2 ")]
#[case("Chunks-2")]
#[case("chunks-99999999999999999999999")]
fn malformed_or_zero_markers_are_literal_values(#[case] marker: &str) {
    let cookies = request(&[("Big", marker), ("BigC1", "abc"), ("BigC2", "def")]);
    let value = manager(Some(30), true)
        .request_cookie(&cookies, "Big")
        .expect("literal value");
    assert_eq!(value.as_deref(), Some(marker));
}

#[rstest]
fn lenient_policy_returns_marker_for_partial_sets(partial_request: HashMap<String, String>) {
    let value = manager(Some(30), false)
        .request_cookie(&partial_request, "Big")
        .expect("lenient reassembly");
    assert_eq!(value.as_deref(), Some("chunks-3"));
}

#[rstest]
fn strict_policy_reports_incomplete_sets(partial_request: HashMap<String, String>) {
    let err = manager(Some(30), true)
        .request_cookie(&partial_request, "Big")
        .expect_err("strict reassembly");
    match err {
        ChunkingError::IncompleteChunkSet {
            found,
            expected,
            total_chars,
        } => {
            assert_eq!(found, 2);
            assert_eq!(expected, 3);
            assert_eq!(total_chars, 7);
        }
        other => panic!("expected IncompleteChunkSet, got {other:?}"),
    }
}

#[test]
fn strict_error_message_carries_diagnostics() {
    let err = ChunkingError::IncompleteChunkSet {
        found: 2,
        expected: 3,
        total_chars: 7,
    };
    assert_eq!(
        err.to_string(),
        "the chunked cookie is incomplete. Only 2 of the expected 3 chunks were found, totaling \
         7 characters. A client size limit may have been exceeded."
    );
}

#[rstest]
#[case(false)]
#[case(true)]
fn empty_chunk_counts_as_missing(#[case] strict: bool) {
    let cookies = request(&[("Big", "chunks-2"), ("BigC1", ""), ("BigC2", "def")]);
    let result = manager(Some(30), strict).request_cookie(&cookies, "Big");
    if strict {
        assert!(matches!(
            result,
            Err(ChunkingError::IncompleteChunkSet {
                found: 0,
                expected: 2,
                total_chars: 0,
            })
        ));
    } else {
        assert_eq!(result.expect("lenient").as_deref(), Some("chunks-2"));
    }
}

#[test]
fn extra_chunks_beyond_the_marker_are_ignored() {
    let cookies = request(&[
        ("Big", "chunks-1"),
        ("BigC1", "abc"),
        ("BigC2", "stale"),
    ]);
    let value = manager(Some(30), true)
        .request_cookie(&cookies, "Big")
        .expect("reassemble");
    assert_eq!(value.as_deref(), Some("abc"));
}

#[test]
fn round_trips_the_documented_example() {
    let manager = manager(Some(30), true);
    let value = repeated('x', 40);
    let batch = manager
        .chunk_value("Big", &value, &fifteen_char_template())
        .expect("chunk value");
    let rebuilt = manager
        .request_cookie(&as_request(&batch), "Big")
        .expect("reassemble");
    assert_eq!(rebuilt, Some(value));
}

#[test]
fn reads_from_every_request_cookie_source() {
    let manager = manager(Some(30), true);

    let btree: BTreeMap<String, String> = request(&[("Big", "chunks-1"), ("BigC1", "abc")])
        .into_iter()
        .collect();
    assert_eq!(
        manager.request_cookie(&btree, "Big").expect("btree").as_deref(),
        Some("abc")
    );

    let mut jar = CookieJar::new();
    jar.add_original(Cookie::new("Big", "chunks-1"));
    jar.add_original(Cookie::new("BigC1", "abc"));
    assert_eq!(
        manager.request_cookie(&jar, "Big").expect("jar").as_deref(),
        Some("abc")
    );

    let parsed = RequestCookieMap::parse_header("Big=chunks-2; BigC1=ab; BigC2=cd");
    assert_eq!(parsed.len(), 3);
    assert_eq!(
        manager.request_cookie(&parsed, "Big").expect("header").as_deref(),
        Some("abcd")
    );
}

#[test]
fn empty_name_is_rejected() {
    let err = manager(Some(30), false)
        .request_cookie(&request(&[]), "")
        .expect_err("empty name");
    assert!(matches!(err, ChunkingError::InvalidArgument(_)));
}
