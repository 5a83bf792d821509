//! Fetch integration tests against a local mock of the market site:
//! status handling, caching behavior, city normalization.

mod common;

use std::time::Duration;

use httpmock::prelude::*;
use vegmarket_sdk::{VegmarketError, VegmarketSdk};

fn sdk_for(server: &MockServer) -> VegmarketSdk {
    VegmarketSdk::builder()
        .base_url(server.base_url())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// happy path
// ---------------------------------------------------------------------------

#[test]
fn fetch_builds_table_from_live_page() {
    let server = MockServer::start();
    let page = common::price_page(&[("Tomato", "₹20 - 30"), ("Onion", "₹15 - 25")]);
    let mock = server.mock(|when, then| {
        when.method(GET).path("/market/ahmedabad/today");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(&page);
    });

    let sdk = sdk_for(&server);
    let table = sdk.fetch_prices("ahmedabad").unwrap();

    mock.assert_hits(1);
    assert_eq!(table.city(), "ahmedabad");
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("Onion").unwrap().avg_price, 20.0);
}

#[test]
fn fetch_sends_browser_user_agent() {
    let server = MockServer::start();
    let page = common::price_page(&[("Tomato", "₹20 - 30")]);
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/market/ahmedabad/today")
            .header("user-agent", "Mozilla/5.0");
        then.status(200).body(&page);
    });

    let sdk = sdk_for(&server);
    sdk.fetch_prices("ahmedabad").unwrap();
    mock.assert_hits(1);
}

// ---------------------------------------------------------------------------
// caching
// ---------------------------------------------------------------------------

#[test]
fn second_fetch_for_same_city_is_served_from_cache() {
    let server = MockServer::start();
    let page = common::price_page(&[("Tomato", "₹20 - 30")]);
    let mock = server.mock(|when, then| {
        when.method(GET).path("/market/ahmedabad/today");
        then.status(200).body(&page);
    });

    let sdk = sdk_for(&server);
    let first = sdk.fetch_prices("ahmedabad").unwrap();
    let second = sdk.fetch_prices("ahmedabad").unwrap();

    mock.assert_hits(1);
    assert_eq!(first, second);
}

#[test]
fn normalized_city_variants_share_one_cache_entry() {
    let server = MockServer::start();
    let page = common::price_page(&[("Tomato", "₹20 - 30")]);
    let mock = server.mock(|when, then| {
        when.method(GET).path("/market/ahmedabad/today");
        then.status(200).body(&page);
    });

    let sdk = sdk_for(&server);
    sdk.fetch_prices("  Ahmedabad ").unwrap();
    sdk.fetch_prices("ahmedabad").unwrap();
    sdk.fetch_prices("AHMEDABAD").unwrap();

    mock.assert_hits(1);
}

#[test]
fn distinct_cities_fetch_independently() {
    let server = MockServer::start();
    let ahmedabad = server.mock(|when, then| {
        when.method(GET).path("/market/ahmedabad/today");
        then.status(200)
            .body(common::price_page(&[("Tomato", "₹20 - 30")]));
    });
    let pune = server.mock(|when, then| {
        when.method(GET).path("/market/pune/today");
        then.status(200)
            .body(common::price_page(&[("Tomato", "₹24 - 36")]));
    });

    let sdk = sdk_for(&server);
    let a = sdk.fetch_prices("ahmedabad").unwrap();
    let p = sdk.fetch_prices("pune").unwrap();

    ahmedabad.assert_hits(1);
    pune.assert_hits(1);
    assert_eq!(a.get("Tomato").unwrap().avg_price, 25.0);
    assert_eq!(p.get("Tomato").unwrap().avg_price, 30.0);
}

#[test]
fn zero_ttl_disables_caching() {
    let server = MockServer::start();
    let page = common::price_page(&[("Tomato", "₹20 - 30")]);
    let mock = server.mock(|when, then| {
        when.method(GET).path("/market/ahmedabad/today");
        then.status(200).body(&page);
    });

    let sdk = VegmarketSdk::builder()
        .base_url(server.base_url())
        .cache_ttl(Duration::ZERO)
        .build()
        .unwrap();
    sdk.fetch_prices("ahmedabad").unwrap();
    sdk.fetch_prices("ahmedabad").unwrap();

    mock.assert_hits(2);
}

#[test]
fn clear_cache_forces_refetch() {
    let server = MockServer::start();
    let page = common::price_page(&[("Tomato", "₹20 - 30")]);
    let mock = server.mock(|when, then| {
        when.method(GET).path("/market/ahmedabad/today");
        then.status(200).body(&page);
    });

    let sdk = sdk_for(&server);
    sdk.fetch_prices("ahmedabad").unwrap();
    sdk.clear_cache();
    sdk.fetch_prices("ahmedabad").unwrap();

    mock.assert_hits(2);
}

// ---------------------------------------------------------------------------
// failures
// ---------------------------------------------------------------------------

#[test]
fn non_success_status_is_source_unavailable() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/market/ahmedabad/today");
        then.status(500).body("internal error");
    });

    let sdk = sdk_for(&server);
    let err = sdk.fetch_prices("ahmedabad").unwrap_err();

    mock.assert_hits(1);
    assert!(
        matches!(err, VegmarketError::SourceUnavailable(_)),
        "{:?}",
        err
    );
}

#[test]
fn missing_city_page_is_source_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/market/atlantis/today");
        then.status(404).body("not found");
    });

    let sdk = sdk_for(&server);
    let err = sdk.fetch_prices("atlantis").unwrap_err();
    assert!(
        matches!(err, VegmarketError::SourceUnavailable(_)),
        "{:?}",
        err
    );
}

#[test]
fn failed_fetch_is_not_cached() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/market/ahmedabad/today");
        then.status(503).body("maintenance");
    });

    let sdk = sdk_for(&server);
    assert!(sdk.fetch_prices("ahmedabad").is_err());
    assert!(sdk.fetch_prices("ahmedabad").is_err());

    mock.assert_hits(2);
}

#[test]
fn blank_city_is_rejected_without_a_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("unreachable");
    });

    let sdk = sdk_for(&server);
    let err = sdk.fetch_prices("   ").unwrap_err();

    assert!(matches!(err, VegmarketError::EmptyCity), "{:?}", err);
    mock.assert_hits(0);
}

#[test]
fn empty_page_body_is_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/market/ahmedabad/today");
        then.status(200).body("");
    });

    let sdk = sdk_for(&server);
    let err = sdk.fetch_prices("ahmedabad").unwrap_err();
    assert!(matches!(err, VegmarketError::Parse(_)), "{:?}", err);
}
