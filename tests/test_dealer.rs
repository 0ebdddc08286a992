//! Dealer outcome distributions.

use approx::assert_relative_eq;

use easybj::codes::{BUST_CODE, DEALER_CODE};
use easybj::dealer::DealerOutcomes;

#[test]
fn every_published_distribution_sums_to_one() {
    let outcomes = DealerOutcomes::resolve().unwrap();
    outcomes.verify().unwrap();
    for code in outcomes.codes() {
        let total: f64 = outcomes.distribution(code).unwrap().values().sum();
        assert_relative_eq!(total, 1.0, max_relative = 1e-9);
    }
}

#[test]
fn published_codes_are_dealer_codes_plus_21() {
    let outcomes = DealerOutcomes::resolve().unwrap();
    let codes: Vec<&str> = outcomes.codes().collect();
    assert_eq!(codes.len(), DEALER_CODE.len() + 1);
    for &code in DEALER_CODE.iter() {
        assert!(codes.contains(&code), "missing dealer code {}", code);
    }
    assert!(codes.contains(&"21"));
    assert!(
        !codes.contains(&BUST_CODE),
        "the bust pseudo-code must not be published"
    );
}

#[test]
fn terminal_codes_are_point_masses() {
    let outcomes = DealerOutcomes::resolve().unwrap();
    for (code, score) in [("17", 17), ("18", 18), ("19", 19), ("20", 20), ("21", 21)] {
        let dist = outcomes.distribution(code).unwrap();
        assert_eq!(dist.len(), 1, "{} should be terminal", code);
        assert_eq!(dist[&score], 1.0);
    }
}

#[test]
fn hard_16_draws_exactly_once() {
    // From hard 16 each live rank lands on a distinct standing total
    // (A..5 -> 17..21) and everything else busts.
    let outcomes = DealerOutcomes::resolve().unwrap();
    let dist = outcomes.distribution("16").unwrap();
    for score in [17, 18, 19, 20, 21] {
        assert_relative_eq!(dist[&score], 1.0 / 13.0, max_relative = 1e-12);
    }
    assert_relative_eq!(dist[&0], 8.0 / 13.0, max_relative = 1e-12);
}

#[test]
fn hard_12_never_stands_below_17() {
    let outcomes = DealerOutcomes::resolve().unwrap();
    let dist = outcomes.distribution("12").unwrap();
    for score in dist.keys() {
        assert!(
            *score == 0 || (17..=21).contains(score),
            "dealer finished on {}",
            score
        );
    }
}

#[test]
fn soft_codes_resolve() {
    let outcomes = DealerOutcomes::resolve().unwrap();
    for code in ["AA", "A2", "A3", "A4", "A5", "A6"] {
        let dist = outcomes.distribution(code).unwrap();
        let total: f64 = dist.values().sum();
        assert_relative_eq!(total, 1.0, max_relative = 1e-9);
        // A soft start can always still bust eventually.
        assert!(dist[&0] > 0.0, "{} should carry bust mass", code);
    }
}

#[test]
fn resolution_is_deterministic() {
    let a = DealerOutcomes::resolve().unwrap();
    let b = DealerOutcomes::resolve().unwrap();
    assert_eq!(a, b);
}
