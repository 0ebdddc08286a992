//! Action EV tables: exact cells where the arithmetic is closed-form, and
//! the structural split identity.

use approx::assert_relative_eq;

use easybj::cards::ALL_RANKS;
use easybj::codes::{DEALER_CODE, NON_SPLIT_CODE, SPLIT_CODE, STAND_CODE};
use easybj::dealer::DealerOutcomes;
use easybj::ev;
use easybj::hand::Hand;
use easybj::table::Table;

fn tables() -> (Table<f64>, Table<f64>, Table<f64>, Table<f64>) {
    let dealer = DealerOutcomes::resolve().unwrap();
    let stand = ev::stand_table(&dealer).unwrap();
    let hit = ev::hit_table(&stand).unwrap();
    let double = ev::double_table(&stand).unwrap();
    let split = ev::split_table(&stand, &hit, &double).unwrap();
    (stand, hit, double, split)
}

// ---------------------------------------------------------------------------
// Stand
// ---------------------------------------------------------------------------

#[test]
fn stand_against_a_standing_dealer_20() {
    let (stand, _, _, _) = tables();
    assert_eq!(stand.value("21", "20").unwrap(), 1.0);
    assert_eq!(stand.value("20", "20").unwrap(), 0.0);
    assert_eq!(stand.value("18", "20").unwrap(), -1.0);
    assert_eq!(stand.value("4", "20").unwrap(), -1.0);
}

#[test]
fn stand_evs_are_bounded() {
    let (stand, _, _, _) = tables();
    for &code in STAND_CODE.iter() {
        for &dealer_code in DEALER_CODE.iter() {
            let ev = stand.value(code, dealer_code).unwrap();
            assert!(
                (-1.0..=1.0).contains(&ev),
                "stand[{},{}] = {} out of range",
                code,
                dealer_code,
                ev
            );
        }
    }
}

#[test]
fn standing_on_21_always_wins_or_pushes() {
    let (stand, _, _, _) = tables();
    for &dealer_code in DEALER_CODE.iter() {
        let ev = stand.value("21", dealer_code).unwrap();
        assert!(ev > 0.0, "21 vs {} should be favorable, got {}", dealer_code, ev);
    }
}

// ---------------------------------------------------------------------------
// Hit
// ---------------------------------------------------------------------------

#[test]
fn hit_20_only_the_ace_survives() {
    // Drawing to hard 20: an ace makes 21, every other rank busts.
    let (stand, hit, _, _) = tables();
    for &dealer_code in DEALER_CODE.iter() {
        let expected = (stand.value("21", dealer_code).unwrap() - 12.0) / 13.0;
        assert_relative_eq!(
            hit.value("20", dealer_code).unwrap(),
            expected,
            max_relative = 1e-12
        );
    }
}

#[test]
fn hit_19_against_dealer_20() {
    // A -> 20 (push after standing), 2 -> 21 (win), the other 11/13 bust.
    let (_, hit, _, _) = tables();
    assert_relative_eq!(
        hit.value("19", "20").unwrap(),
        -10.0 / 13.0,
        max_relative = 1e-12
    );
}

#[test]
fn hit_evs_never_fall_below_a_lost_wager() {
    let (_, hit, _, _) = tables();
    for &code in NON_SPLIT_CODE.iter() {
        for &dealer_code in DEALER_CODE.iter() {
            let ev = hit.value(code, dealer_code).unwrap();
            assert!(ev >= -1.0, "hit[{},{}] = {}", code, dealer_code, ev);
        }
    }
}

// ---------------------------------------------------------------------------
// Double
// ---------------------------------------------------------------------------

#[test]
fn double_20_closed_form() {
    // One forced card: the ace stands on 21 at double stakes, the other
    // twelve ranks lose the doubled wager.
    let (stand, _, double, _) = tables();
    for &dealer_code in DEALER_CODE.iter() {
        let expected = (2.0 * stand.value("21", dealer_code).unwrap() - 24.0) / 13.0;
        assert_relative_eq!(
            double.value("20", dealer_code).unwrap(),
            expected,
            max_relative = 1e-12
        );
    }
}

#[test]
fn double_evs_are_bounded_by_the_doubled_stake() {
    let (_, _, double, _) = tables();
    for &code in NON_SPLIT_CODE.iter() {
        for &dealer_code in DEALER_CODE.iter() {
            let ev = double.value(code, dealer_code).unwrap();
            assert!(
                (-2.0..=2.0).contains(&ev),
                "double[{},{}] = {}",
                code,
                dealer_code,
                ev
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Split
// ---------------------------------------------------------------------------

#[test]
fn split_is_twice_the_single_hand_expectation() {
    let (stand, hit, double, split) = tables();
    for &code in SPLIT_CODE {
        let half = easybj::cards::Rank::from_char(code.chars().next().unwrap()).unwrap();
        for &dealer_code in DEALER_CODE.iter() {
            let single: f64 = ALL_RANKS
                .iter()
                .map(|&card| {
                    let next = Hand::with_cards(vec![half, card], false).code(true);
                    let outcome = match next.as_str() {
                        "21" | "BJ" => stand.value("21", dealer_code).unwrap(),
                        "00" => -1.0,
                        _ => stand
                            .value(&next, dealer_code)
                            .unwrap()
                            .max(hit.value(&next, dealer_code).unwrap())
                            .max(double.value(&next, dealer_code).unwrap()),
                    };
                    card.probability() * outcome
                })
                .sum();
            assert_relative_eq!(
                split.value(code, dealer_code).unwrap(),
                2.0 * single,
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn splitting_aces_against_a_weak_dealer_is_profitable() {
    let (_, _, _, split) = tables();
    for dealer_code in ["4", "5", "6"] {
        let ev = split.value("AA", dealer_code).unwrap();
        assert!(ev > 0.0, "AA vs {} should profit, got {}", dealer_code, ev);
    }
}
