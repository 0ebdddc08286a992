//! Expected value of each player action, per (player code, dealer code).
//!
//! All EVs are from the player's perspective in units of the original bet.
//! The tables build strictly in order: stand feeds hit and double, and all
//! three feed split.

use crate::cards::{Rank, ALL_RANKS};
use crate::codes::{
    code_score, draw_code, BUST_CODE, DEALER_CODE, NON_SPLIT_CODE, SPLIT_CODE, STAND_CODE,
};
use crate::dealer::DealerOutcomes;
use crate::error::{BjError, BjResult};
use crate::hand::Hand;
use crate::table::Table;

/// EV of standing: win against every lower dealer total and every bust
/// (bust scores 0), lose against every higher total, push ties.
pub fn stand_table(dealer: &DealerOutcomes) -> BjResult<Table<f64>> {
    let mut table = Table::new("stand", &DEALER_CODE, &STAND_CODE);
    for &code in STAND_CODE.iter() {
        let player_score = code_score(code)?;
        for &dealer_code in DEALER_CODE.iter() {
            let mut payoff = 0.0;
            for (&dealer_score, &prob) in dealer.distribution(dealer_code)? {
                if dealer_score < player_score {
                    payoff += prob;
                } else if dealer_score > player_score {
                    payoff -= prob;
                }
            }
            table.set(code, dealer_code, payoff)?;
        }
    }
    Ok(table)
}

/// EV of hitting once and then playing on optimally.
pub fn hit_table(stand: &Table<f64>) -> BjResult<Table<f64>> {
    let mut table = Table::new("hit", &DEALER_CODE, &NON_SPLIT_CODE);
    let mut memo: Table<f64> = Table::new("hit continuation", &DEALER_CODE, &NON_SPLIT_CODE);
    for &code in NON_SPLIT_CODE.iter() {
        for &dealer_code in DEALER_CODE.iter() {
            let mut payoff = 0.0;
            for &card in &ALL_RANKS {
                let next = draw_code(code, card, false, true)?;
                payoff += card.probability() * hit_outcome(&mut memo, stand, &next, dealer_code)?;
            }
            table.set(code, dealer_code, payoff)?;
        }
    }
    Ok(table)
}

/// Best EV from `code` onward when standing and hitting are both open:
/// stand at 21 (no draw can improve it), take -1 on bust, otherwise the
/// better of standing now and drawing again. Memoized per (code, dealer
/// code); a `None` cell is a genuine miss, never a zero base case.
fn hit_outcome(
    memo: &mut Table<f64>,
    stand: &Table<f64>,
    code: &str,
    dealer_code: &str,
) -> BjResult<f64> {
    if code == "21" {
        return stand.value("21", dealer_code);
    }
    if code == BUST_CODE {
        return Ok(-1.0);
    }
    if let Some(&outcome) = memo.get(code, dealer_code)? {
        return Ok(outcome);
    }
    let mut payoff = 0.0;
    for &card in &ALL_RANKS {
        let next = draw_code(code, card, false, true)?;
        payoff += card.probability() * hit_outcome(memo, stand, &next, dealer_code)?;
    }
    let outcome = stand.value(code, dealer_code)?.max(payoff);
    memo.set(code, dealer_code, outcome)?;
    Ok(outcome)
}

/// EV of doubling: one forced card at double stakes, then stand.
pub fn double_table(stand: &Table<f64>) -> BjResult<Table<f64>> {
    let mut table = Table::new("double", &DEALER_CODE, &NON_SPLIT_CODE);
    for &code in NON_SPLIT_CODE.iter() {
        for &dealer_code in DEALER_CODE.iter() {
            let mut payoff = 0.0;
            for &card in &ALL_RANKS {
                let next = draw_code(code, card, false, true)?;
                payoff += card.probability() * double_outcome(stand, &next, dealer_code)?;
            }
            table.set(code, dealer_code, payoff)?;
        }
    }
    Ok(table)
}

fn double_outcome(stand: &Table<f64>, code: &str, dealer_code: &str) -> BjResult<f64> {
    if code == BUST_CODE {
        return Ok(-2.0);
    }
    Ok(2.0 * stand.value(code, dealer_code)?)
}

/// EV of splitting: each half receives one card and then plays the best of
/// stand/hit/double as a non-split hand. A post-split ace-ten is a plain 21,
/// not a blackjack. Both halves share composition and stakes, so the
/// single-hand expectation doubles. No re-split.
pub fn split_table(
    stand: &Table<f64>,
    hit: &Table<f64>,
    double: &Table<f64>,
) -> BjResult<Table<f64>> {
    let mut table = Table::new("split", &DEALER_CODE, SPLIT_CODE);
    for &code in SPLIT_CODE {
        let half = split_card(code)?;
        for &dealer_code in DEALER_CODE.iter() {
            let mut payoff = 0.0;
            for &card in &ALL_RANKS {
                let next = Hand::with_cards(vec![half, card], false).code(true);
                let outcome = match next.as_str() {
                    "21" | "BJ" => stand.value("21", dealer_code)?,
                    BUST_CODE => -1.0,
                    _ => stand
                        .value(&next, dealer_code)?
                        .max(hit.value(&next, dealer_code)?)
                        .max(double.value(&next, dealer_code)?),
                };
                payoff += card.probability() * outcome;
            }
            table.set(code, dealer_code, 2.0 * payoff)?;
        }
    }
    Ok(table)
}

fn split_card(code: &str) -> BjResult<Rank> {
    let c = code
        .chars()
        .next()
        .ok_or_else(|| BjError::InvalidCode(code.to_string()))?;
    Rank::from_char(c)
}
