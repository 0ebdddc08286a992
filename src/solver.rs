//! One-shot build pipeline. Every table is constructed once, verified where
//! the rules demand it, then frozen inside the returned `Solution`.

use serde_json::{json, Value};

use crate::codes::{DEALER_START_CODE, INITIAL_CODE};
use crate::dealer::DealerOutcomes;
use crate::error::BjResult;
use crate::strategy::{self, Action};
use crate::table::Table;
use crate::{ev, initial};

/// Blackjack pays 3:2.
pub const BLACKJACK_PAYOUT: f64 = 1.5;

/// The frozen output of one solver run.
pub struct Solution {
    pub initial: Table<f64>,
    pub dealer: DealerOutcomes,
    pub stand: Table<f64>,
    pub hit: Table<f64>,
    pub double: Table<f64>,
    pub split: Table<f64>,
    pub optimal: Table<f64>,
    pub strategy: Table<String>,
    pub advantage: f64,
}

/// Run the whole pipeline: initial distribution, dealer outcomes, the four
/// action EV tables, the optimal strategy, and the overall player edge.
pub fn calculate() -> BjResult<Solution> {
    let initial = initial::build()?;
    initial::verify(&initial)?;

    let dealer = DealerOutcomes::resolve()?;
    dealer.verify()?;

    let stand = ev::stand_table(&dealer)?;
    let hit = ev::hit_table(&stand)?;
    let double = ev::double_table(&stand)?;
    let split = ev::split_table(&stand, &hit, &double)?;

    let tables = strategy::optimal_tables(&stand, &hit, &double, &split)?;
    let advantage = player_advantage(&initial, &tables.optimal)?;

    Ok(Solution {
        initial,
        dealer,
        stand,
        hit,
        double,
        split,
        optimal: tables.optimal,
        strategy: tables.strategy,
        advantage,
    })
}

/// Expected profit per unit wager before the first decision. Blackjacks
/// bypass the strategy tables: a two-sided blackjack pushes, a dealer
/// blackjack loses the wager outright, a player blackjack pays 3:2.
fn player_advantage(initial: &Table<f64>, optimal: &Table<f64>) -> BjResult<f64> {
    let mut advantage = 0.0;
    for &player_code in INITIAL_CODE.iter() {
        for &dealer_code in DEALER_START_CODE.iter() {
            let prob = match initial.get(player_code, dealer_code)? {
                Some(&p) => p,
                None => continue,
            };
            if player_code == "BJ" && dealer_code == "BJ" {
                continue;
            } else if player_code == "BJ" {
                advantage += prob * BLACKJACK_PAYOUT;
            } else if dealer_code == "BJ" {
                advantage -= prob;
            } else {
                advantage += prob * optimal.value(player_code, dealer_code)?;
            }
        }
    }
    Ok(advantage)
}

impl Solution {
    /// Candidate actions (tie-break order) for a strategy cell.
    pub fn advice(&self, player_code: &str, dealer_code: &str) -> BjResult<Vec<(Action, f64)>> {
        strategy::candidates(
            &self.stand,
            &self.hit,
            &self.double,
            &self.split,
            player_code,
            dealer_code,
        )
    }

    /// Every table plus the advantage scalar as one JSON document.
    pub fn to_json(&self) -> Value {
        json!({
            "initial": self.initial.to_json(),
            "dealer": self.dealer.to_json(),
            "stand": self.stand.to_json(),
            "hit": self.hit.to_json(),
            "double": self.double.to_json(),
            "split": self.split.to_json(),
            "optimal": self.optimal.to_json(),
            "strategy": self.strategy.to_json(),
            "advantage": self.advantage,
        })
    }
}
