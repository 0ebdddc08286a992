//! Joint probability of every (player, dealer) pair of starting hands.

use itertools::iproduct;

use crate::cards::ALL_RANKS;
use crate::codes::{DEALER_START_CODE, INITIAL_CODE};
use crate::error::{BjError, BjResult};
use crate::hand::Hand;
use crate::table::{is_close, Table};

/// Build the starting-hand distribution. Rows are player codes, columns are
/// dealer codes plus "BJ"; deals mapping to the same code pair accumulate.
pub fn build() -> BjResult<Table<f64>> {
    let mut table = Table::new("initial", &DEALER_START_CODE, &INITIAL_CODE);
    for (i, j, x, y) in iproduct!(ALL_RANKS, ALL_RANKS, ALL_RANKS, ALL_RANKS) {
        let dealer = Hand::dealer(i, j);
        let player = Hand::player(x, y);
        let prob = dealer.probability() * player.probability();
        table.accumulate(&player.code(false), &dealer.code(false), prob)?;
    }
    Ok(table)
}

/// Every deal lands in exactly one cell, so the table carries one unit of
/// probability mass in total.
pub fn verify(table: &Table<f64>) -> BjResult<()> {
    let total = table.total();
    if !is_close(total, 1.0) {
        return Err(BjError::DistributionDrift {
            what: "initial distribution".to_string(),
            sum: total,
            expected: 1.0,
        });
    }
    Ok(())
}
