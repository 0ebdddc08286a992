//! Optimal action per (player code, dealer code).

use crate::codes::{code_cards, DEALER_CODE, PLAYER_CODE};
use crate::error::BjResult;
use crate::hand::Hand;
use crate::table::Table;

/// Fixed payout for surrendering instead of playing the hand out.
pub const SURRENDER_EV: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Surrender,
    Stand,
    Hit,
    Double,
    Split,
}

impl Action {
    pub fn letter(self) -> char {
        match self {
            Action::Surrender => 'R',
            Action::Stand => 'S',
            Action::Hit => 'H',
            Action::Double => 'D',
            Action::Split => 'P',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Surrender => "surrender",
            Action::Stand => "stand",
            Action::Hit => "hit",
            Action::Double => "double",
            Action::Split => "split",
        }
    }

    pub fn from_letter(c: char) -> Option<Action> {
        match c.to_ascii_uppercase() {
            'R' => Some(Action::Surrender),
            'S' => Some(Action::Stand),
            'H' => Some(Action::Hit),
            'D' => Some(Action::Double),
            'P' => Some(Action::Split),
            _ => None,
        }
    }
}

pub struct StrategyTables {
    pub optimal: Table<f64>,
    pub strategy: Table<String>,
}

/// Fill the optimal-EV and strategy tables. Strategy cells hold the primary
/// action letter; double, split and surrender winners also carry the best
/// stand/hit fallback in lowercase, for spots where the primary is barred
/// (e.g. after a prior split).
pub fn optimal_tables(
    stand: &Table<f64>,
    hit: &Table<f64>,
    double: &Table<f64>,
    split: &Table<f64>,
) -> BjResult<StrategyTables> {
    let mut optimal = Table::new("optimal", &DEALER_CODE, &PLAYER_CODE);
    let mut strategy = Table::new("strategy", &DEALER_CODE, &PLAYER_CODE);
    for &code in PLAYER_CODE.iter() {
        for &dealer_code in DEALER_CODE.iter() {
            let choices = candidates(stand, hit, double, split, code, dealer_code)?;
            let (action, ev) = select(&choices);
            let mut label = action.letter().to_string();
            if matches!(action, Action::Double | Action::Split | Action::Surrender) {
                label.push(fallback(&choices).to_ascii_lowercase());
            }
            optimal.set(code, dealer_code, ev)?;
            strategy.set(code, dealer_code, label)?;
        }
    }
    Ok(StrategyTables { optimal, strategy })
}

/// Candidate actions for a cell, in tie-break order. An action whose table
/// holds no entry for the code (directly or via its non-split projection)
/// is unavailable and skipped.
pub fn candidates(
    stand: &Table<f64>,
    hit: &Table<f64>,
    double: &Table<f64>,
    split: &Table<f64>,
    code: &str,
    dealer_code: &str,
) -> BjResult<Vec<(Action, f64)>> {
    let mut choices = vec![(Action::Surrender, SURRENDER_EV)];
    let lookups = [
        (Action::Stand, stand),
        (Action::Hit, hit),
        (Action::Double, double),
        (Action::Split, split),
    ];
    for (action, table) in lookups {
        if let Some(ev) = lookup(table, code, dealer_code)? {
            choices.push((action, ev));
        }
    }
    Ok(choices)
}

/// Try the code directly, then its non-split projection (a pair re-encoded
/// as a plain hand). A label outside the table's sets means "unavailable",
/// not a failure.
fn lookup(table: &Table<f64>, code: &str, dealer_code: &str) -> BjResult<Option<f64>> {
    if let Ok(Some(&ev)) = table.get(code, dealer_code) {
        return Ok(Some(ev));
    }
    let projected = Hand::with_cards(code_cards(code)?, false).code(true);
    match table.get(&projected, dealer_code) {
        Ok(cell) => Ok(cell.copied()),
        Err(_) => Ok(None),
    }
}

/// The first strictly-greater candidate wins, so earlier actions take ties:
/// surrender < stand < hit < double < split.
pub fn select(choices: &[(Action, f64)]) -> (Action, f64) {
    let mut best = choices[0];
    for &(action, ev) in &choices[1..] {
        if ev > best.1 {
            best = (action, ev);
        }
    }
    best
}

/// Best stand-or-hit alternative for the fallback letter. Both actions are
/// available for every player code, via projection if need be.
fn fallback(choices: &[(Action, f64)]) -> char {
    let mut best: Option<(Action, f64)> = None;
    for &(action, ev) in choices {
        if !matches!(action, Action::Stand | Action::Hit) {
            continue;
        }
        if best.map_or(true, |(_, top)| ev > top) {
            best = Some((action, ev));
        }
    }
    best.map_or('S', |(action, _)| action.letter())
}
