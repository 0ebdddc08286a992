//! Final-total distributions for every dealer starting code.
//!
//! The dealer has no options: below a standing total the next card is always
//! drawn, so each code's outcome distribution is the probability-weighted
//! sum over its successors. The code space is finite and acyclic (a draw
//! strictly grows the hand), so memoized recursion terminates.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::cards::ALL_RANKS;
use crate::codes::{code_score, draw_code, BUST_CODE, DEALER_CODE, DEALER_STAND_CODE};
use crate::error::{BjError, BjResult};
use crate::table::is_close;

/// Probability of each final dealer score: 17..=21, with 0 for bust.
pub type ScoreDist = BTreeMap<u32, f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct DealerOutcomes {
    dist: BTreeMap<String, ScoreDist>,
}

impl DealerOutcomes {
    /// Resolve every dealer starting code. The bust pseudo-code seeds the
    /// recursion but is dropped from the published map: bust is a terminal
    /// branch, not a starting code.
    pub fn resolve() -> BjResult<DealerOutcomes> {
        let mut cache: BTreeMap<String, ScoreDist> = BTreeMap::new();
        for &code in DEALER_STAND_CODE {
            let mut point = ScoreDist::new();
            point.insert(code_score(code)?, 1.0);
            cache.insert(code.to_string(), point);
        }
        for &code in DEALER_CODE.iter() {
            resolve_code(&mut cache, code)?;
        }
        cache.remove(BUST_CODE);
        Ok(DealerOutcomes { dist: cache })
    }

    pub fn distribution(&self, code: &str) -> BjResult<&ScoreDist> {
        self.dist
            .get(code)
            .ok_or_else(|| BjError::InvalidCode(code.to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.dist.keys().map(String::as_str)
    }

    /// Every published distribution must carry exactly one unit of mass.
    pub fn verify(&self) -> BjResult<()> {
        for (code, dist) in &self.dist {
            let total: f64 = dist.values().sum();
            if !is_close(total, 1.0) {
                return Err(BjError::DistributionDrift {
                    what: format!("dealer distribution for {}", code),
                    sum: total,
                    expected: 1.0,
                });
            }
        }
        Ok(())
    }

    /// Nested code → score → probability view.
    pub fn to_json(&self) -> Value {
        let mut codes = Map::new();
        for (code, dist) in &self.dist {
            let mut scores = Map::new();
            for (&score, &prob) in dist {
                scores.insert(score.to_string(), Value::from(prob));
            }
            codes.insert(code.clone(), Value::Object(scores));
        }
        Value::Object(codes)
    }
}

/// A cache entry exists exactly when its code is fully resolved, so a miss
/// always means "recurse", never "zero mass".
fn resolve_code(cache: &mut BTreeMap<String, ScoreDist>, code: &str) -> BjResult<ScoreDist> {
    if let Some(dist) = cache.get(code) {
        return Ok(dist.clone());
    }
    let mut dist = ScoreDist::new();
    for &card in &ALL_RANKS {
        let next = draw_code(code, card, true, false)?;
        let sub = resolve_code(cache, &next)?;
        for (&score, &prob) in &sub {
            *dist.entry(score).or_insert(0.0) += card.probability() * prob;
        }
    }
    cache.insert(code.to_string(), dist.clone());
    Ok(dist)
}
