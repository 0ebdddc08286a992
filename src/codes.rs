//! The fixed label sets for every solver table, and code arithmetic.

use once_cell::sync::Lazy;

use crate::cards::Rank;
use crate::error::{BjError, BjResult};
use crate::hand::Hand;

/// Code of a busted hand. Its score is 0, which keeps bust comparisons
/// integral against every live total.
pub const BUST_CODE: &str = "00";

/// Code names for all the hard hands.
pub const HARD_CODE: &[&str] = &[
    "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19", "20",
];

/// Code names for all the soft hands.
pub const SOFT_CODE: &[&str] = &["AA", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9"];

/// Code names for all the hands that can be split.
pub const SPLIT_CODE: &[&str] = &["22", "33", "44", "55", "66", "77", "88", "99", "TT", "AA"];

/// Codes on which the dealer stands, terminating the draw recursion.
pub const DEALER_STAND_CODE: &[&str] = &["17", "18", "19", "20", "21", BUST_CODE];

/// Code names for all the hands that cannot be split.
pub static NON_SPLIT_CODE: Lazy<Vec<&'static str>> =
    Lazy::new(|| [HARD_CODE, SOFT_CODE].concat());

/// Code names a player may stand on.
pub static STAND_CODE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut codes = HARD_CODE.to_vec();
    codes.push("21");
    codes.extend_from_slice(SOFT_CODE);
    codes
});

/// Row labels of the strategy tables. "AA" appears once, as the pair code.
pub static PLAYER_CODE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut codes = HARD_CODE.to_vec();
    codes.extend_from_slice(SPLIT_CODE);
    codes.extend_from_slice(&SOFT_CODE[1..]);
    codes
});

/// Column labels of every table: dealer starting codes. A dealer soft hand
/// past A6 hardens, so the soft side stops there.
pub static DEALER_CODE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut codes = HARD_CODE.to_vec();
    codes.extend_from_slice(&SOFT_CODE[..6]);
    codes
});

/// Player starting codes. Two-card hard 4 is always the pair 22, and hard
/// 20 is always TT, so both drop out.
pub static INITIAL_CODE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut codes = HARD_CODE[1..HARD_CODE.len() - 1].to_vec();
    codes.extend_from_slice(SPLIT_CODE);
    codes.extend_from_slice(&SOFT_CODE[1..]);
    codes.push("BJ");
    codes
});

/// Column labels of the initial distribution: dealer codes plus blackjack.
pub static DEALER_START_CODE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut codes = DEALER_CODE.clone();
    codes.push("BJ");
    codes
});

/// The fixed numeric score of a code, used for stand comparisons.
pub fn code_score(code: &str) -> BjResult<u32> {
    match code {
        "BJ" | "21" => return Ok(21),
        "TT" => return Ok(20),
        "AA" => return Ok(12),
        BUST_CODE => return Ok(0),
        _ => {}
    }
    if HARD_CODE.contains(&code) {
        return code
            .parse()
            .map_err(|_| BjError::InvalidCode(code.to_string()));
    }
    if let Some(rest) = code.strip_prefix('A') {
        if let Ok(n) = rest.parse::<u32>() {
            return Ok(n + 11);
        }
    }
    let chars: Vec<char> = code.chars().collect();
    if chars.len() == 2 && chars[0] == chars[1] {
        if let Some(d) = chars[0].to_digit(10) {
            return Ok(2 * d);
        }
    }
    Err(BjError::InvalidCode(code.to_string()))
}

/// Representative cards for a code: a hand that re-derives the same code
/// and the same successor codes under a draw. "BJ", "21", "20" and "4" are
/// spelled out to dodge pair and blackjack collisions.
pub fn code_cards(code: &str) -> BjResult<Vec<Rank>> {
    let spelled: String = match code {
        "BJ" => "AT".to_string(),
        "21" => "777".to_string(),
        "20" => "28T".to_string(),
        "4" => "4".to_string(),
        _ if HARD_CODE.contains(&code) => {
            let n: u32 = code
                .parse()
                .map_err(|_| BjError::InvalidCode(code.to_string()))?;
            if n <= 11 {
                format!("2{}", n - 2)
            } else {
                format!("T{}", n - 10)
            }
        }
        _ if SOFT_CODE.contains(&code) || SPLIT_CODE.contains(&code) => code.to_string(),
        _ => return Err(BjError::InvalidCode(code.to_string())),
    };
    spelled.chars().map(Rank::from_char).collect()
}

/// Code of a representative hand for `code` after drawing one more card.
pub fn draw_code(code: &str, card: Rank, dealer: bool, nosplit: bool) -> BjResult<String> {
    let mut cards = code_cards(code)?;
    cards.push(card);
    Ok(Hand::with_cards(cards, dealer).code(nosplit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_set_sizes() {
        assert_eq!(HARD_CODE.len(), 17);
        assert_eq!(SOFT_CODE.len(), 9);
        assert_eq!(SPLIT_CODE.len(), 10);
        assert_eq!(NON_SPLIT_CODE.len(), 26);
        assert_eq!(STAND_CODE.len(), 27);
        assert_eq!(PLAYER_CODE.len(), 35);
        assert_eq!(DEALER_CODE.len(), 23);
        assert_eq!(INITIAL_CODE.len(), 34);
        assert_eq!(DEALER_START_CODE.len(), 24);
    }

    #[test]
    fn test_code_score() {
        assert_eq!(code_score("BJ").unwrap(), 21);
        assert_eq!(code_score("21").unwrap(), 21);
        assert_eq!(code_score("TT").unwrap(), 20);
        assert_eq!(code_score("AA").unwrap(), 12);
        assert_eq!(code_score("00").unwrap(), 0);
        assert_eq!(code_score("17").unwrap(), 17);
        assert_eq!(code_score("A2").unwrap(), 13);
        assert_eq!(code_score("A9").unwrap(), 20);
        assert_eq!(code_score("22").unwrap(), 4);
        assert_eq!(code_score("99").unwrap(), 18);
        assert!(code_score("XX").is_err());
    }

    #[test]
    fn test_code_cards_round_trips() {
        // Every player-facing code re-derives itself from its own cards.
        for &code in PLAYER_CODE.iter() {
            let hand = Hand::with_cards(code_cards(code).unwrap(), false);
            assert_eq!(hand.code(false), code, "round trip for {}", code);
        }
        let bj = Hand::with_cards(code_cards("BJ").unwrap(), false);
        assert_eq!(bj.code(false), "BJ");
        let twenty_one = Hand::with_cards(code_cards("21").unwrap(), false);
        assert_eq!(twenty_one.code(false), "21");
    }

    #[test]
    fn test_draw_code_dealer_hardening() {
        // A6 + A is soft 18 for a player but hard 18 for the dealer.
        assert_eq!(draw_code("A6", Rank::Ace, true, false).unwrap(), "18");
        assert_eq!(draw_code("A6", Rank::Ace, false, true).unwrap(), "A7");
    }

    #[test]
    fn test_draw_code_busts() {
        assert_eq!(draw_code("16", Rank::Ten, true, false).unwrap(), "00");
        assert_eq!(draw_code("20", Rank::Ace, false, true).unwrap(), "21");
    }
}
