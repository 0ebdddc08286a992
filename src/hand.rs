//! A Blackjack hand and its canonical code.
//!
//! Codes classify hands for table lookup: hard totals ("4".."20"), soft
//! totals ("A2".."A9" and "AA"), pairs ("22".."TT"), blackjack "BJ",
//! multi-card 21 "21", and bust "00". Encoding is order-independent except
//! for the two-card pair and blackjack checks.

use crate::cards::Rank;
use crate::codes::BUST_CODE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
    dealer: bool,
}

impl Hand {
    pub fn player(x: Rank, y: Rank) -> Hand {
        Hand {
            cards: vec![x, y],
            dealer: false,
        }
    }

    pub fn dealer(x: Rank, y: Rank) -> Hand {
        Hand {
            cards: vec![x, y],
            dealer: true,
        }
    }

    pub fn with_cards(cards: Vec<Rank>, dealer: bool) -> Hand {
        Hand { cards, dealer }
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    pub fn is_dealer(&self) -> bool {
        self.dealer
    }

    /// A copy of this hand holding one more card.
    pub fn draw(&self, card: Rank) -> Hand {
        let mut cards = self.cards.clone();
        cards.push(card);
        Hand {
            cards,
            dealer: self.dealer,
        }
    }

    /// Probability of being dealt exactly these cards in this order.
    pub fn probability(&self) -> f64 {
        self.cards.iter().map(|c| c.probability()).product()
    }

    fn raw_total(&self) -> u32 {
        self.cards.iter().map(|c| c.value()).sum()
    }

    fn has_ace(&self) -> bool {
        self.cards.contains(&Rank::Ace)
    }

    /// The code that represents this hand, "00" if busted.
    ///
    /// `nosplit` treats a two-card pair as a plain hard/soft hand; an ace
    /// pair stays "AA" regardless. Dealer hands never produce non-ace pair
    /// codes, and a dealer ace-hand whose raw total exceeds 7 hardens.
    pub fn code(&self, nosplit: bool) -> String {
        let total = self.raw_total();

        if self.cards.len() == 2 && self.cards[0] == self.cards[1] {
            if self.cards[0] == Rank::Ace {
                return "AA".to_string();
            }
            if !nosplit && !self.dealer {
                let c = self.cards[0].to_char();
                return format!("{}{}", c, c);
            }
        }
        if self.cards.len() == 2 && total == 11 && self.has_ace() {
            return "BJ".to_string();
        }

        if total > 21 {
            return BUST_CODE.to_string();
        }
        if total > 11 {
            return total.to_string();
        }
        if self.has_ace() {
            if !self.dealer || total <= 7 {
                if total == 11 {
                    return "21".to_string();
                }
                return format!("A{}", total - 1);
            }
            return (total + 10).to_string();
        }
        total.to_string()
    }

    /// Final score of the hand, 0 if busted.
    pub fn value(&self) -> u32 {
        let total = self.raw_total();
        if self.has_ace() && total <= 11 {
            return total + 10;
        }
        if total <= 21 {
            total
        } else {
            0
        }
    }
}
