use super::card::Card;
use super::error::DeckError;
use super::hand::Hand;
use rand::Rng;
use rand::seq::SliceRandom;

/// A dealing order over the 52 unique cards.
///
/// Fresh decks come out rank-major; shuffle with the session's RNG before
/// dealing. Dealing removes cards, so no card can come off one deck twice.
/// There is no global randomness here: the same RNG state always produces
/// the same deck order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// All 52 cards, unshuffled.
    pub fn new() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }
    /// Uniformly permutes the remaining cards.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.0.shuffle(rng);
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Removes and returns `n` cards off the top.
    pub fn deal(&mut self, n: usize) -> Result<Hand, DeckError> {
        match self.0.len() {
            remaining if n > remaining => Err(DeckError::Insufficient {
                requested: n,
                remaining,
            }),
            remaining => Ok(Hand::from(self.0.split_off(remaining - n))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_deck_is_full() {
        let deck = Deck::new();
        assert_eq!(deck.size(), 52);
        assert_eq!(Deck::new(), deck);
    }

    #[test]
    fn deal_removes_exactly_n() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let dealt = deck.deal(7).unwrap();
        assert_eq!(dealt.size(), 7);
        assert_eq!(deck.size(), 45);
    }

    #[test]
    fn dealt_cards_leave_the_deck() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let dealt = deck.deal(7).unwrap();
        for card in dealt {
            assert!(!deck.contains(&card));
        }
    }

    #[test]
    fn deal_everything() {
        let mut deck = Deck::new();
        let dealt = deck.deal(52).unwrap();
        assert_eq!(dealt.size(), 52);
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn insufficient_cards() {
        let mut deck = Deck::new();
        assert_eq!(
            deck.deal(53),
            Err(DeckError::Insufficient {
                requested: 53,
                remaining: 52,
            })
        );
        deck.deal(50).unwrap();
        assert_eq!(
            deck.deal(3),
            Err(DeckError::Insufficient {
                requested: 3,
                remaining: 2,
            })
        );
    }

    #[test]
    fn shuffle_is_seeded() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut SmallRng::seed_from_u64(42));
        b.shuffle(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
        let mut c = Deck::new();
        c.shuffle(&mut SmallRng::seed_from_u64(43));
        assert_ne!(a, c);
    }
}
