use super::mode::Mode;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::error::DeckError;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use rand::Rng;

/// One dealt quiz question.
///
/// Holdem deals keep the hole/board split for display; evaluation always
/// sees the union. Every scenario comes off its own fresh deck, so cards
/// never repeat within one and nothing carries over between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Draw(Hand),
    Holdem { hole: Hole, board: Board },
}

impl Scenario {
    /// Shuffles a fresh deck and deals one scenario.
    pub fn deal(mode: Mode, rng: &mut impl Rng) -> Result<Self, DeckError> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        match mode {
            Mode::Draw => {
                let hand = deck.deal(5)?;
                log::debug!("dealt {}", hand);
                Ok(Self::Draw(hand))
            }
            Mode::Holdem => {
                let hole = Hole::from(deck.deal(2)?);
                let board = Board::from(deck.deal(5)?);
                log::debug!("dealt hole {} board {}", hole, board);
                Ok(Self::Holdem { hole, board })
            }
        }
    }
    /// Every card in play, hole and board together.
    pub fn cards(&self) -> Hand {
        match self {
            Self::Draw(hand) => *hand,
            Self::Holdem { hole, board } => Hand::add(Hand::from(*hole), Hand::from(*board)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draw_deals_five() {
        let mut rng = SmallRng::seed_from_u64(3);
        let scenario = Scenario::deal(Mode::Draw, &mut rng).unwrap();
        assert_eq!(scenario.cards().size(), Mode::Draw.n_cards());
    }

    #[test]
    fn holdem_deals_seven_disjoint() {
        let mut rng = SmallRng::seed_from_u64(4);
        let scenario = Scenario::deal(Mode::Holdem, &mut rng).unwrap();
        // Hand::add would panic if hole and board overlapped
        assert_eq!(scenario.cards().size(), Mode::Holdem.n_cards());
    }

    #[test]
    fn seeded_deals_repeat() {
        let a = Scenario::deal(Mode::Holdem, &mut SmallRng::seed_from_u64(5)).unwrap();
        let b = Scenario::deal(Mode::Holdem, &mut SmallRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }
}
