use super::card::Card;
use super::hand::Hand;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hand> for Hole {
    fn from(hand: Hand) -> Self {
        assert!(hand.size() == 2);
        Self(hand)
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = Hand::from(u64::from(cards.0));
        let b = Hand::from(u64::from(cards.1));
        Self(Hand::add(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pair() {
        let a = Card::try_from("As").unwrap();
        let b = Card::try_from("Ah").unwrap();
        assert_eq!(Hand::from(Hole::from((a, b))).size(), 2);
    }

    #[test]
    #[should_panic]
    fn rejects_duplicates() {
        let a = Card::try_from("As").unwrap();
        let _ = Hole::from((a, a));
    }

    #[test]
    #[should_panic]
    fn rejects_wrong_size() {
        let _ = Hole::from(Hand::try_from("As Kh Qd").unwrap());
    }
}
