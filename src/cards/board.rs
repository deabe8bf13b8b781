use super::hand::Hand;

/// The five community cards, dealt all at once.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Board(Hand);

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hand> for Board {
    fn from(hand: Hand) -> Self {
        assert!(hand.size() == 5);
        Self(hand)
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_community_cards() {
        let board = Board::from(Hand::try_from("2c 7d 9h Js Qs").unwrap());
        assert_eq!(Hand::from(board).size(), 5);
    }

    #[test]
    #[should_panic]
    fn rejects_wrong_size() {
        let _ = Board::from(Hand::try_from("2c 7d 9h Js").unwrap());
    }
}
