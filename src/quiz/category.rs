use crate::cards::rank::Rank;
use crate::cards::ranking::Ranking;

/// An answer choice: one of the ten named hand categories.
///
/// This is the quiz's vocabulary, not the evaluator's. A royal flush is
/// just an ace-high [`Ranking::StraightFlush`] until it gets promoted
/// here for presentation, which keeps the tenth name out of the
/// classification logic.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    /// Every category, weakest first.
    pub const fn all() -> [Category; 10] {
        [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    }
    /// The name shown in prompts and feedback.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl From<Ranking> for Category {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOfAKind(_) => Category::ThreeOfAKind,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOfAKind(_) => Category::FourOfAKind,
            Ranking::StraightFlush(Rank::Ace) => Category::RoyalFlush,
            Ranking::StraightFlush(_) => Category::StraightFlush,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_ascending_categories() {
        let all = Category::all();
        assert_eq!(all.len(), 10);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn royal_promotion() {
        assert_eq!(
            Category::from(Ranking::StraightFlush(Rank::Ace)),
            Category::RoyalFlush
        );
        assert_eq!(
            Category::from(Ranking::StraightFlush(Rank::King)),
            Category::StraightFlush
        );
        assert_eq!(
            Category::from(Ranking::StraightFlush(Rank::Five)),
            Category::StraightFlush
        );
    }

    #[test]
    fn payload_stripped() {
        assert_eq!(
            Category::from(Ranking::FullHouse(Rank::Ace, Rank::King)),
            Category::from(Ranking::FullHouse(Rank::Two, Rank::Three))
        );
    }
}
