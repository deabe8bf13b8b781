use super::rank::Rank;

/// The value category of a five-card poker hand.
///
/// Variants are declared weakest to strongest, so the derived order is the
/// showdown order: HighCard < OnePair < TwoPair < ThreeOfAKind < Straight
/// < Flush < FullHouse < FourOfAKind < StraightFlush. Payloads carry the
/// decisive ranks (pair rank, straight or flush high card, full house
/// trips then pair) and nothing else; kickers are out of scope.
///
/// An ace-high StraightFlush is what a royal flush looks like here. It is
/// deliberately not a variant of its own: callers that want to crown it
/// can inspect the payload.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),
    OnePair(Rank),
    TwoPair(Rank, Rank),
    ThreeOfAKind(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank, Rank),
    FourOfAKind(Rank),
    StraightFlush(Rank),
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOfAKind(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::FourOfAKind(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_ascend() {
        assert!(Ranking::OnePair(Rank::Two) > Ranking::HighCard(Rank::Ace));
        assert!(Ranking::TwoPair(Rank::Two, Rank::Three) > Ranking::OnePair(Rank::Ace));
        assert!(Ranking::ThreeOfAKind(Rank::Two) > Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(Ranking::Straight(Rank::Five) > Ranking::ThreeOfAKind(Rank::Ace));
        assert!(Ranking::Flush(Rank::Seven) > Ranking::Straight(Rank::Ace));
        assert!(Ranking::FullHouse(Rank::Two, Rank::Three) > Ranking::Flush(Rank::Ace));
        assert!(Ranking::FourOfAKind(Rank::Two) > Ranking::FullHouse(Rank::Ace, Rank::King));
        assert!(Ranking::StraightFlush(Rank::Five) > Ranking::FourOfAKind(Rank::Ace));
    }

    #[test]
    fn quads_beat_flush() {
        assert!(Ranking::FourOfAKind(Rank::Two) > Ranking::Flush(Rank::Ace));
    }
}
