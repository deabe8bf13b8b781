/// A playing card packed into a single byte, `rank * 4 + suit`.
///
/// The packing is what lines cards up with the Hand bitmask: each rank
/// owns one nibble, each suit one bit lane within it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self(u8::from(rank) * 4 + u8::from(suit))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52);
        Self(n)
    }
}

/// u64 injection
/// each card is just one bit turned on
/// Ts
/// xxxxxxxxxxxx 0000000000001000000000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism
/// two characters, rank then suit: "As", "Tc", "9h"
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().len() {
            2 => {
                let rank = Rank::try_from(&s.trim()[0..1])?;
                let suit = Suit::try_from(&s.trim()[1..2])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

use super::rank::Rank;
use super::suit::Suit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let card = Card::from((Rank::Ten, Suit::Spade));
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_u64() {
        let card = Card::from((Rank::Two, Suit::Club));
        assert!(card == Card::from(u64::from(card)));
    }

    #[test]
    fn bijective_rank_suit() {
        let card = Card::from((Rank::Queen, Suit::Diamond));
        assert!(card.rank() == Rank::Queen);
        assert!(card.suit() == Suit::Diamond);
    }

    #[test]
    fn parse_notation() {
        assert!(Card::try_from("As") == Ok(Card::from((Rank::Ace, Suit::Spade))));
        assert!(Card::try_from("Tc") == Ok(Card::from((Rank::Ten, Suit::Club))));
        assert!(Card::try_from("Asd").is_err());
        assert!(Card::try_from("Zs").is_err());
    }
}
