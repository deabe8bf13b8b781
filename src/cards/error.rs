use thiserror::Error;

/// Dealing failed because the deck ran out of cards.
///
/// Scenarios deal at most seven cards from a fresh deck, so hitting this
/// means the caller misused the deck; it fails loudly rather than ever
/// dealing a duplicate.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DeckError {
    #[error("cannot deal {requested} cards with {remaining} remaining")]
    Insufficient { requested: usize, remaining: usize },
}

/// Evaluation refused a card set below the five-card minimum.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EvalError {
    #[error("cannot evaluate {size} cards, need at least 5")]
    InvalidHandSize { size: usize },
}
