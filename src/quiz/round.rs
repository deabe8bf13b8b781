use super::category::Category;
use super::mode::Mode;
use super::scenario::Scenario;
use crate::cards::error::DeckError;
use crate::cards::ranking::Ranking;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// One multiple-choice question.
///
/// A dealt scenario, its evaluated ranking, and a shuffled option list
/// holding the correct category plus distinct distractors drawn from the
/// other nine. Construction is pure given the RNG; nothing here touches
/// the terminal.
#[derive(Debug, Clone)]
pub struct Round {
    scenario: Scenario,
    ranking: Ranking,
    options: Vec<Category>,
}

impl Round {
    /// Deals and evaluates one round with `n_options` answer choices.
    ///
    /// Choices are capped by the ten categories; the correct one is
    /// always among them, at a uniformly random position.
    pub fn new(mode: Mode, n_options: usize, rng: &mut impl Rng) -> Result<Self, DeckError> {
        let scenario = Scenario::deal(mode, rng)?;
        let ranking =
            Ranking::try_from(scenario.cards()).expect("scenarios deal at least five cards");
        let answer = Category::from(ranking);
        let pool = Category::all()
            .iter()
            .copied()
            .filter(|c| *c != answer)
            .collect::<Vec<Category>>();
        let mut options = pool
            .choose_multiple(rng, n_options.saturating_sub(1))
            .copied()
            .collect::<Vec<Category>>();
        options.push(answer);
        options.shuffle(rng);
        log::debug!("{} makes {}", scenario.cards(), ranking);
        Ok(Self {
            scenario,
            ranking,
            options,
        })
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn answer(&self) -> Category {
        Category::from(self.ranking)
    }
    pub fn options(&self) -> &[Category] {
        &self.options
    }
    /// True exactly when the option at `choice` is the correct category.
    pub fn grade(&self, choice: usize) -> bool {
        self.options.get(choice).copied() == Some(self.answer())
    }
}
