use super::scenario::Scenario;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use colored::Colorize;

/// Table-style rendering: rank plus suit pip, red suits in red.
///
/// Strictly cosmetic; evaluation never looks at any of this.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Card {
    fn render(&self) -> String {
        let text = format!("{}{}", self.rank(), self.suit().glyph());
        match self.suit().is_red() {
            true => text.red().to_string(),
            false => text,
        }
    }
}

/// Cards low to high, space separated.
impl Render for Hand {
    fn render(&self) -> String {
        self.into_iter()
            .map(|card| card.render())
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl Render for Scenario {
    fn render(&self) -> String {
        match self {
            Scenario::Draw(hand) => format!("Cards  {}", hand.render()),
            Scenario::Holdem { hole, board } => format!(
                "Board  {}\nHole   {}",
                Hand::from(*board).render(),
                Hand::from(*hole).render(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::mode::Mode;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn pips_survive_coloring() {
        assert!(Card::try_from("Ah").unwrap().render().contains("A♥"));
        assert!(Card::try_from("Tc").unwrap().render().contains("T♣"));
    }

    #[test]
    fn holdem_renders_both_lines() {
        let mut rng = SmallRng::seed_from_u64(12);
        let scenario = Scenario::deal(Mode::Holdem, &mut rng).unwrap();
        let lines = scenario.render();
        assert!(lines.contains("Board"));
        assert!(lines.contains("Hole"));
    }
}
