use super::mode::Mode;
use super::render::Render;
use super::round::Round;
use super::score::Score;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::Select;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The interactive quiz loop.
///
/// Owns the session RNG, so one seed reproduces the entire dealing
/// sequence, option shuffles included. Quiz text goes to stdout and the
/// prompts block on stdin; diagnostics stay on stderr via the logger.
pub struct Session {
    mode: Mode,
    options: usize,
    rounds: Option<usize>,
    rng: SmallRng,
    score: Score,
}

impl Session {
    pub fn new(mode: Mode, options: usize, rounds: Option<usize>, seed: u64) -> Self {
        Self {
            mode,
            options,
            rounds,
            rng: SmallRng::seed_from_u64(seed),
            score: Score::default(),
        }
    }

    /// Plays rounds until the configured count runs out or the user
    /// declines another deal. Dealing and prompt failures abort the
    /// session; there is nothing sensible to retry.
    pub fn run(&mut self) -> anyhow::Result<Score> {
        log::info!("starting {} session", self.mode);
        println!("{}", "Name the best five-card hand you can make.".bold());
        loop {
            let round = Round::new(self.mode, self.options, &mut self.rng)?;
            println!();
            println!("{}", round.scenario().render());
            let labels = round
                .options()
                .iter()
                .map(|c| c.name())
                .collect::<Vec<&str>>();
            let choice = Select::new()
                .with_prompt("Best hand")
                .report(false)
                .items(labels.as_slice())
                .default(0)
                .interact()?;
            let correct = round.grade(choice);
            self.score.tally(correct);
            match correct {
                true => println!("{} {}", "✓".green().bold(), round.answer().name()),
                false => println!(
                    "{} {} is wrong, the best hand is a {}",
                    "✗".red().bold(),
                    labels[choice],
                    round.answer().name(),
                ),
            }
            println!("Score {}", self.score);
            match self.rounds {
                Some(n) if self.score.played() >= n => break,
                Some(_) => continue,
                None => match Confirm::new()
                    .with_prompt("Deal another?")
                    .default(true)
                    .interact()?
                {
                    true => continue,
                    false => break,
                },
            }
        }
        println!();
        println!(
            "Final score {} ({:.1}% accuracy)",
            self.score,
            self.score.accuracy()
        );
        log::info!("session over at {}", self.score);
        Ok(self.score)
    }
}
