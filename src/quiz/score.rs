/// Running tally across rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    played: usize,
}

impl Score {
    pub fn tally(&mut self, correct: bool) {
        self.played += 1;
        if correct {
            self.correct += 1;
        }
    }
    pub fn correct(&self) -> usize {
        self.correct
    }
    pub fn played(&self) -> usize {
        self.played
    }
    /// Share of correct answers in percent. Zero before any rounds.
    pub fn accuracy(&self) -> f64 {
        match self.played {
            0 => 0.0,
            n => 100.0 * self.correct as f64 / n as f64,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.played)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_arithmetic() {
        let mut score = Score::default();
        score.tally(true);
        score.tally(false);
        score.tally(true);
        assert_eq!(score.correct(), 2);
        assert_eq!(score.played(), 3);
        assert_eq!(score.to_string(), "2/3");
    }

    #[test]
    fn accuracy_percentage() {
        let mut score = Score::default();
        assert_eq!(score.accuracy(), 0.0);
        score.tally(true);
        score.tally(false);
        score.tally(false);
        score.tally(true);
        assert_eq!(score.accuracy(), 50.0);
    }
}
