use clap::ValueEnum;

/// How a scenario is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Five cards, no board.
    Draw,
    /// Two hole cards plus a five-card board.
    Holdem,
}

impl Mode {
    /// Total cards a scenario of this mode puts in play.
    pub fn n_cards(&self) -> usize {
        match self {
            Mode::Draw => 5,
            Mode::Holdem => 7,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Mode::Draw => "draw",
                Mode::Holdem => "holdem",
            }
        )
    }
}
