use clap::ValueEnum;

/// Difficulty tiers, keyed off vote counts: the more votes a movie has, the
/// more likely a player is to have heard of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Whether a row with this many votes belongs to the tier's pool.
    pub(crate) fn admits(&self, votes: u64) -> bool {
        match self {
            Difficulty::Easy => votes > 100_000,
            Difficulty::Medium => votes > 50_000 && votes <= 100_000,
            Difficulty::Hard => votes <= 50_000,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}
