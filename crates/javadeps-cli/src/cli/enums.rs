use clap::ValueEnum;
use javadeps_core::CollisionStrategy;

/// How to treat two source files declaring the same simple type name
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum CollisionArg {
    /// The file visited last wins (default)
    #[value(name = "last-wins")]
    LastWins,

    /// The file visited first wins
    #[value(name = "first-wins")]
    FirstWins,

    /// Abort when two files share a name
    #[value(name = "error")]
    Error,

    /// Keep every candidate; prefer one next to the referencing file
    #[value(name = "multi")]
    Multi,
}

impl From<CollisionArg> for CollisionStrategy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::LastWins => CollisionStrategy::LastWins,
            CollisionArg::FirstWins => CollisionStrategy::FirstWins,
            CollisionArg::Error => CollisionStrategy::Error,
            CollisionArg::Multi => CollisionStrategy::Multi,
        }
    }
}
