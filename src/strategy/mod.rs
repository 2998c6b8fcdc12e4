//! Move selection strategies

pub mod first;
pub mod random;
pub mod scripted;

mod traits;
pub use traits::*;

pub use first::FirstFreeStrategy;
pub use random::RandomStrategy;
pub use scripted::ScriptedStrategy;

use crate::engine::{EngineOptions, StrategyKind};

/// Build the strategy selected in `options`.
pub fn build_strategy(options: &EngineOptions) -> Box<dyn Strategy> {
    match options.strategy {
        StrategyKind::Random => match options.seed {
            Some(seed) => Box::new(RandomStrategy::seeded(seed)),
            None => Box::new(RandomStrategy::new()),
        },
        StrategyKind::First => Box::new(FirstFreeStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GlobalBoard;

    #[test]
    fn test_build_strategy() {
        let first = build_strategy(&EngineOptions::new(StrategyKind::First, None));
        assert_eq!(first.name(), "first");

        let mut random = build_strategy(&EngineOptions::new(StrategyKind::Random, Some(9)));
        assert_eq!(random.name(), "random");

        let mv = random.choose(&GlobalBoard::new().snapshot(), &[2]).unwrap();
        assert_eq!(mv.board, 2);
        assert!(mv.in_bounds());
    }
}
