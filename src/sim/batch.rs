use super::lengths::Lengths;
use crate::game::board::Board;
use crate::game::draws::Draws;
use crate::game::trial::NonTerminating;
use crate::game::trial::game_length;
use rand::Rng;

/// Batch is one unit of parallel work: a single fresh card played through a
/// fixed number of trials, each with its own calling order, tallied into one
/// frequency table. owns its rng outright so batches share nothing.
pub struct Batch<R> {
    trials: usize,
    rng: R,
}

impl<R: Rng> Batch<R> {
    pub fn new(trials: usize, rng: R) -> Self {
        Self { trials, rng }
    }

    /// deal the card, play every trial against it, and tally
    pub fn run(mut self) -> Result<Lengths, NonTerminating> {
        let board = Board::random(&mut self.rng);
        let mut lengths = Lengths::default();
        for _ in 0..self.trials {
            let draws = Draws::random(&mut self.rng);
            lengths.record(game_length(&board, draws)?);
        }
        Ok(lengths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TOKENS;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn tallies_one_count_per_trial() {
        let lengths = Batch::new(500, SmallRng::seed_from_u64(0)).run().unwrap();
        assert_eq!(lengths.total(), 500);
        for (length, _) in lengths.iter() {
            assert!(length < TOKENS);
        }
    }

    #[test]
    fn same_seed_same_tally() {
        let one = Batch::new(100, SmallRng::seed_from_u64(9)).run().unwrap();
        let two = Batch::new(100, SmallRng::seed_from_u64(9)).run().unwrap();
        assert_eq!(one, two);
    }
}
