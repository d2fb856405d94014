use super::batch::Batch;
use super::lengths::Lengths;
use crate::game::trial::NonTerminating;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// Runner fans the trial budget out across rayon's worker pool, one task per
/// batch, and merges the tables once every batch lands. batches share no
/// state; each derives its own rng stream, so a fixed seed reproduces the
/// whole run regardless of scheduling order. a failed batch fails the run
/// outright rather than merging a partial table.
pub struct Runner {
    repeats: usize,
    trials: usize,
    seed: Option<u64>,
}

impl Runner {
    pub fn new(repeats: usize, trials: usize, seed: Option<u64>) -> Self {
        assert!(repeats > 0 && trials > 0);
        Self {
            repeats,
            trials,
            seed,
        }
    }

    pub fn run(&self) -> Result<Lengths, NonTerminating> {
        let clock = std::time::Instant::now();
        log::info!(
            "dispatching {} batches of {} trials",
            self.repeats,
            self.trials
        );
        let lengths = (0..self.repeats)
            .into_par_iter()
            .map(|batch| Batch::new(self.trials, self.stream(batch)).run())
            .inspect(|result| match result {
                Ok(lengths) => log::debug!("batch tallied {} trials", lengths.total()),
                Err(e) => log::error!("batch failed: {}", e),
            })
            .collect::<Result<Vec<Lengths>, NonTerminating>>()?
            .into_iter()
            .sum::<Lengths>();
        log::info!(
            "merged {} trials in {:.2?}",
            lengths.total(),
            clock.elapsed()
        );
        Ok(lengths)
    }

    /// per-batch rng: split deterministically off the base seed when one is
    /// given, otherwise seeded fresh from the operating system
    fn stream(&self, batch: usize) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(batch as u64)),
            None => SmallRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accounts_for_every_trial() {
        let lengths = Runner::new(4, 250, Some(0)).run().unwrap();
        assert_eq!(lengths.total(), 1000);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let one = Runner::new(3, 100, Some(42)).run().unwrap();
        let two = Runner::new(3, 100, Some(42)).run().unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn single_trial_seeded_run_is_reproducible() {
        let one = Runner::new(1, 1, Some(7)).run().unwrap();
        let two = Runner::new(1, 1, Some(7)).run().unwrap();
        assert_eq!(one.total(), 1);
        assert_eq!(one, two);
        let (length, count) = one.iter().next().unwrap();
        assert!(length < crate::TOKENS);
        assert_eq!(count, 1);
    }

    #[test]
    fn single_batch_matches_direct_aggregation() {
        use super::Batch;
        use rand::SeedableRng;
        let runner = Runner::new(1, 200, Some(3)).run().unwrap();
        let direct = Batch::new(200, SmallRng::seed_from_u64(3)).run().unwrap();
        assert_eq!(runner, direct);
    }
}
