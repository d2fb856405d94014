use crate::Count;
use crate::TOKENS;

/// Lengths tallies how many trials ended at each game length. a fixed-width
/// array beats a map here since lengths never leave 0..75; the index is the
/// length and the sum of counts equals the trials recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lengths([Count; TOKENS]);

impl Default for Lengths {
    fn default() -> Self {
        Self([0; TOKENS])
    }
}

impl Lengths {
    pub fn record(&mut self, length: usize) {
        self.0[length] += 1;
    }

    pub fn count(&self, length: usize) -> Count {
        self.0[length]
    }

    /// trials tallied so far
    pub fn total(&self) -> Count {
        self.0.iter().sum()
    }

    /// observed lengths and their counts, ascending, zeros skipped
    pub fn iter(&self) -> impl Iterator<Item = (usize, Count)> + '_ {
        self.0
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, count)| *count > 0)
    }
}

/// batches merge by per-length summation. commutative and associative, with
/// Lengths::default() as the identity, so merge order never matters.
impl std::ops::Add for Lengths {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}
impl std::ops::AddAssign for Lengths {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}
impl std::iter::Sum for Lengths {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), std::ops::Add::add)
    }
}
