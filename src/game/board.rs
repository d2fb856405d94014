use crate::CELLS;
use crate::SIDE;
use crate::SPAN;
use crate::Token;
use rand::Rng;
use rand::seq::SliceRandom;

/// Board is one fixed 5x5 card, stored row-major. Column i holds 5 distinct
/// numbers from its designated 15-value range ([1,15], [16,30], ..) in random
/// row order, so all 25 values are distinct by construction. A Board is dealt
/// once per batch and never mutated; called cells live in Marks instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board([Token; CELLS]);

impl Board {
    /// deal a fresh card. each column's range is independently
    /// permuted and the first 5 values land in rows 0..5.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut cells = [0; CELLS];
        for col in 0..SIDE {
            let mut range: [Token; SPAN] = std::array::from_fn(|i| (col * SPAN + i + 1) as Token);
            range.shuffle(rng);
            for row in 0..SIDE {
                cells[row * SIDE + col] = range[row];
            }
        }
        Self(cells)
    }

    /// the cell holding this token, if the card carries it at all.
    /// values are distinct, so at most one cell can match.
    pub fn find(&self, token: Token) -> Option<usize> {
        self.0.iter().position(|&value| value == token)
    }

    pub fn value(&self, row: usize, col: usize) -> Token {
        self.0[row * SIDE + col]
    }
}

/// [Token; 25] isomorphism, row-major. mostly for building fixtures.
impl From<[Token; CELLS]> for Board {
    fn from(cells: [Token; CELLS]) -> Self {
        Self(cells)
    }
}
impl From<Board> for [Token; CELLS] {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                write!(f, "{:>3}", self.value(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn all_values_distinct() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let board = Board::random(rng);
        let mut seen = std::collections::HashSet::new();
        for row in 0..SIDE {
            for col in 0..SIDE {
                assert!(seen.insert(board.value(row, col)));
            }
        }
        assert_eq!(seen.len(), CELLS);
    }

    #[test]
    fn columns_stay_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..32 {
            let board = Board::random(rng);
            for col in 0..SIDE {
                let lo = (col * SPAN + 1) as Token;
                let hi = (col * SPAN + SPAN) as Token;
                for row in 0..SIDE {
                    let value = board.value(row, col);
                    assert!(value >= lo && value <= hi);
                }
            }
        }
    }

    #[test]
    fn finds_only_carried_tokens() {
        let board = Board::from(std::array::from_fn(|i| (i + 1) as Token));
        assert_eq!(board.find(1), Some(0));
        assert_eq!(board.find(25), Some(24));
        assert_eq!(board.find(75), None);
    }
}
