use crate::TOKENS;
use crate::Token;
use rand::Rng;
use rand::seq::SliceRandom;

/// Draws is one calling order: all 75 numbers in uniformly random order,
/// consumed one token at a time through Iterator. Single-use and ephemeral;
/// every trial shuffles its own.
#[derive(Debug, Clone)]
pub struct Draws {
    order: [Token; TOKENS],
    drawn: usize,
}

impl Draws {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut order: [Token; TOKENS] = std::array::from_fn(|i| (i + 1) as Token);
        order.shuffle(rng);
        Self { order, drawn: 0 }
    }

    pub fn remaining(&self) -> usize {
        TOKENS - self.drawn
    }
}

/// a fixed calling order, for fixtures and replays
impl From<[Token; TOKENS]> for Draws {
    fn from(order: [Token; TOKENS]) -> Self {
        Self { order, drawn: 0 }
    }
}

impl Iterator for Draws {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        if self.drawn < TOKENS {
            let token = self.order[self.drawn];
            self.drawn += 1;
            Some(token)
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Draws {}
