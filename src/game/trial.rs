use super::board::Board;
use super::draws::Draws;
use super::marks::Marks;
use crate::TOKENS;

/// A calling order ran dry without any line completing. Impossible for a
/// well-formed Board fed a full 75-token order (any 24-cell state already
/// holds four complete rows), so reaching this means board generation or win
/// detection is broken. Surfaced instead of swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonTerminating;

impl std::fmt::Display for NonTerminating {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "calling order exhausted after {} draws without a completed line",
            TOKENS
        )
    }
}
impl std::error::Error for NonTerminating {}

/// play one trial to completion. the win check runs before each draw is
/// applied, so the free-center state counts as step 0 and the result is the
/// 0-based index of the draw at which some line first completes. tokens the
/// card does not carry mark nothing. always lands in [0, 74].
pub fn game_length(board: &Board, draws: Draws) -> Result<usize, NonTerminating> {
    let mut marks = Marks::free();
    for (n, token) in draws.enumerate() {
        if marks.wins() {
            return Ok(n);
        }
        if let Some(cell) = board.find(token) {
            marks.mark(cell);
        }
    }
    Err(NonTerminating)
}
