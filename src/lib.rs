pub mod game;
pub mod report;
pub mod sim;

/// Point and cumulative probabilities over game lengths.
pub type Probability = f64;
/// Trial tallies in frequency tables.
pub type Count = u64;
/// A callable number, 1..=75.
pub type Token = u8;

/// Side length of the square card.
pub const SIDE: usize = 5;
/// Cells on a card.
pub const CELLS: usize = SIDE * SIDE;
/// Numbers in each column's designated range.
pub const SPAN: usize = 15;
/// Callable numbers in the game.
pub const TOKENS: usize = SIDE * SPAN;
/// Row-major index of the free center cell.
pub const CENTER: usize = CELLS / 2;
