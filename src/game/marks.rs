use crate::CELLS;
use crate::CENTER;
use crate::SIDE;

/// Marks is the called-cell state of one card: one bit per cell, row-major
/// from the LSB, so bit 12 is the free center. nice to keep the whole grid in
/// a single word; the win rule reduces to twelve mask compares, one per
/// completable line.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Marks(u32);

/// the 5 rows, 5 columns, and 2 diagonals that end a game
const LINES: [u32; 12] = [
    0b11111,
    0b11111 << 5,
    0b11111 << 10,
    0b11111 << 15,
    0b11111 << 20,
    0x108421, // column 0: bits 0, 5, 10, 15, 20
    0x108421 << 1,
    0x108421 << 2,
    0x108421 << 3,
    0x108421 << 4,
    0x1041041, // main diagonal: bits 0, 6, 12, 18, 24
    0x0111110, // anti diagonal: bits 4, 8, 12, 16, 20
];

impl Marks {
    /// trial starting state: only the free center is called
    pub fn free() -> Self {
        Self(1 << CENTER)
    }

    pub fn empty() -> Self {
        Self(0)
    }

    pub fn mark(&mut self, cell: usize) {
        assert!(cell < CELLS);
        self.0 |= 1 << cell;
    }

    pub fn marked(&self, cell: usize) -> bool {
        self.0 & (1 << cell) != 0
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// whether any row, column, or diagonal is fully called
    pub fn wins(&self) -> bool {
        LINES.iter().any(|line| self.0 & line == *line)
    }

    const fn mask() -> u32 {
        (1 << CELLS) - 1
    }
}

/// u32 isomorphism over the low 25 bits
impl From<u32> for Marks {
    fn from(bits: u32) -> Self {
        Self(bits & Self::mask())
    }
}
impl From<Marks> for u32 {
    fn from(marks: Marks) -> Self {
        marks.0
    }
}

impl std::fmt::Display for Marks {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                match self.marked(row * SIDE + col) {
                    true => write!(f, " x")?,
                    false => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(cells: &[usize]) -> Marks {
        let mut marks = Marks::empty();
        for &cell in cells {
            marks.mark(cell);
        }
        marks
    }

    #[test]
    fn free_center_alone_is_not_a_win() {
        let marks = Marks::free();
        assert_eq!(marks.size(), 1);
        assert!(marks.marked(CENTER));
        assert!(!marks.wins());
    }

    #[test]
    fn full_card_wins() {
        assert!(Marks::from(u32::MAX).wins());
    }

    #[test]
    fn single_row_wins() {
        for row in 0..SIDE {
            let cells = (0..SIDE).map(|col| row * SIDE + col).collect::<Vec<_>>();
            assert!(marked(&cells).wins());
        }
    }

    #[test]
    fn single_column_wins() {
        for col in 0..SIDE {
            let cells = (0..SIDE).map(|row| row * SIDE + col).collect::<Vec<_>>();
            assert!(marked(&cells).wins());
        }
    }

    #[test]
    fn either_diagonal_wins() {
        let main = (0..SIDE).map(|i| i * SIDE + i).collect::<Vec<_>>();
        let anti = (0..SIDE).map(|i| i * SIDE + (SIDE - 1 - i)).collect::<Vec<_>>();
        assert!(marked(&main).wins());
        assert!(marked(&anti).wins());
    }

    #[test]
    fn four_in_every_line_is_not_a_win() {
        // leave (0,1), (1,0), (2,2), (3,4), (4,3) uncalled: every row,
        // every column, and both diagonals are short exactly one cell
        let holes = [1, 5, 12, 19, 23];
        let cells = (0..CELLS).filter(|c| !holes.contains(c)).collect::<Vec<_>>();
        let marks = marked(&cells);
        assert_eq!(marks.size(), CELLS - holes.len());
        assert!(!marks.wins());
    }

    #[test]
    fn bijective_u32() {
        let marks = marked(&[0, 7, 12, 24]);
        assert_eq!(marks, Marks::from(u32::from(marks)));
    }
}
