//! The 8x8 board coordinate model shared by both trainers.
//!
//! A [`Square`] is addressed by `(col, row)` where `col` 0-7 maps to files
//! a-h left to right and `row` 0-7 runs top to bottom (row 0 is rank 8,
//! row 7 is rank 1), matching the display orientation of the board.

use rand::Rng;

/// File letters, left to right.
pub const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rank digits, top to bottom.
pub const RANKS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// Board side length.
pub const BOARD_SIZE: u8 = 8;

/// A single board square in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    /// Column 0-7, file a-h.
    pub col: u8,
    /// Row 0-7, rank 8 down to rank 1.
    pub row: u8,
}

impl Square {
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE && row < BOARD_SIZE);
        Self { col, row }
    }

    /// The algebraic name of this square, e.g. `"e4"`.
    pub fn name(&self) -> String {
        format!("{}{}", FILES[self.col as usize], RANKS[self.row as usize])
    }

    /// Parse an algebraic square name. Case-insensitive, surrounding
    /// whitespace ignored. Returns `None` for anything that is not exactly
    /// a file letter followed by a rank digit.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        let mut chars = normalized.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let col = FILES.iter().position(|&f| f == file)?;
        let row = RANKS.iter().position(|&r| r == rank)?;
        Some(Self {
            col: col as u8,
            row: row as u8,
        })
    }

    /// Draw a square uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            col: rng.gen_range(0..BOARD_SIZE),
            row: rng.gen_range(0..BOARD_SIZE),
        }
    }

    /// The square offset by `(dc, dr)`, or `None` if it falls off the board.
    pub fn offset(&self, dc: i8, dr: i8) -> Option<Self> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if (0..BOARD_SIZE as i8).contains(&col) && (0..BOARD_SIZE as i8).contains(&row) {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over all 64 squares.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { col, row }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_name_corner_squares() {
        assert_eq!(Square::new(0, 0).name(), "a8");
        assert_eq!(Square::new(7, 0).name(), "h8");
        assert_eq!(Square::new(0, 7).name(), "a1");
        assert_eq!(Square::new(7, 7).name(), "h1");
    }

    #[test]
    fn test_parse_accepts_case_and_whitespace() {
        assert_eq!(Square::parse("e4"), Some(Square::new(4, 4)));
        assert_eq!(Square::parse("E4"), Some(Square::new(4, 4)));
        assert_eq!(Square::parse("  d7 "), Some(Square::new(3, 1)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Square::parse(""), None);
        assert_eq!(Square::parse("e"), None);
        assert_eq!(Square::parse("e44"), None);
        assert_eq!(Square::parse("i4"), None);
        assert_eq!(Square::parse("e9"), None);
        assert_eq!(Square::parse("44"), None);
    }

    #[test]
    fn test_name_parse_roundtrip_all_squares() {
        for square in Square::all() {
            assert_eq!(Square::parse(&square.name()), Some(square));
        }
    }

    #[test]
    fn test_offset_clipping() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1)));

        let other = Square::new(7, 7);
        assert_eq!(other.offset(1, 0), None);
        assert_eq!(other.offset(0, 1), None);
    }

    #[test]
    fn test_random_stays_on_board() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let square = Square::random(&mut rng);
            assert!(square.col < 8 && square.row < 8);
        }
    }

    #[test]
    fn test_all_yields_64_distinct_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        for (i, a) in squares.iter().enumerate() {
            for b in &squares[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
