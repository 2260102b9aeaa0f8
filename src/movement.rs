//! Piece movement model: geometric attack-square enumeration.
//!
//! This is deliberately not chess legality. Attack sets are computed against
//! an empty board, so sliding pieces reach every square along their lines to
//! the edge. Good enough for teaching how each piece moves.

use crate::board::Square;
use rand::Rng;

/// The four cardinal directions (rook lines).
const CARDINALS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// The four diagonal directions (bishop lines).
const DIAGONALS: [(i8, i8); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];

/// All eight directions (queen lines, king ring).
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];

/// The piece kinds the capture trainer teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Rook,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Draw a kind uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// White piece glyph for board rendering.
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::Rook => '\u{2656}',
            PieceKind::Bishop => '\u{2657}',
            PieceKind::Queen => '\u{2655}',
            PieceKind::King => '\u{2654}',
        }
    }

    /// The movement directions of this kind.
    pub fn directions(&self) -> &'static [(i8, i8)] {
        match self {
            PieceKind::Rook => &CARDINALS,
            PieceKind::Bishop => &DIAGONALS,
            PieceKind::Queen => &ALL_DIRECTIONS,
            PieceKind::King => &ALL_DIRECTIONS,
        }
    }

    /// Whether this kind slides to the board edge (king steps one square).
    pub fn is_sliding(&self) -> bool {
        !matches!(self, PieceKind::King)
    }
}

/// All squares `kind` attacks from `from` on an otherwise empty board.
pub fn attack_squares(kind: PieceKind, from: Square) -> Vec<Square> {
    let mut squares = Vec::new();
    for &(dc, dr) in kind.directions() {
        let mut current = from;
        while let Some(next) = current.offset(dc, dr) {
            squares.push(next);
            if !kind.is_sliding() {
                break;
            }
            current = next;
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_corner_attacks_14() {
        let attacks = attack_squares(PieceKind::Rook, Square::new(0, 0));
        assert_eq!(attacks.len(), 14);
        assert!(attacks.contains(&Square::new(7, 0)));
        assert!(attacks.contains(&Square::new(0, 7)));
        assert!(!attacks.contains(&Square::new(0, 0)));
    }

    #[test]
    fn test_bishop_corner_attacks_7() {
        let attacks = attack_squares(PieceKind::Bishop, Square::new(0, 0));
        assert_eq!(attacks.len(), 7);
        assert!(attacks.contains(&Square::new(7, 7)));
        assert!(!attacks.contains(&Square::new(1, 0)));
    }

    #[test]
    fn test_queen_corner_attacks_21() {
        let attacks = attack_squares(PieceKind::Queen, Square::new(0, 0));
        assert_eq!(attacks.len(), 21);
    }

    #[test]
    fn test_king_corner_attacks_3() {
        let attacks = attack_squares(PieceKind::King, Square::new(0, 0));
        assert_eq!(attacks.len(), 3);
        assert!(attacks.contains(&Square::new(1, 0)));
        assert!(attacks.contains(&Square::new(0, 1)));
        assert!(attacks.contains(&Square::new(1, 1)));
    }

    #[test]
    fn test_king_center_attacks_8() {
        let attacks = attack_squares(PieceKind::King, Square::new(3, 3));
        assert_eq!(attacks.len(), 8);
    }

    #[test]
    fn test_rook_attacks_share_row_or_col() {
        let from = Square::new(2, 5);
        for attack in attack_squares(PieceKind::Rook, from) {
            assert!(attack.col == from.col || attack.row == from.row);
            assert_ne!(attack, from);
        }
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let from = Square::new(3, 4);
        let mut combined = attack_squares(PieceKind::Rook, from);
        combined.extend(attack_squares(PieceKind::Bishop, from));
        let queen = attack_squares(PieceKind::Queen, from);
        assert_eq!(queen.len(), combined.len());
        for square in &combined {
            assert!(queen.contains(square));
        }
    }

    #[test]
    fn test_attack_set_never_empty_anywhere() {
        for kind in PieceKind::ALL {
            for from in Square::all() {
                assert!(!attack_squares(kind, from).is_empty());
            }
        }
    }

    #[test]
    fn test_attacks_stay_on_board_and_distinct() {
        for kind in PieceKind::ALL {
            let attacks = attack_squares(kind, Square::new(6, 1));
            for (i, a) in attacks.iter().enumerate() {
                assert!(a.col < 8 && a.row < 8);
                for b in &attacks[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }
}
