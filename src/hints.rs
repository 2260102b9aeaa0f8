//! Hint geometry: the directional indicators shown after a wrong answer.
//!
//! Pure computation, no rendering. Scenes decide how to paint the returned
//! squares; the indicators are recomputed from current state on every draw.

use crate::board::Square;
use crate::movement::PieceKind;

/// One directional indicator for the capture trainer: the squares from the
/// piece (exclusive) to the board edge along a single movement direction.
/// Lines always run to the edge, not merely to the nearest pawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintRay {
    /// Direction as `(dc, dr)` in display coordinates.
    pub direction: (i8, i8),
    /// Squares along the ray, nearest first. Never empty.
    pub squares: Vec<Square>,
}

/// Compute one ray per movement direction of `kind` from `from`. Directions
/// that immediately leave the board (piece on an edge) are omitted. King rays
/// are a single square.
pub fn movement_rays(kind: PieceKind, from: Square) -> Vec<HintRay> {
    let mut rays = Vec::new();
    for &(dc, dr) in kind.directions() {
        let mut squares = Vec::new();
        let mut current = from;
        while let Some(next) = current.offset(dc, dr) {
            squares.push(next);
            if !kind.is_sliding() {
                break;
            }
            current = next;
        }
        if !squares.is_empty() {
            rays.push(HintRay {
                direction: (dc, dr),
                squares,
            });
        }
    }
    rays
}

/// Pointers from a target square to the labels that spell its name: the path
/// down to the file label and the path left to the rank label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPointers {
    /// Column of the file label being pointed at.
    pub file_col: u8,
    /// Row of the rank label being pointed at.
    pub rank_row: u8,
    /// Squares strictly below the target, top to bottom. Empty on rank 1.
    pub toward_file_label: Vec<Square>,
    /// Squares strictly left of the target, rightmost first. Empty on the a-file.
    pub toward_rank_label: Vec<Square>,
}

/// Compute the label pointers for the naming trainer's hint.
pub fn label_pointers(target: Square) -> LabelPointers {
    let toward_file_label = (target.row + 1..8)
        .map(|row| Square::new(target.col, row))
        .collect();
    let toward_rank_label = (0..target.col)
        .rev()
        .map(|col| Square::new(col, target.row))
        .collect();
    LabelPointers {
        file_col: target.col,
        rank_row: target.row,
        toward_file_label,
        toward_rank_label,
    }
}
