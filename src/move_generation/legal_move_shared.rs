use crate::game_state::chess_types::*;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Pieces of `color` standing on `square`, if any.
#[inline]
pub fn piece_of_color(position: &Position, square: Square, color: Color) -> Option<Piece> {
    position.at(square).filter(|piece| piece.color == color)
}

#[inline]
pub fn is_friendly(position: &Position, square: Square, color: Color) -> bool {
    piece_of_color(position, square, color).is_some()
}

#[inline]
pub fn is_enemy(position: &Position, square: Square, color: Color) -> bool {
    piece_of_color(position, square, color.opposite()).is_some()
}

/// Fixed-offset destinations (knight, king) that are not friendly-occupied.
pub fn push_step_destinations(
    position: &Position,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(file_delta, rank_delta) in offsets {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            if !is_friendly(position, to, color) {
                out.push(to);
            }
        }
    }
}

/// Walks each direction until blocked; an enemy stop square is included, a
/// friendly one is not.
pub fn push_ray_destinations(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(file_delta, rank_delta) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(file_delta, rank_delta) {
            match position.at(to) {
                None => out.push(to),
                Some(piece) => {
                    if piece.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

/// Whether `mv` takes something: an occupied destination, or a pawn
/// stepping diagonally onto the en-passant target.
pub fn is_capture(position: &Position, mv: Move) -> bool {
    if position.at(mv.to).is_some() {
        return true;
    }
    let is_pawn = position
        .at(mv.from)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn);
    is_pawn && mv.from.file() != mv.to.file() && position.en_passant_target() == Some(mv.to)
}

/// The castle a king move performs, if it moves two or more files.
pub fn castle_side_of(position: &Position, mv: Move) -> Option<CastleSide> {
    let piece = position.at(mv.from)?;
    if piece.kind != PieceKind::King || mv.from.file().abs_diff(mv.to.file()) < 2 {
        return None;
    }
    if mv.to.file() > mv.from.file() {
        Some(CastleSide::KingSide)
    } else {
        Some(CastleSide::QueenSide)
    }
}
