//! A colored chess piece: an explicit kind and color pair.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece.
///
/// Kind and color are separate fields, so recovering either is a direct
/// read. An empty square is `Option::<Piece>::None`, not a sentinel variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

/// Sprite sheet names, indexed by color then kind.
const SPRITE_NAMES: [[&str; PieceKind::COUNT]; Color::COUNT] = [
    [
        "PawnWHT", "RookWHT", "KnightWHT", "BishopWHT", "QueenWHT", "KingWHT",
    ],
    [
        "PawnBLK", "RookBLK", "KnightBLK", "BishopBLK", "QueenBLK", "KingBLK",
    ],
];

impl Piece {
    /// All 12 valid pieces.
    pub const COUNT: usize = 12;

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All 12 pieces: White pieces first, then Black.
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_ROOK,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_ROOK,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return `true` if this piece is a pawn of either color.
    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    /// Return `true` if this piece is a rook of either color.
    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self.kind, PieceKind::Rook)
    }

    /// Return `true` if this piece is a knight of either color.
    #[inline]
    pub const fn is_knight(self) -> bool {
        matches!(self.kind, PieceKind::Knight)
    }

    /// Return `true` if this piece is a bishop of either color.
    #[inline]
    pub const fn is_bishop(self) -> bool {
        matches!(self.kind, PieceKind::Bishop)
    }

    /// Return `true` if this piece is a queen of either color.
    #[inline]
    pub const fn is_queen(self) -> bool {
        matches!(self.kind, PieceKind::Queen)
    }

    /// Return `true` if this piece is a king of either color.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Parse a piece letter into a piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce
    /// Black pieces. Returns `None` for anything else.
    #[inline]
    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return the piece letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn letter(self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Return the sprite sheet name for this piece (e.g. "PawnWHT").
    #[inline]
    pub const fn sprite_name(self) -> &'static str {
        SPRITE_NAMES[self.color.index()][self.kind.index()]
    }
}

/// Sprite sheet name for an optionally occupied square; "none" when empty.
pub fn sprite_name_or_none(piece: Option<Piece>) -> &'static str {
    match piece {
        Some(piece) => piece.sprite_name(),
        None => "none",
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind.letter().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, sprite_name_or_none};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_is_direct_field_read() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind, "kind mismatch for {color} {kind}");
                assert_eq!(piece.color(), color, "color mismatch for {color} {kind}");
            }
        }
    }

    #[test]
    fn kind_predicates_ignore_color() {
        assert!(Piece::WHITE_PAWN.is_pawn());
        assert!(Piece::BLACK_PAWN.is_pawn());
        assert!(Piece::WHITE_ROOK.is_rook());
        assert!(Piece::BLACK_ROOK.is_rook());
        assert!(Piece::WHITE_KNIGHT.is_knight());
        assert!(Piece::BLACK_KNIGHT.is_knight());
        assert!(Piece::WHITE_BISHOP.is_bishop());
        assert!(Piece::BLACK_BISHOP.is_bishop());
        assert!(Piece::WHITE_QUEEN.is_queen());
        assert!(Piece::BLACK_QUEEN.is_queen());
        assert!(Piece::WHITE_KING.is_king());
        assert!(Piece::BLACK_KING.is_king());
    }

    #[test]
    fn kind_predicates_reject_other_kinds() {
        assert!(!Piece::WHITE_PAWN.is_rook());
        assert!(!Piece::WHITE_ROOK.is_pawn());
        assert!(!Piece::BLACK_QUEEN.is_king());
        assert!(!Piece::BLACK_KING.is_queen());
        assert!(!Piece::WHITE_KNIGHT.is_bishop());
        assert!(!Piece::BLACK_BISHOP.is_knight());
    }

    #[test]
    fn letter_roundtrip() {
        for piece in Piece::ALL {
            let c = piece.letter();
            assert_eq!(
                Piece::from_letter(c),
                Some(piece),
                "roundtrip failed for {piece:?} (char '{c}')"
            );
        }
    }

    #[test]
    fn from_letter_case_sensitivity() {
        assert_eq!(Piece::from_letter('P'), Some(Piece::WHITE_PAWN));
        assert_eq!(Piece::from_letter('R'), Some(Piece::WHITE_ROOK));
        assert_eq!(Piece::from_letter('N'), Some(Piece::WHITE_KNIGHT));
        assert_eq!(Piece::from_letter('p'), Some(Piece::BLACK_PAWN));
        assert_eq!(Piece::from_letter('q'), Some(Piece::BLACK_QUEEN));
        assert_eq!(Piece::from_letter('k'), Some(Piece::BLACK_KING));

        assert_eq!(Piece::from_letter('x'), None);
        assert_eq!(Piece::from_letter('3'), None);
        assert_eq!(Piece::from_letter(' '), None);
    }

    #[test]
    fn sprite_names_match_asset_naming() {
        assert_eq!(Piece::WHITE_PAWN.sprite_name(), "PawnWHT");
        assert_eq!(Piece::WHITE_ROOK.sprite_name(), "RookWHT");
        assert_eq!(Piece::WHITE_KNIGHT.sprite_name(), "KnightWHT");
        assert_eq!(Piece::WHITE_BISHOP.sprite_name(), "BishopWHT");
        assert_eq!(Piece::WHITE_QUEEN.sprite_name(), "QueenWHT");
        assert_eq!(Piece::WHITE_KING.sprite_name(), "KingWHT");
        assert_eq!(Piece::BLACK_PAWN.sprite_name(), "PawnBLK");
        assert_eq!(Piece::BLACK_ROOK.sprite_name(), "RookBLK");
        assert_eq!(Piece::BLACK_KNIGHT.sprite_name(), "KnightBLK");
        assert_eq!(Piece::BLACK_BISHOP.sprite_name(), "BishopBLK");
        assert_eq!(Piece::BLACK_QUEEN.sprite_name(), "QueenBLK");
        assert_eq!(Piece::BLACK_KING.sprite_name(), "KingBLK");
    }

    #[test]
    fn sprite_names_unique() {
        let mut seen = std::collections::HashSet::new();
        for piece in Piece::ALL {
            assert!(
                seen.insert(piece.sprite_name()),
                "duplicate sprite name {}",
                piece.sprite_name()
            );
        }
    }

    #[test]
    fn sprite_name_for_empty_square() {
        assert_eq!(sprite_name_or_none(None), "none");
        assert_eq!(sprite_name_or_none(Some(Piece::BLACK_BISHOP)), "BishopBLK");
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", Piece::WHITE_PAWN), "P");
        assert_eq!(format!("{}", Piece::WHITE_KING), "K");
        assert_eq!(format!("{}", Piece::BLACK_PAWN), "p");
        assert_eq!(format!("{}", Piece::BLACK_KNIGHT), "n");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Piece::WHITE_PAWN), "WP");
        assert_eq!(format!("{:?}", Piece::WHITE_KNIGHT), "WN");
        assert_eq!(format!("{:?}", Piece::BLACK_ROOK), "BR");
        assert_eq!(format!("{:?}", Piece::BLACK_KING), "BK");
    }

    #[test]
    fn count_and_all() {
        assert_eq!(Piece::COUNT, 12);
        assert_eq!(Piece::ALL.len(), Piece::COUNT);
    }
}
