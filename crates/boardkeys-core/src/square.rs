//! Board coordinates.
//!
//! A [`Square`] is a `(file, rank)` pair on the standard 8x8 board. Squares are
//! never stored by the host widget under their algebraic name; instead each
//! square element carries a structural class `square-<file index><rank>` where
//! the file index runs 1-8. [`Square::lookup_key`] produces that suffix.

use std::{fmt, str::FromStr};

use crate::error::SquareError;

/// Board file `a` through `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct File(u8);

impl File {
    /// All eight files in board order.
    pub const ALL: [File; 8] = [File(0), File(1), File(2), File(3), File(4), File(5), File(6), File(7)];

    /// File from a zero-based index. `None` if the index is off the board.
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 8).then_some(Self(index))
    }

    /// Zero-based index (`a` = 0).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Lower-case algebraic letter.
    pub fn as_char(self) -> char {
        char::from(b'a' + self.0)
    }
}

impl TryFrom<char> for File {
    type Error = SquareError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='h' => Ok(Self(c as u8 - b'a')),
            _ => Err(SquareError::InvalidFile(c)),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Board rank `1` through `8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    /// All eight ranks from `1` upwards.
    pub const ALL: [Rank; 8] = [Rank(0), Rank(1), Rank(2), Rank(3), Rank(4), Rank(5), Rank(6), Rank(7)];

    /// Rank from a zero-based index. `None` if the index is off the board.
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 8).then_some(Self(index))
    }

    /// Zero-based index (rank `1` = 0).
    pub fn index(self) -> u8 {
        self.0
    }

    /// One-based rank number as shown on the board.
    pub fn number(self) -> u8 {
        self.0 + 1
    }

    /// Rank digit.
    pub fn as_char(self) -> char {
        char::from(b'1' + self.0)
    }
}

impl TryFrom<char> for Rank {
    type Error = SquareError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1'..='8' => Ok(Self(c as u8 - b'1')),
            _ => Err(SquareError::InvalidRank(c)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the 64 board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    /// Column.
    pub file: File,
    /// Row.
    pub rank: Rank,
}

impl Square {
    /// Square at the given file and rank.
    pub fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    /// Structural lookup key used by the board widget, without the class
    /// prefix: one-based file index followed by the rank (`e2` -> `52`).
    pub fn lookup_key(self) -> String {
        format!("{}{}", self.file.index() + 1, self.rank.number())
    }

    /// Iterate all 64 squares, file-major.
    pub fn all() -> impl Iterator<Item = Square> {
        File::ALL.into_iter().flat_map(|file| Rank::ALL.into_iter().map(move |rank| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Ok(Self::new(File::try_from(file)?, Rank::try_from(rank)?)),
            _ => Err(SquareError::Malformed(s.to_owned())),
        }
    }
}

/// An ordered pair of squares: the piece on `from` goes to `to`.
///
/// No legality is implied; the board widget decides what the gesture means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Source square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
}

impl Move {
    /// Move between two squares.
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_key_uses_one_based_file_index() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(e2.lookup_key(), "52");

        let a1: Square = "a1".parse().unwrap();
        assert_eq!(a1.lookup_key(), "11");

        let h8: Square = "h8".parse().unwrap();
        assert_eq!(h8.lookup_key(), "88");
    }

    #[test]
    fn parse_rejects_off_board() {
        assert_eq!("e9".parse::<Square>(), Err(SquareError::InvalidRank('9')));
        assert_eq!("i1".parse::<Square>(), Err(SquareError::InvalidFile('i')));
        assert!(matches!("e".parse::<Square>(), Err(SquareError::Malformed(_))));
        assert!(matches!("e22".parse::<Square>(), Err(SquareError::Malformed(_))));
    }

    #[test]
    fn all_squares_are_distinct() {
        let squares: std::collections::HashSet<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
    }

    #[test]
    fn move_display() {
        let mv = Move::new("e2".parse().unwrap(), "e4".parse().unwrap());
        assert_eq!(mv.to_string(), "e2 → e4");
    }
}
