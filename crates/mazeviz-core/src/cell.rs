//! The [`CellKind`] type — what occupies a single grid position.

use std::fmt;

/// Classification of a grid position.
///
/// `Wall` is the only impassable kind. `Start` and `End` are passable
/// terminal markers. `Path`, `Explored` and `Current` are display
/// annotations painted by callers from step events; searches never write
/// them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Empty = 0,
    Wall = 1,
    Start = 2,
    End = 3,
    Path = 4,
    Explored = 5,
    Current = 6,
}

impl CellKind {
    /// Every kind, in code order.
    pub const ALL: [CellKind; 7] = [
        Self::Empty,
        Self::Wall,
        Self::Start,
        Self::End,
        Self::Path,
        Self::Explored,
        Self::Current,
    ];

    /// Integer code used by the reference maze literal (0=Empty, 1=Wall, ...).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its integer code.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Wall),
            2 => Some(Self::Start),
            3 => Some(Self::End),
            4 => Some(Self::Path),
            5 => Some(Self::Explored),
            6 => Some(Self::Current),
            _ => None,
        }
    }

    /// Single-character form used by the text representation of a grid.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Path => '*',
            Self::Explored => 'o',
            Self::Current => '@',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            '*' => Some(Self::Path),
            'o' => Some(Self::Explored),
            '@' => Some(Self::Current),
            _ => None,
        }
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Whether this is a display-only annotation.
    #[inline]
    pub const fn is_annotation(self) -> bool {
        matches!(self, Self::Path | Self::Explored | Self::Current)
    }
}

impl TryFrom<u8> for CellKind {
    type Error = u8;

    /// Fails with the offending code.
    fn try_from(code: u8) -> Result<Self, u8> {
        Self::from_code(code).ok_or(code)
    }
}

impl From<CellKind> for u8 {
    fn from(kind: CellKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Wall => "wall",
            Self::Start => "start",
            Self::End => "end",
            Self::Path => "path",
            Self::Explored => "explored",
            Self::Current => "current",
        };
        f.write_str(name)
    }
}
