//! Board structure: two disjoint bitboards, one per color

use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, BOARD_SIZE};

/// Cell grid in the snapshot encoding (1 = Black, -1 = White, 0 = empty)
pub type Grid = [[i8; BOARD_SIZE]; BOARD_SIZE];

/// Othello board.
///
/// Pure storage: legality and flipping live in [`crate::rules`].
/// `Clone` yields a fully independent copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Grid", try_from = "Grid")]
pub struct Board {
    /// Black pieces bitboard
    pub black: Bitboard,
    /// White pieces bitboard
    pub white: Bitboard,
}

impl Board {
    /// Standard starting position: White on (3,3) and (4,4), Black on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Pos::new(3, 3), Cell::White);
        board.set(Pos::new(3, 4), Cell::Black);
        board.set(Pos::new(4, 3), Cell::Black);
        board.set(Pos::new(4, 4), Cell::White);
        board
    }

    /// Board with no pieces (useful for constructing test positions)
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Build a board from the snapshot grid encoding.
    pub fn from_grid(grid: &Grid) -> Result<Self, String> {
        let mut board = Self::empty();
        for (r, row) in grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let cell = Cell::from_i8(value)
                    .ok_or_else(|| format!("invalid cell value {value} at ({r}, {c})"))?;
                board.set(Pos::new(r as u8, c as u8), cell);
            }
        }
        Ok(board)
    }

    pub fn to_grid(&self) -> Grid {
        let mut grid = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.get(Pos::new(r as u8, c as u8)).to_i8();
            }
        }
        grid
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Overwrite a cell. No rule checking.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.black.clear(pos);
        self.white.clear(pos);
        match cell {
            Cell::Black => self.black.set(pos),
            Cell::White => self.white.set(pos),
            Cell::Empty => {}
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Get bitboard for a player
    #[inline]
    pub fn pieces(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    #[inline]
    pub fn pieces_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// Piece count for a player
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.pieces(player).count()
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    #[inline]
    pub fn empty_cells(&self) -> Bitboard {
        !self.occupied()
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.occupied().count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_cells().is_empty()
    }

    /// Color masks are disjoint. A violation is a logic bug, not a user error.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        (self.black & self.white).is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Grid {
        board.to_grid()
    }
}

impl TryFrom<Grid> for Board {
    type Error = String;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        Board::from_grid(&grid)
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("black", &format_args!("{:#018x}", self.black.bits()))
            .field("white", &format_args!("{:#018x}", self.white.bits()))
            .finish()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {c} ")?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "{r} ")?;
            for c in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Cell::Black => " B ",
                    Cell::White => " W ",
                    Cell::Empty => " . ",
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
