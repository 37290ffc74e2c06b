//! Terminal detection and scoring
//!
//! The game ends when neither side can move; the winner is decided by
//! piece count.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};

use super::moves::has_any_move;

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Winner {
    Black,
    White,
    Draw,
}

impl Winner {
    /// The winning player, `None` for a draw
    pub fn player(self) -> Option<Player> {
        match self {
            Winner::Black => Some(Player::Black),
            Winner::White => Some(Player::White),
            Winner::Draw => None,
        }
    }
}

impl From<Winner> for i8 {
    fn from(winner: Winner) -> i8 {
        match winner {
            Winner::Black => 1,
            Winner::White => -1,
            Winner::Draw => 0,
        }
    }
}

impl TryFrom<i8> for Winner {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Winner::Black),
            -1 => Ok(Winner::White),
            0 => Ok(Winner::Draw),
            other => Err(format!("invalid winner encoding {other}")),
        }
    }
}

/// True iff neither Black nor White has a legal move
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    !has_any_move(board, Player::Black) && !has_any_move(board, Player::White)
}

/// Piece tally as (black, white)
#[inline]
#[must_use]
pub fn score(board: &Board) -> (u32, u32) {
    (board.count(Player::Black), board.count(Player::White))
}

/// Winner by piece count. Meaningful only once the game is over.
#[must_use]
pub fn winner(board: &Board) -> Winner {
    let (black, white) = score(board);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Winner::Black,
        std::cmp::Ordering::Less => Winner::White,
        std::cmp::Ordering::Equal => Winner::Draw,
    }
}
