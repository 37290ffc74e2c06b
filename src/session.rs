//! Game session management
//!
//! A [`GameSession`] owns the authoritative board and turn, validates human
//! moves, applies passes, and runs the searcher whenever the AI side is to
//! move. Callers must serialize access to a single session.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::error::{OthelloError, Result};
use crate::rules::{
    apply_move, has_any_move, is_terminal, legal_moves, make_move, winner, MoveRecord, Winner,
};
use crate::search::{SearchResult, Searcher};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Human vs AI, the AI plays `ai`
    VsAi { ai: Player },
    /// Two humans on one board; the searcher is never invoked
    TwoPlayer,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsAi { ai: Player::White }
    }
}

/// One entry of the move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// A piece was placed
    Placed { player: Player, pos: Pos, flipped: u32 },
    /// The player had no legal move
    Passed(Player),
}

/// Read-only snapshot of a game, shaped like the status JSON:
/// board as a grid of 1 / -1 / 0, players and winner in the same
/// encoding, moves as `[row, col]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub game_over: bool,
    /// Set only once the game is over
    pub winner: Option<Winner>,
    /// Legal moves for `current_player`, row-major
    pub valid_moves: Vec<Pos>,
    pub black_pieces: u32,
    pub white_pieces: u32,
    /// Placements so far (passes excluded)
    pub move_count: u32,
}

/// Authoritative game state plus the AI that plays in it
pub struct GameSession {
    board: Board,
    current_player: Player,
    mode: GameMode,
    game_over: bool,
    history: Vec<Turn>,
    searcher: Searcher,
    last_search: Option<SearchResult>,
}

impl GameSession {
    /// Start a game from the opening position.
    ///
    /// If the AI plays Black it moves before this returns.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `config` fails validation.
    pub fn new(config: EngineConfig, mode: GameMode) -> Result<Self> {
        Self::from_position(config, mode, Board::new(), Player::Black)
    }

    /// Start a game from an arbitrary position with `to_move` on turn.
    ///
    /// Passes, game end and AI turns are resolved immediately.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `config` fails validation, `InvalidPosition` if the
    /// board has a cell owned by both players.
    pub fn from_position(
        config: EngineConfig,
        mode: GameMode,
        board: Board,
        to_move: Player,
    ) -> Result<Self> {
        config.validate()?;
        if !board.is_consistent() {
            return Err(OthelloError::InvalidPosition(
                "board has overlapping black and white pieces".to_string(),
            ));
        }

        let mut session = Self {
            board,
            current_player: to_move,
            mode,
            game_over: false,
            history: Vec::new(),
            searcher: Searcher::new(config),
            last_search: None,
        };
        session.advance();
        Ok(session)
    }

    /// Reset to the opening position in the current mode.
    pub fn new_game(&mut self) -> GameState {
        self.new_game_with_mode(self.mode)
    }

    /// Reset to the opening position in `mode`.
    pub fn new_game_with_mode(&mut self, mode: GameMode) -> GameState {
        self.board = Board::new();
        self.current_player = Player::Black;
        self.mode = mode;
        self.game_over = false;
        self.history.clear();
        self.last_search = None;
        self.searcher.clear_tt();
        info!(?mode, "new game");

        self.advance();
        self.current_state()
    }

    /// Validate and play a human move, then run passes and AI replies until
    /// a human is to move or the game ends.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game has ended
    /// - `NotHumanTurn` if the AI side is to move
    /// - `InvalidCoordinate` if row/col fall outside 0-7
    /// - `IllegalMove` if the placement captures nothing
    ///
    /// The session is unchanged on error.
    pub fn submit_move(&mut self, row: i32, col: i32) -> Result<GameState> {
        if self.game_over {
            return Err(OthelloError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(OthelloError::NotHumanTurn);
        }

        let pos = Pos::try_new(row, col)?;
        let record = apply_move(&mut self.board, self.current_player, pos)?;
        self.record_placement(&record);

        self.advance();
        Ok(self.current_state())
    }

    /// Snapshot of the current game
    #[must_use]
    pub fn current_state(&self) -> GameState {
        let (black_pieces, white_pieces) = (
            self.board.count(Player::Black),
            self.board.count(Player::White),
        );
        GameState {
            board: self.board,
            current_player: self.current_player,
            game_over: self.game_over,
            winner: self.game_over.then(|| winner(&self.board)),
            valid_moves: legal_moves(&self.board, self.current_player),
            black_pieces,
            white_pieces,
            move_count: self.move_count(),
        }
    }

    /// Check if a human is to move
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::TwoPlayer => true,
            GameMode::VsAi { ai } => self.current_player != ai,
        }
    }

    /// Ordered list of placements and passes
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Placements so far
    pub fn move_count(&self) -> u32 {
        self.history
            .iter()
            .filter(|t| matches!(t, Turn::Placed { .. }))
            .count() as u32
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Result of the most recent AI search, if any
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    fn record_placement(&mut self, record: &MoveRecord) {
        info!(
            player = %record.player,
            pos = %record.pos,
            flipped = record.flip_count(),
            "move played"
        );
        self.history.push(Turn::Placed {
            player: record.player,
            pos: record.pos,
            flipped: record.flip_count(),
        });
        self.current_player = record.player.opponent();
    }

    /// Resolve passes, AI moves and game end until a human must act.
    fn advance(&mut self) {
        loop {
            assert!(
                self.board.is_consistent(),
                "board invariant broken: {:?}",
                self.board
            );

            if is_terminal(&self.board) {
                self.game_over = true;
                let (black, white) = (
                    self.board.count(Player::Black),
                    self.board.count(Player::White),
                );
                info!(winner = ?winner(&self.board), black, white, "game over");
                return;
            }

            let player = self.current_player;
            if !has_any_move(&self.board, player) {
                info!(%player, "no legal move, passing");
                self.history.push(Turn::Passed(player));
                self.current_player = player.opponent();
                continue;
            }

            if self.is_human_turn() {
                return;
            }

            let result = self.searcher.search(&self.board, player);
            debug!(
                depth = result.depth,
                score = result.score,
                nodes = result.nodes,
                completed = result.completed,
                "ai search finished"
            );

            let record = result
                .best_move
                .and_then(|pos| make_move(&mut self.board, player, pos));
            let Some(record) = record else {
                panic!("searcher returned no legal move for {player} on\n{}", self.board);
            };
            self.last_search = Some(result);
            self.record_placement(&record);
        }
    }
}
