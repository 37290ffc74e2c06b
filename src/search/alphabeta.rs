//! Alpha-Beta search with iterative deepening and transposition table
//!
//! This module implements the core search algorithm for the Othello AI.
//! It uses negamax with fail-soft alpha-beta pruning and a transposition
//! table for efficiency.
//!
//! # Features
//!
//! - Iterative deepening under a wall-clock budget; an iteration cut short
//!   by the deadline is discarded
//! - Transposition table for avoiding redundant searches
//! - Move ordering: TT move, corners, static evaluation
//! - Early stop once the whole game tree has been searched
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Player};
//! use othello::config::EngineConfig;
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new(EngineConfig::default());
//! let board = Board::new();
//!
//! let result = searcher.search_depth(&board, Player::Black, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::eval::{evaluate_with, TERMINAL_SCALE};
use crate::rules::{
    has_any_move, is_terminal, legal_move_mask, legal_moves, make_move, undo_move,
};

use super::minimax::minimax;
use super::ordering::order_moves;
use super::{EntryType, TTStats, TranspositionTable, ZobristTable};

/// Infinity score for alpha-beta bounds
const INF: i32 = 100 * TERMINAL_SCALE;

/// Deepest iteration ever attempted. Passes do not consume depth, so
/// 60 covers every remaining placement from the opening.
pub const MAX_SEARCH_DEPTH: i8 = 60;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total beta cutoffs (fail-high)
    pub beta_cutoffs: u64,
    /// Beta cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_score_hits: u64,
    /// TT probes that provided a best move for ordering
    pub tt_move_hits: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }

    /// TT score hit rate in percent
    pub fn tt_score_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_score_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move must pass
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching side
    pub score: i32,
    /// Depth of the last completed iteration
    pub depth: i8,
    /// Total nodes searched
    pub nodes: u64,
    /// Wall-clock time spent
    pub elapsed: Duration,
    /// False if the deadline cut deepening short (or forced the fallback)
    pub completed: bool,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-Beta search engine with iterative deepening and transposition table.
///
/// The searcher keeps its transposition table across searches. For a new
/// game, call [`clear_tt`](Self::clear_tt).
pub struct Searcher {
    config: EngineConfig,
    zobrist: &'static ZobristTable,
    tt: TranspositionTable,
    nodes: u64,
    start_time: Option<Instant>,
    time_limit: Option<Duration>,
    stopped: bool,
    /// Set when some non-terminal leaf was cut off by the depth horizon
    hit_horizon: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Create a new searcher from an engine configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let tt = TranspositionTable::new(config.tt_entries);
        Self {
            config,
            zobrist: ZobristTable::global(),
            tt,
            nodes: 0,
            start_time: None,
            time_limit: None,
            stopped: false,
            hit_horizon: false,
            stats: SearchStats::default(),
        }
    }

    /// Search under the configured time budget and depth cap.
    #[must_use]
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        let limit = Duration::from_millis(self.config.time_budget_ms);
        let max_depth = self.config.max_depth;
        self.run(board, player, max_depth, Some(limit))
    }

    /// Search to a fixed depth with no deadline.
    ///
    /// Deterministic: the same position and depth always give the same
    /// score and move, with or without the transposition table.
    #[must_use]
    pub fn search_depth(&mut self, board: &Board, player: Player, depth: i8) -> SearchResult {
        self.run(board, player, depth, None)
    }

    /// Get statistics about the transposition table.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Clear the transposition table.
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    #[inline]
    fn use_tt(&self) -> bool {
        self.config.use_transposition_table
    }

    /// Check time and set the stop flag if exceeded.
    #[inline]
    fn check_time(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if let (Some(start), Some(limit)) = (self.start_time, self.time_limit) {
            if start.elapsed() >= limit {
                self.stopped = true;
                return true;
            }
        }
        false
    }

    /// Iterative deepening driver shared by the timed and fixed-depth entry points.
    fn run(
        &mut self,
        board: &Board,
        player: Player,
        max_depth: i8,
        time_limit: Option<Duration>,
    ) -> SearchResult {
        let start = Instant::now();
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.stopped = false;
        self.start_time = Some(start);
        self.time_limit = time_limit;
        if self.use_tt() {
            self.tt.new_search();
        }

        let max_depth = max_depth.clamp(1, MAX_SEARCH_DEPTH);
        let root_moves = legal_moves(board, player);

        if root_moves.is_empty() {
            debug!(%player, "no legal move, passing");
            return SearchResult {
                best_move: None,
                score: evaluate_with(board, player, &self.config.weights),
                depth: 0,
                nodes: 0,
                elapsed: start.elapsed(),
                completed: true,
                stats: SearchStats::default(),
            };
        }

        let mut work_board = *board;
        let root_hash = self.zobrist.hash(board, player);
        let mut best: Option<(i32, Pos, i8)> = None;

        for depth in 1..=max_depth {
            if self.check_time() {
                break;
            }

            self.hit_horizon = false;
            let Some((score, mov)) =
                self.search_root(&mut work_board, player, depth, root_hash, &root_moves)
            else {
                debug!(depth, nodes = self.nodes, "deadline reached, discarding iteration");
                break;
            };
            debug_assert_eq!(work_board, *board);

            best = Some((score, mov, depth));
            debug!(
                depth,
                score,
                best_move = %mov,
                nodes = self.nodes,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "iteration complete"
            );

            if !self.hit_horizon {
                trace!(depth, "game tree exhausted");
                break;
            }
        }

        let completed = !self.stopped;
        let (score, best_move, depth) = match best {
            Some((score, mov, depth)) => (score, Some(mov), depth),
            None => {
                // Deadline hit before depth 1 finished
                let (score, mov) = minimax(board, player, 1, &self.config.weights);
                info!(%player, "search deadline hit before depth 1, using depth-1 fallback");
                (score, mov, 1)
            }
        };

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            elapsed: start.elapsed(),
            completed,
            stats: self.stats.clone(),
        }
    }

    /// Root-level search over every legal move.
    ///
    /// Each move after the first is searched with a window one point below
    /// the current best, so a move that ties is scored exactly and the tie
    /// goes to the move earliest in row-major order. Returns `None` if the
    /// deadline interrupted the iteration.
    fn search_root(
        &mut self,
        board: &mut Board,
        player: Player,
        depth: i8,
        hash: u64,
        root_moves: &[Pos],
    ) -> Option<(i32, Pos)> {
        let mut moves = root_moves.to_vec();
        let tt_move = if self.use_tt() { self.tt.best_move(hash) } else { None };
        order_moves(board, player, &mut moves, tt_move, &self.config.weights);

        let mut best: Option<(i32, Pos)> = None;

        for mov in moves {
            let Some(record) = make_move(board, player, mov) else {
                continue;
            };
            let child_hash = self.zobrist.update_move(hash, &record);

            let alpha = best.map_or(-INF, |(score, _)| score - 1);
            let score =
                -self.alpha_beta(board, player.opponent(), depth - 1, -INF, -alpha, child_hash);

            undo_move(board, &record);

            if self.stopped {
                return None;
            }

            let better = match best {
                None => true,
                Some((best_score, best_mov)) => {
                    score > best_score || (score == best_score && mov < best_mov)
                }
            };
            if better {
                best = Some((score, mov));
            }
        }

        if let Some((score, mov)) = best {
            if self.use_tt() {
                self.tt.store(hash, depth, score, EntryType::Exact, Some(mov));
            }
        }
        best
    }

    /// Negamax with alpha-beta pruning. Scores are from `player`'s side.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        player: Player,
        depth: i8,
        mut alpha: i32,
        mut beta: i32,
        hash: u64,
    ) -> i32 {
        self.nodes += 1;

        // Time check every 256 nodes
        if self.nodes & 255 == 0 && self.check_time() {
            return 0;
        }
        if self.stopped {
            return 0;
        }

        if depth <= 0 {
            if !self.hit_horizon && !is_terminal(board) {
                self.hit_horizon = true;
            }
            return evaluate_with(board, player, &self.config.weights);
        }

        let move_mask = legal_move_mask(board, player);
        if move_mask.is_empty() {
            if !has_any_move(board, player.opponent()) {
                return evaluate_with(board, player, &self.config.weights);
            }
            // Pass: the opponent moves with the same depth budget
            let pass_hash = self.zobrist.toggle_side(hash);
            return -self.alpha_beta(board, player.opponent(), depth, -beta, -alpha, pass_hash);
        }

        // TT probe
        let mut tt_move = None;
        if self.use_tt() {
            self.stats.tt_probes += 1;
            if let Some(score) = self.tt.probe(hash, depth, alpha, beta) {
                self.stats.tt_score_hits += 1;
                return score;
            }
            if let Some(entry) = self.tt.lookup(hash) {
                if entry.generation == self.tt.generation() && entry.depth >= depth {
                    // A bound that cannot cut still narrows the window
                    match entry.entry_type {
                        EntryType::LowerBound => alpha = alpha.max(entry.score),
                        EntryType::UpperBound => beta = beta.min(entry.score),
                        EntryType::Exact => {}
                    }
                }
                tt_move = entry.best_move;
            }
            if tt_move.is_some() {
                self.stats.tt_move_hits += 1;
            }
        }

        let original_alpha = alpha;
        let mut moves: Vec<Pos> = move_mask.iter_ones().collect();
        if depth > 1 {
            order_moves(board, player, &mut moves, tt_move, &self.config.weights);
        } else if let Some(i) = moves.iter().position(|&m| Some(m) == tt_move) {
            // Children are leaves: scoring them to sort costs as much as searching them
            moves[..=i].rotate_right(1);
        }

        let mut best_score = -INF;
        let mut best_move = None;

        for (i, &mov) in moves.iter().enumerate() {
            let Some(record) = make_move(board, player, mov) else {
                continue;
            };
            let child_hash = self.zobrist.update_move(hash, &record);

            let score =
                -self.alpha_beta(board, player.opponent(), depth - 1, -beta, -alpha, child_hash);

            undo_move(board, &record);

            if self.stopped {
                return 0;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }

            if score > alpha {
                alpha = score;
            }

            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        let entry_type = if best_score <= original_alpha {
            EntryType::UpperBound
        } else if best_score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };

        if self.use_tt() {
            self.tt.store(hash, depth, best_score, entry_type, best_move);
        }

        best_score
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
