//! Depth-limited minimax search for the computer's moves

use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    board::{Board, Cell, WINDOWS},
    HEIGHT, WIDTH,
};

/// The piece played by the human, the minimizing side of the search
pub const HUMAN: Cell = Cell::PlayerOne;
/// The piece played by the computer, the maximizing side of the search
pub const COMPUTER: Cell = Cell::PlayerTwo;

/// The search depth used when none is configured
pub const DEFAULT_DEPTH: usize = 4;

/// Score of a position the computer has won
pub const WIN_SCORE: i64 = 100_000_000_000_000;
/// Score of a position the human has won
// NOTE: an order of magnitude smaller than WIN_SCORE, possibly by accident
pub const LOSS_SCORE: i64 = -10_000_000_000_000;

/// Bonus for each piece in the centre column
const CENTRE_WEIGHT: i64 = 3;

/// Scores a single window from `piece`'s point of view
fn score_window(own: usize, opp: usize, empty: usize) -> i64 {
    if own == 4 {
        100
    } else if own == 3 && empty == 1 {
        5
    } else if own == 2 && empty == 2 {
        2
    } else if opp == 3 && empty == 1 {
        -4
    } else {
        0
    }
}

/// Heuristic score of a non-terminal position from `piece`'s point of view
///
/// Every window in all four directions is scored independently and the
/// scores summed, plus a bonus for each of `piece`'s tiles in the centre column.
pub fn evaluate(board: &Board, piece: Cell) -> i64 {
    let opponent = piece.opponent();

    let centre = (0..HEIGHT)
        .filter(|&row| board.get(row, WIDTH / 2) == piece)
        .count() as i64;
    let mut score = centre * CENTRE_WEIGHT;

    for window in WINDOWS.iter() {
        let cells = board.window(window);
        let own = cells.iter().filter(|&&c| c == piece).count();
        let opp = cells.iter().filter(|&&c| c == opponent).count();
        let empty = cells.iter().filter(|c| c.is_empty()).count();
        score += score_window(own, opp, empty);
    }
    score
}

/// An agent choosing the computer's moves with minimax and alpha-beta pruning
///
/// # Notes
/// The computer maximizes the score and the human minimizes it. Positions are
/// scored by [`evaluate`] once the depth runs out, or by [`WIN_SCORE`],
/// [`LOSS_SCORE`] or 0 when the game is over. Ties between columns go to the
/// lowest column; the random source only picks the fallback column that is
/// returned if no branch improves on the initial bound.
pub struct Searcher<R: Rng = StdRng> {
    rng: R,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher<StdRng> {
    /// Creates a new `Searcher` seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a new `Searcher` with a fixed seed, for reproducible play
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Searcher<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Searcher<R> {
    /// Creates a new `Searcher` drawing its fallback moves from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self { rng, node_count: 0 }
    }

    /// Picks the computer's move, searching `depth` plies ahead
    ///
    /// Returns `None` if the board is full. Otherwise a valid column is always
    /// returned: a depth of 0 is searched as 1, and a position that is already
    /// won gets a random valid column.
    pub fn choose_move(&mut self, board: &Board, depth: usize) -> Option<usize> {
        let valid_columns = board.valid_columns();
        if valid_columns.is_empty() {
            warn!("asked for a move on a full board");
            return None;
        }

        let depth = depth.max(1);
        let start_nodes = self.node_count;
        let (column, score) = self.minimax(board, depth, i64::MIN, i64::MAX, true);
        debug!(
            "search depth {}: column {:?}, score {}, {} nodes",
            depth,
            column,
            score,
            self.node_count - start_nodes
        );

        column.or_else(|| {
            debug!("position is already decided, playing a random column");
            Some(valid_columns[self.rng.random_range(0..valid_columns.len())])
        })
    }

    /// Performs the game tree search
    ///
    /// Returns the best column for the side to move (`None` at leaves) and
    /// the score of the position.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        self.node_count += 1;

        if board.is_terminal() {
            return if board.has_won(COMPUTER) {
                (None, WIN_SCORE)
            } else if board.has_won(HUMAN) {
                (None, LOSS_SCORE)
            } else {
                (None, 0)
            };
        }
        if depth == 0 {
            return (None, evaluate(board, COMPUTER));
        }

        // non-terminal, so there is at least one column
        let valid_columns = board.valid_columns();
        let mut best_column = valid_columns[self.rng.random_range(0..valid_columns.len())];

        let piece = if maximizing { COMPUTER } else { HUMAN };
        let mut value = if maximizing { i64::MIN } else { i64::MAX };

        for &column in valid_columns.iter() {
            let mut next = *board;
            let row = match next.next_open_row(column) {
                Ok(row) => row,
                Err(_) => continue,
            };
            next.place(row, column, piece);

            let (_, score) = self.minimax(&next, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                if score > value {
                    value = score;
                    best_column = column;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_column = column;
                }
                beta = beta.min(value);
            }
            // the other player will never allow this branch
            if alpha >= beta {
                break;
            }
        }

        (Some(best_column), value)
    }
}
