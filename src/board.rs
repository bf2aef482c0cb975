use anyhow::{anyhow, Result};

use crate::{error::MoveError, HEIGHT, WIDTH};

/// The number of 4-cell windows on the board across all four directions
pub const NUM_WINDOWS: usize =
    HEIGHT * (WIDTH - 3) + WIDTH * (HEIGHT - 3) + 2 * (WIDTH - 3) * (HEIGHT - 3);

/// Every run of four cells on the board, as indices into the cell array
pub const WINDOWS: [[usize; 4]; NUM_WINDOWS] = windows();

const fn index(row: usize, column: usize) -> usize {
    column + WIDTH * row
}

/// Builds the window table: horizontal, vertical, diagonal rising
/// (bottom-left to top-right) and diagonal falling (top-left to bottom-right)
const fn windows() -> [[usize; 4]; NUM_WINDOWS] {
    let mut windows = [[0; 4]; NUM_WINDOWS];
    let mut n = 0;

    // horizontal
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column + 3 < WIDTH {
            let mut i = 0;
            while i < 4 {
                windows[n][i] = index(row, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // vertical
    let mut column = 0;
    while column < WIDTH {
        let mut row = 0;
        while row + 3 < HEIGHT {
            let mut i = 0;
            while i < 4 {
                windows[n][i] = index(row + i, column);
                i += 1;
            }
            n += 1;
            row += 1;
        }
        column += 1;
    }

    // diagonal /
    let mut row = 0;
    while row + 3 < HEIGHT {
        let mut column = 0;
        while column + 3 < WIDTH {
            let mut i = 0;
            while i < 4 {
                windows[n][i] = index(row + i, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // diagonal \
    let mut row = 3;
    while row < HEIGHT {
        let mut column = 0;
        while column + 3 < WIDTH {
            let mut i = 0;
            while i < 4 {
                windows[n][i] = index(row - i, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }
    windows
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The other player's piece. `Empty` has no opponent and maps to itself
    pub fn opponent(&self) -> Self {
        match self {
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// A 6x7 Connect 4 grid
///
/// Cells are stored left-to-right, bottom-to-top, so row 0 is the bottom
/// of the board. Columns and rows are 0-indexed here; only the errors
/// report columns 1-indexed, the way a player sees them.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a position from a string of 1-indexed column digits,
    /// with player one moving first
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = Cell::PlayerOne;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is won at any point
                    if board.has_won(piece.opponent()) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    board.drop_piece(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[index(row, column)]
    }

    /// Whether a piece can be dropped into `column`
    pub fn is_valid(&self, column: usize) -> bool {
        column < WIDTH && self.get(HEIGHT - 1, column).is_empty()
    }

    /// The lowest empty row of `column`
    pub fn next_open_row(&self, column: usize) -> Result<usize, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::OutOfRange(column + 1));
        }
        (0..HEIGHT)
            .find(|&row| self.get(row, column).is_empty())
            .ok_or(MoveError::ColumnFull(column + 1))
    }

    /// Sets a single cell. Callers are expected to pick `row` with
    /// [`next_open_row`](Board::next_open_row)
    pub fn place(&mut self, row: usize, column: usize, piece: Cell) {
        self.cells[index(row, column)] = piece;
    }

    /// Drops `piece` into `column`, returning the row it landed on
    pub fn drop_piece(&mut self, column: usize, piece: Cell) -> Result<usize, MoveError> {
        let row = self.next_open_row(column)?;
        self.place(row, column, piece);
        Ok(row)
    }

    /// Whether `piece` has four in a row in any direction
    pub fn has_won(&self, piece: Cell) -> bool {
        if piece.is_empty() {
            return false;
        }
        WINDOWS
            .iter()
            .any(|window| window.iter().all(|&i| self.cells[i] == piece))
    }

    /// Columns that can still take a piece, in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.is_valid(column)).collect()
    }

    /// Whether the game is over, by a win for either player or a full board
    pub fn is_terminal(&self) -> bool {
        self.has_won(Cell::PlayerOne)
            || self.has_won(Cell::PlayerTwo)
            || self.valid_columns().is_empty()
    }

    /// The number of cells holding `piece`
    pub fn count(&self, piece: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == piece).count()
    }

    /// The cells of one window, in scan order
    pub fn window(&self, window: &[usize; 4]) -> [Cell; 4] {
        [
            self.cells[window[0]],
            self.cells[window[1]],
            self.cells[window[2]],
            self.cells[window[3]],
        ]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
