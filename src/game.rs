use log::{debug, info};

use crate::{
    board::{Board, Cell},
    error::MoveError,
    PIECES_PER_PLAYER, WIDTH,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// A game in progress: the board plus whose turn it is and what has been played
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Cell,
    // remaining pieces of player one and player two
    pieces_left: [usize; 2],
    moves: String,
    state: GameState,
}

impl Game {
    /// Starts a new game with `first` to move
    pub fn new(first: Cell) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            pieces_left: [PIECES_PER_PLAYER; 2],
            moves: String::new(),
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Cell {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The game so far as a string of 1-indexed columns
    pub fn moves(&self) -> &str {
        &self.moves
    }

    /// How many pieces `piece`'s player has yet to place. Informational only
    pub fn pieces_left(&self, piece: Cell) -> usize {
        match piece {
            Cell::PlayerOne => self.pieces_left[0],
            Cell::PlayerTwo => self.pieces_left[1],
            Cell::Empty => 0,
        }
    }

    /// Plays a move for the side to move in a 1-indexed column
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState, MoveError> {
        if self.state != GameState::Playing {
            return Err(MoveError::GameOver);
        }
        if !(1..=WIDTH).contains(&column_one_indexed) {
            return Err(MoveError::OutOfRange(column_one_indexed));
        }
        let column = column_one_indexed - 1;
        if !self.board.is_valid(column) {
            return Err(MoveError::ColumnFull(column_one_indexed));
        }

        let player = self.to_move;
        let row = self.board.drop_piece(column, player)?;
        debug!("{:?} played column {} (row {})", player, column_one_indexed, row + 1);

        match player {
            Cell::PlayerOne => self.pieces_left[0] = self.pieces_left[0].saturating_sub(1),
            Cell::PlayerTwo => self.pieces_left[1] = self.pieces_left[1].saturating_sub(1),
            Cell::Empty => {}
        }
        self.moves.push_str(&column_one_indexed.to_string());

        self.state = if self.board.has_won(player) {
            match player {
                Cell::PlayerTwo => GameState::PlayerTwoWin,
                _ => GameState::PlayerOneWin,
            }
        } else if self.board.valid_columns().is_empty() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        if self.state != GameState::Playing {
            info!("game over: {:?} after moves {}", self.state, self.moves);
        }

        self.to_move = player.opponent();
        Ok(self.state)
    }
}
