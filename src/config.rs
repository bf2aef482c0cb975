use clap::{Parser, ValueEnum};
use rand::Rng;

use crate::{
    board::Cell,
    error::ConfigError,
    search::{COMPUTER, DEFAULT_DEPTH, HUMAN},
};

/// The deepest search allowed, to keep the computer's turns responsive
pub const MAX_DEPTH: usize = 8;

/// Who places the first piece
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FirstMover {
    Human,
    Computer,
    Random,
}

/// Play Connect 4 against a minimax opponent
#[derive(Parser, Debug, Clone)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax opponent")]
pub struct Config {
    /// How many plies the computer searches ahead
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Seed for the computer's random choices (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Who moves first
    #[arg(long, value_enum, default_value_t = FirstMover::Human)]
    pub first: FirstMover,

    /// Log search details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
            first: FirstMover::Human,
            verbose: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be > 0".into()));
        }
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "depth must be <= {}",
                MAX_DEPTH
            )));
        }
        Ok(())
    }

    /// The piece that moves first, drawing from `rng` if it is left to chance
    pub fn first_piece<R: Rng>(&self, rng: &mut R) -> Cell {
        match self.first {
            FirstMover::Human => HUMAN,
            FirstMover::Computer => COMPUTER,
            FirstMover::Random => {
                if rng.random_bool(0.5) {
                    HUMAN
                } else {
                    COMPUTER
                }
            }
        }
    }
}
