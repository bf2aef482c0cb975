use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{
    search::{COMPUTER, HUMAN},
    Cell, Game, HEIGHT, WIDTH,
};

/// Draws the board top row first, followed by each player's remaining pieces
pub fn draw(game: &Game) -> Result<()> {
    let mut stdout = stdout();
    let board = game.board();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.get(row, column) {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }

    stdout.queue(PrintStyledContent(style(format!(
        "Pieces left - you: {}, computer: {}\n",
        game.pieces_left(HUMAN),
        game.pieces_left(COMPUTER)
    ))))?;
    stdout.flush()?;
    Ok(())
}
