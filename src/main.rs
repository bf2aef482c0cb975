use anyhow::{anyhow, Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{config::Config, search::COMPUTER, Game, GameState, Searcher};

mod display;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("invalid command line")?;

    env_logger::builder()
        .filter_level(if config.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let (mut searcher, mut rng) = match config.seed {
        Some(seed) => (Searcher::seeded(seed), StdRng::seed_from_u64(seed)),
        None => (Searcher::new(), StdRng::from_os_rng()),
    };

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut game = Game::new(config.first_piece(&mut rng));
    display::draw(&game).context("failed to draw board")?;

    // game loop
    loop {
        match game.state() {
            GameState::Playing => {
                // AI player
                if game.to_move() == COMPUTER {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message("Computer is thinking...");
                    spinner.enable_steady_tick(100);

                    let best_move = searcher.choose_move(game.board(), config.depth);
                    spinner.finish_and_clear();

                    let column = best_move.ok_or_else(|| anyhow!("no legal move left"))?;
                    game.play_checked(column + 1)?;
                    display::draw(&game).context("failed to draw board")?;
                    println!("Computer played column {}", column + 1);

                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush()?;
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        // end of input
                        println!();
                        break;
                    }

                    let column = match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    };

                    if let Err(err) = game.play_checked(column) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                    display::draw(&game).context("failed to draw board")?;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("You win!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("The computer wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    println!("Moves played: {}", game.moves());
    Ok(())
}
