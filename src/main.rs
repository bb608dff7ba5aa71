use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use minimax_chess::agent::{GameResult, MinimaxPlayer, Player};
use minimax_chess::config::{Cli, GameConfig};
use minimax_chess::game_repr::{ChessGame, Rules};

/// One line of console input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(String),
    DepthUp,
    DepthDown,
    TogglePruning,
    ToggleCompare,
    Reset,
    Board,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let command = match line {
        "" => return None,
        "+" | "=" => Command::DepthUp,
        "-" => Command::DepthDown,
        "a" => Command::TogglePruning,
        "c" => Command::ToggleCompare,
        "r" => Command::Reset,
        "b" | "board" => Command::Board,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        text => Command::Move(text.to_ascii_lowercase()),
    };
    Some(command)
}

fn print_help() {
    println!("Enter moves in UCI form (e2e4, e7e8q).");
    println!("  +  increase AI depth     -  decrease AI depth");
    println!("  a  toggle alpha-beta     c  toggle algorithm comparison");
    println!("  b  show board            r  restart");
    println!("  h  help                  q  quit");
}

/// Announces the result if `game` has just finished. Returns true when over.
fn announce_if_over(game: &ChessGame, ai: &mut MinimaxPlayer) -> bool {
    let Some(result) = GameResult::from_game(game) else {
        return false;
    };
    ai.game_ended(result);
    let reason = if game.is_checkmate() {
        "Checkmate"
    } else if game.is_stalemate() {
        "Stalemate"
    } else if game.is_insufficient_material() {
        "Insufficient material"
    } else if game.is_seventyfive_moves() {
        "Seventy-five-move rule"
    } else {
        "Fivefold repetition"
    };
    println!("{} ({})", result.headline(), reason);
    println!("Press r to restart or q to quit");
    true
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = GameConfig::from_cli(&cli)?;
    let mut game = config.new_game()?;
    let mut ai = MinimaxPlayer::new(config.settings);

    log::info!(
        "Human plays {}, AI depth {} using {}",
        config.human_side.name(),
        ai.settings().depth(),
        ai.settings().algorithm_name()
    );
    print_help();
    println!("{}", game);
    let mut over = announce_if_over(&game, &mut ai);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !over && game.side_to_move() == config.ai_side() {
            match ai.get_move(&mut game) {
                Some(mv) => game.push(mv),
                None => {
                    log::warn!("AI found no move in an unfinished game");
                    break;
                }
            }
            println!("{}", game);
            over = announce_if_over(&game, &mut ai);
            continue;
        }

        print!("{}> ", game.side_to_move().name());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let Some(command) = parse_command(&line?) else {
            continue;
        };

        match command {
            Command::Move(_) if over => println!("The game is over. Press r to restart or q to quit"),
            Command::Move(text) => match game.parse_move(&text) {
                Ok(mv) => {
                    println!("User Move: {}", game.move_description(mv));
                    game.push(mv);
                    over = announce_if_over(&game, &mut ai);
                }
                Err(err) => println!("{}", err),
            },
            Command::DepthUp => {
                ai.settings_mut().increase_depth();
                log::info!("AI depth increased to {}", ai.settings().depth());
            }
            Command::DepthDown => {
                if ai.settings_mut().decrease_depth() {
                    log::info!("AI depth decreased to {}", ai.settings().depth());
                }
            }
            Command::TogglePruning => {
                ai.settings_mut().toggle_pruning();
                log::info!("Switched to {} algorithm", ai.settings().algorithm_name());
            }
            Command::ToggleCompare => {
                let settings = ai.settings_mut();
                settings.compare_algorithms = !settings.compare_algorithms;
                log::info!(
                    "Algorithm comparison {}",
                    if settings.compare_algorithms { "on" } else { "off" }
                );
            }
            Command::Reset => {
                game.reset();
                println!("{}", game);
                over = announce_if_over(&game, &mut ai);
            }
            Command::Board => println!("{}", game),
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }

    Ok(())
}
