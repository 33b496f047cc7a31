// Terminal Sokoban on top of the sokoban_rules engine.
// Controls: W/A/S/D or arrow keys to move, U undo, R reset, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal, '+' player on goal, ' ' floor.

mod console_interface;
mod models;

use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban_rules::{Game, GameConfig, MoveOutcome};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use crate::models::GameRenderState;

const BUILT_IN_LEVEL: &str = r#"
       ####
########  ##
#          ###
# @$$ ##   ..#
# $$   ##  ..#
#         ####
###########
"#;

#[derive(Parser, Debug)]
#[command(about = "Play a Sokoban level in the terminal")]
struct Args {
    /// Level file; the built-in level is used when omitted.
    #[arg(long)]
    level: Option<PathBuf>,
    /// JSON file with a GameConfig.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "sokoban.log")]
    log_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&args.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_out))
        .with_ansi(false)
        .init();

    let level = match &args.level {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUILT_IN_LEVEL.to_string(),
    };
    let config = match &args.config {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };

    let mut game = Game::with_config(&level, config)?;
    info!(level = ?args.level, "starting game");

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut game, &mut terminal);
    cleanup_terminal()?;
    result?;

    let report = game.report();
    info!(solution = %report.solution, won = report.won, "game finished");
    println!("{}", report.to_json()?);
    Ok(())
}

fn run_interactive(
    game: &mut Game,
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    render_game(terminal, &GameRenderState::from_game(game))?;

    loop {
        let mut rejection = None;
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Move(direction) => match game.move_player(direction)? {
                MoveOutcome::Rejected(reason) => rejection = Some(reason),
                MoveOutcome::Moved(_) if game.has_won() => {
                    info!(solution = %game.solution(), "level solved");
                }
                MoveOutcome::Moved(_) => {}
            },
            ConsoleInput::Undo => {
                game.undo();
            }
            ConsoleInput::Reset => game.reset(),
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
        }

        let mut to_render = GameRenderState::from_game(game);
        to_render.rejection = rejection;
        render_game(terminal, &to_render)?;
    }

    Ok(())
}
