// Terminal Sokoban
// Controls: W/A/S/D or arrow keys to move, U to undo, R to restart, X to give up, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sokoban::config::{AppConfig, LoggingConfig};
use sokoban::console_interface::{ConsoleInput, cleanup_terminal, handle_input, render_game, setup_terminal};
use sokoban::core::{MoveOutcome, Session};
use sokoban::models::{GameRenderState, GameStatus};
use sokoban::storage::{load_history, save_board, save_history};

/// Play a 12x12 Sokoban level in the terminal.
#[derive(Parser)]
#[command(name = "sokoban", about = "Push every box onto a target")]
struct Cli {
    /// Level or saved board file
    level: PathBuf,

    /// Path to TOML configuration file
    #[arg(long, default_value = "sokoban.toml")]
    config: PathBuf,

    /// Move log to replay before handing over control
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Where to write the board when giving up
    #[arg(long)]
    save_board: Option<PathBuf>,

    /// Where to write the move log when the game ends
    #[arg(long)]
    save_moves: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    init_tracing(&config.logging)?;

    let mut session = Session::load(&cli.level, &config.game)
        .with_context(|| format!("loading level {}", cli.level.display()))?;

    if let Some(replay) = &cli.replay {
        let log = load_history(replay)
            .with_context(|| format!("reading move log {}", replay.display()))?;
        session
            .replay_moves(&log)
            .with_context(|| format!("replaying {}", replay.display()))?;
    }

    let level_name = cli
        .level
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut terminal = setup_terminal().map_err(|e| anyhow!("{e}"))?;
    let status = run_interactive(&mut session, &level_name, &mut terminal);
    cleanup_terminal().map_err(|e| anyhow!("{e}"))?;
    let status = status?;

    match status {
        GameStatus::Won => println!("Solved in {} moves!", session.move_count()),
        GameStatus::Surrendered => println!("Better luck next time."),
        GameStatus::Playing => {}
    }
    info!(?status, moves = session.move_count(), "game over");

    if status != GameStatus::Playing {
        if let Some(path) = &cli.save_moves {
            save_history(path, session.history())
                .with_context(|| format!("saving moves to {}", path.display()))?;
        }
    }
    if status == GameStatus::Surrendered {
        if let Some(path) = &cli.save_board {
            save_board(path, session.board())
                .with_context(|| format!("saving board to {}", path.display()))?;
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("invalid log filter '{}'", logging.level))?;
    let file = open_log(&logging.file)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn open_log(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

fn run_interactive(
    session: &mut Session,
    level_name: &str,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<GameStatus> {
    let mut status = GameStatus::Playing;
    let mut blocked = None;
    let mut last_change = None;

    loop {
        let to_render = GameRenderState {
            level_name,
            session: &*session,
            status,
            blocked,
            last_change,
        };
        render_game(terminal, &to_render).map_err(|e| anyhow!("{e}"))?;

        if status != GameStatus::Playing {
            // Keep showing the final screen until user inputs
            loop {
                match handle_input() {
                    Ok(ConsoleInput::Timeout) => {}
                    Ok(_) => break,
                    Err(e) => {
                        error!(error = %e, "error reading input");
                        break;
                    }
                }
            }
            return Ok(status);
        }

        let input = match handle_input() {
            Ok(input) => input,
            Err(e) => {
                error!(error = %e, "error reading input");
                return Ok(status);
            }
        };

        match input {
            ConsoleInput::Quit => return Ok(status),
            ConsoleInput::Move(direction) => match session.attempt(direction) {
                MoveOutcome::Moved { change, won } => {
                    blocked = None;
                    last_change = Some(change);
                    if won {
                        status = GameStatus::Won;
                    }
                }
                MoveOutcome::Blocked(reason) => {
                    blocked = Some(reason);
                }
            },
            ConsoleInput::Undo => {
                session.undo();
                blocked = None;
                last_change = None;
            }
            ConsoleInput::Restart => {
                session.restart();
                blocked = None;
                last_change = None;
            }
            ConsoleInput::Surrender => status = GameStatus::Surrendered,
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }
}
