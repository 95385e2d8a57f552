use crate::core::{BlockedReason, Direction};
use crate::models::{GameRenderState, GameStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let header = format!(
            "Level: {} | Moves: {}",
            state.level_name,
            state.session.move_count()
        );
        let header_paragraph = Paragraph::new(header)
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .alignment(Alignment::Center);
        f.render_widget(header_paragraph, chunks[0]);

        let game_paragraph = Paragraph::new(state.session.board().to_string())
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[1]);

        let instruction_paragraph = Paragraph::new(status_line(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

fn status_line(state: &GameRenderState) -> String {
    let instructions = match state.status {
        GameStatus::Won => "You win! Press any key to quit.",
        GameStatus::Surrendered => "Level abandoned. Press any key to quit.",
        GameStatus::Playing => "WASD/arrows move, U undo, R restart, X give up, Q quit",
    };

    let instructions = if let Some(reason) = &state.blocked {
        format!("{} | Blocked: {}", instructions, blocked_message(*reason))
    } else {
        instructions.to_string()
    };

    if let Some(change_type) = &state.last_change {
        format!("{} | Last: {:?}", instructions, change_type)
    } else {
        instructions
    }
}

fn blocked_message(reason: BlockedReason) -> &'static str {
    match reason {
        BlockedReason::OutOfBounds => "edge of the board",
        BlockedReason::Wall => "wall",
        BlockedReason::BoxBlocked => "box cannot move",
        BlockedReason::HistoryFull => "move limit reached",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    Move(Direction),
    Undo,
    Restart,
    Surrender,
    Quit,
    Timeout,
    Unknown,
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => ConsoleInput::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => ConsoleInput::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => ConsoleInput::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => ConsoleInput::Move(Direction::Right),
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => ConsoleInput::Undo,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
        KeyCode::Char('x') | KeyCode::Char('X') => ConsoleInput::Surrender,
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
