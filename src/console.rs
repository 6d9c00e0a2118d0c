//! Line-based terminal frontend.
//!
//! Reads one command per line, prints the board after every change and runs
//! the AI's turn through the session so the thinking pause applies.

use crate::session::GameSession;
use crate::tictactoe::{GameSnapshot, MoveOutcome, Outcome, Position, Turn};
use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Tap a cell (0-based index; may be out of range).
    Cell(usize),
    /// Start over.
    Restart,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses `1`-`9` (as shown on the board), a cell label, `r` or `q`.
    #[instrument]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim().to_lowercase();
        match trimmed.as_str() {
            "q" | "quit" | "exit" => return Command::Quit,
            "r" | "restart" => return Command::Restart,
            _ => {}
        }

        if let Ok(number) = trimmed.parse::<usize>() {
            return number
                .checked_sub(1)
                .map_or_else(|| Command::Unknown(trimmed.clone()), Command::Cell);
        }

        Position::from_label(&trimmed)
            .map(|pos| Command::Cell(pos.to_index()))
            .unwrap_or(Command::Unknown(trimmed))
    }
}

/// Text shown when a game ends.
pub fn outcome_banner(outcome: Outcome) -> String {
    match outcome {
        Outcome::PlayerWin => format!("{outcome} 🎉"),
        Outcome::AiWin => format!("{outcome} 😤"),
        Outcome::Draw => format!("{outcome} 😳"),
        Outcome::InProgress => outcome.to_string(),
    }
}

/// Runs the console loop until the user quits or input ends.
///
/// Fails if the AI's turn is ignored, since the game cannot continue.
#[instrument(skip_all)]
pub async fn run_console<R, W>(session: &mut GameSession, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    info!("Console started");

    loop {
        let snapshot = session.snapshot();
        render(&mut writer, &snapshot).await?;

        if snapshot.is_over() {
            write(
                &mut writer,
                &format!(
                    "{}\nType 'r' to start over or 'q' to quit: ",
                    outcome_banner(*snapshot.outcome())
                ),
            )
            .await?;
            match next_command(&mut lines).await? {
                None | Some(Command::Quit) => break,
                Some(Command::Restart) => session.on_restart_requested(),
                Some(other) => {
                    debug!(?other, "Input ignored after game over");
                    write(&mut writer, "The game is over.\n").await?;
                }
            }
            continue;
        }

        match snapshot.turn() {
            Turn::Player => {
                write(&mut writer, "Your move (1-9, r to restart, q to quit): ").await?;
                match next_command(&mut lines).await? {
                    None | Some(Command::Quit) => break,
                    Some(Command::Restart) => session.on_restart_requested(),
                    Some(Command::Cell(index)) => {
                        if let MoveOutcome::Ignored(reason) = session.on_player_tap(index) {
                            write(&mut writer, &format!("{reason}\n")).await?;
                        }
                    }
                    Some(Command::Unknown(text)) => {
                        write(&mut writer, &format!("Unrecognised input: {text}\n")).await?;
                    }
                }
            }
            Turn::Ai => {
                write(&mut writer, "AI is thinking...\n").await?;
                if let MoveOutcome::Ignored(reason) = session.on_ai_turn_begins().await {
                    write(&mut writer, &format!("{reason}\n")).await?;
                    bail!("AI could not move: {reason}");
                }
            }
        }
    }

    write(&mut writer, "Goodbye!\n").await?;
    info!("Console finished");
    Ok(())
}

async fn next_command<R>(lines: &mut tokio::io::Lines<R>) -> Result<Option<Command>>
where
    R: AsyncBufRead + Unpin,
{
    let line = lines.next_line().await.context("Failed to read input")?;
    Ok(line.map(|l| Command::parse(&l)))
}

async fn render<W>(writer: &mut W, snapshot: &GameSnapshot) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let header = if snapshot.is_over() {
        "Game over".to_string()
    } else {
        snapshot.turn().to_string()
    };
    write(writer, &format!("\n{}\n\n{}\n\n", header, snapshot.board().display())).await
}

async fn write<W>(writer: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(text.as_bytes())
        .await
        .context("Failed to write output")?;
    writer.flush().await.context("Failed to flush output")
}
