//! Timeline - command-line driver for tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Action, Cli, Command, PlayInput, parse_play_input};
use std::io::{BufRead, Write};
use timeline_tictactoe::{Game, GameView, MoveError};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => run_play(),
        Command::Replay { actions, json } => run_replay(&actions, json),
        Command::Schema => run_schema(),
    }
}

/// Applies one action, logging and ignoring rejected ones like a UI would.
#[instrument(skip(game))]
fn apply(game: &mut Game, action: Action) {
    let result = match action {
        Action::Place(position) => game.play(position),
        Action::Jump(target) => game.jump(target),
    };
    if let Err(e) = result {
        warn!(error = %e, "Action ignored");
    }
}

/// Shown once a snapshot is won or drawn.
const RESUME_HINT: &str = "Game over. Jump to an earlier move to keep playing.";

/// Text rendering of a view: board, status line, history list.
fn render(view: &GameView) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(view.status_text());
    out.push('\n');
    if !view.highlighted().is_empty() {
        let line: Vec<String> = view
            .highlighted()
            .iter()
            .map(|p| p.to_index().to_string())
            .collect();
        out.push_str(&format!("Winning line: {}\n", line.join(", ")));
    }
    if view.status().is_terminal() {
        out.push_str(RESUME_HINT);
        out.push('\n');
    }
    out.push('\n');
    for entry in view.moves() {
        out.push_str(&format!("{:>2}. {}\n", entry.index(), entry.label()));
    }
    out
}

/// Run the scripted replay
fn run_replay(actions: &[Action], json: bool) -> Result<()> {
    let mut game = Game::new();
    for action in actions {
        apply(&mut game, *action);
    }
    let view = game.view()?;
    if json {
        println!("{}", view.to_json()?);
    } else {
        print!("{}", render(&view));
    }
    Ok(())
}

/// Run the schema printer
fn run_schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&GameView::json_schema())?);
    Ok(())
}

/// Run the interactive stdin loop
fn run_play() -> Result<()> {
    info!("Starting interactive game");
    let mut game = Game::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("{}\n", game.view()?.board().display());
    println!("Enter a cell (0-8 or label), 'jump N', 'history', or 'quit'.");

    for line in stdin.lock().lines() {
        let line = line?;
        let action = match parse_play_input(&line) {
            Ok(PlayInput::Empty) => continue,
            Ok(PlayInput::Quit) => break,
            Ok(PlayInput::History) => {
                for entry in game.view()?.moves() {
                    println!("{:>2}. {}", entry.index(), entry.label());
                }
                continue;
            }
            Ok(PlayInput::Act(action)) => action,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let result: Result<(), MoveError> = match action {
            Action::Place(position) => game.play(position),
            Action::Jump(target) => game.jump(target),
        };

        if let Err(e) = result {
            println!("{}", e);
            continue;
        }

        let view = game.view()?;
        println!("{}\n\n{}", view.board().display(), view.status_text());
        if view.status().is_terminal() {
            println!("{}", RESUME_HINT);
        }
        stdout.flush()?;
    }

    Ok(())
}
