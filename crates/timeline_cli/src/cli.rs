//! Command-line interface for the timeline binary.

use clap::{Parser, Subcommand};
use timeline_tictactoe::Position;

/// Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin
    Play,

    /// Apply a scripted sequence of moves and jumps, then print the result
    Replay {
        /// Actions in order: a cell (0-8 or label) places a mark, `@N` jumps to snapshot N
        #[arg(value_parser = parse_action)]
        actions: Vec<Action>,

        /// Print the render input as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON schema of the render input
    Schema,
}

/// One scripted user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click a cell.
    Place(Position),
    /// Click a history entry.
    Jump(usize),
}

/// Error parsing an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid action '{}': expected 0-8, a position label, or @N", input)]
pub struct ParseActionError {
    /// The rejected input.
    #[error(not(source))]
    pub input: String,
}

/// Parses `@N` as a jump and anything else as a cell.
pub fn parse_action(s: &str) -> Result<Action, ParseActionError> {
    let s = s.trim();
    let parsed = match s.strip_prefix('@') {
        Some(target) => target.parse().ok().map(Action::Jump),
        None => Position::from_label_or_number(s).map(Action::Place),
    };
    parsed.ok_or_else(|| ParseActionError {
        input: s.to_string(),
    })
}

/// One line typed during interactive play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput {
    /// Blank line.
    Empty,
    /// Leave the game.
    Quit,
    /// List the history entries.
    History,
    /// Place a mark or jump.
    Act(Action),
}

/// Error parsing a line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlayInputError {
    /// `jump` without a target.
    #[display("Missing history index: use 'jump N'")]
    MissingIndex,
    /// `jump` with a target that is not a number.
    #[display("Not a history index: {}", target)]
    BadIndex {
        /// The rejected target.
        #[error(not(source))]
        target: String,
    },
    /// Anything else that is not a cell.
    #[display("Unknown command: {}", input)]
    Unknown {
        /// The rejected line.
        #[error(not(source))]
        input: String,
    },
}

/// Parses one line of interactive input.
pub fn parse_play_input(line: &str) -> Result<PlayInput, PlayInputError> {
    let input = line.trim();
    let mut words = input.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (None, _, _) => Ok(PlayInput::Empty),
        (Some("quit"), None, _) => Ok(PlayInput::Quit),
        (Some("history"), None, _) => Ok(PlayInput::History),
        (Some("jump"), None, _) => Err(PlayInputError::MissingIndex),
        (Some("jump"), Some(target), None) => target
            .parse()
            .map(|target| PlayInput::Act(Action::Jump(target)))
            .map_err(|_| PlayInputError::BadIndex {
                target: target.to_string(),
            }),
        _ => Position::from_label_or_number(input)
            .map(|position| PlayInput::Act(Action::Place(position)))
            .ok_or_else(|| PlayInputError::Unknown {
                input: input.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("4"), Ok(Action::Place(Position::Center)));
        assert_eq!(parse_action("top-left"), Ok(Action::Place(Position::TopLeft)));
        assert_eq!(parse_action("@3"), Ok(Action::Jump(3)));
        assert!(parse_action("@x").is_err());
        assert!(parse_action("9").is_err());
    }

    #[test]
    fn test_parse_play_input() {
        assert_eq!(parse_play_input("   "), Ok(PlayInput::Empty));
        assert_eq!(parse_play_input("quit"), Ok(PlayInput::Quit));
        assert_eq!(parse_play_input("history"), Ok(PlayInput::History));
        assert_eq!(
            parse_play_input("jump 2"),
            Ok(PlayInput::Act(Action::Jump(2)))
        );
        assert_eq!(
            parse_play_input("Bottom-right"),
            Ok(PlayInput::Act(Action::Place(Position::BottomRight)))
        );
    }

    #[test]
    fn test_bare_jump_reports_missing_index() {
        assert_eq!(parse_play_input("jump"), Err(PlayInputError::MissingIndex));
        assert_eq!(parse_play_input("  jump  "), Err(PlayInputError::MissingIndex));
        assert_eq!(
            parse_play_input("jump x").unwrap_err().to_string(),
            "Not a history index: x"
        );
        assert_eq!(
            parse_play_input("jmp 2").unwrap_err().to_string(),
            "Unknown command: jmp 2"
        );
    }

    #[test]
    fn test_cli_parses_replay() {
        let cli = Cli::try_parse_from(["timeline", "replay", "4", "0", "@1", "--json"]).unwrap();
        match cli.command {
            Command::Replay { actions, json } => {
                assert!(json);
                assert_eq!(
                    actions,
                    vec![
                        Action::Place(Position::Center),
                        Action::Place(Position::TopLeft),
                        Action::Jump(1)
                    ]
                );
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
