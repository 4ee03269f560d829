//! Line-based text protocol for playing games from a terminal or a script.
//!
//! Each command produces zero or more response lines. Game events are
//! written as `event ...` lines once the scheduler delivers them.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{
    presets, Applied, Game, GameBuilder, IllegalAction, InvalidConfiguration, Outcome, Pacing,
    TurnState,
};
use crate::board::Coord;
use crate::events::GameEvent;
use crate::timer::TimerScheduler;

pub mod command;

pub use command::{parse_command, Command};

/// Error type for protocol commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No game has been created yet
    NoGame,
    /// `new` named a variant that does not exist
    UnknownVariant { name: String },
    /// The command could not be parsed
    BadArguments { reason: String },
    /// `play` named a cell without an active piece
    NoPieceAt { at: Coord },
    /// The game rejected the configuration
    Config(InvalidConfiguration),
    /// The game rejected the action
    Illegal(IllegalAction),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NoGame => write!(f, "No game; use 'new checkers' or 'new chess'"),
            CommandError::UnknownVariant { name } => write!(f, "Unknown variant '{name}'"),
            CommandError::BadArguments { reason } => write!(f, "{reason}"),
            CommandError::NoPieceAt { at } => write!(f, "No piece at {at}"),
            CommandError::Config(e) => write!(f, "Invalid configuration: {e}"),
            CommandError::Illegal(e) => write!(f, "Illegal action: {e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<InvalidConfiguration> for CommandError {
    fn from(e: InvalidConfiguration) -> Self {
        CommandError::Config(e)
    }
}

impl From<IllegalAction> for CommandError {
    fn from(e: IllegalAction) -> Self {
        CommandError::Illegal(e)
    }
}

/// Where event lines go.
#[derive(Clone)]
enum EventSink {
    /// Printed from the timer thread with the preset pacing.
    Stdout,
    /// Collected and returned with the next command's output.
    Buffer(Arc<Mutex<Vec<String>>>),
}

/// One interactive session holding at most one game.
pub struct Session {
    game: Option<Game>,
    sink: EventSink,
}

impl Session {
    /// A session that paces events in real time and prints them to stdout.
    #[must_use]
    pub fn interactive() -> Self {
        Session {
            game: None,
            sink: EventSink::Stdout,
        }
    }

    /// A session that delivers events immediately and returns them as output.
    #[must_use]
    pub fn buffered() -> Self {
        Session {
            game: None,
            sink: EventSink::Buffer(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Run one command and return its response lines.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>, CommandError> {
        let mut out = match command {
            Command::New(variant) => self.new_game(&variant)?,
            Command::Reset => {
                self.game_mut()?.reset();
                vec!["ok reset".to_string()]
            }
            Command::Start => {
                self.game_mut()?.start()?;
                vec!["ok start".to_string()]
            }
            Command::State => vec![format_state(self.game_ref()?.state())],
            Command::Board => self
                .game_ref()?
                .to_string()
                .lines()
                .map(str::to_string)
                .collect(),
            Command::Actions => format_actions(self.game_ref()?),
            Command::Contenders => {
                let mut line = "contenders".to_string();
                for player in self.game_ref()?.contending_players() {
                    line.push_str(&format!(" {player}"));
                }
                vec![line]
            }
            Command::Play { from, to } => {
                let game = self.game_mut()?;
                let piece = game
                    .piece_at(from)
                    .map(|p| p.id())
                    .ok_or(CommandError::NoPieceAt { at: from })?;
                let applied = game.select_and_apply(piece, to)?;
                vec![format_applied(&applied)]
            }
            Command::Finish => {
                self.game_mut()?.finish();
                vec!["ok finish".to_string()]
            }
            Command::Help => help_lines(),
            Command::Quit => Vec::new(),
            Command::Invalid(reason) => return Err(CommandError::BadArguments { reason }),
            Command::Unknown(line) => {
                return Err(CommandError::BadArguments {
                    reason: format!("Unknown command '{line}'"),
                })
            }
        };
        if let EventSink::Buffer(buffer) = &self.sink {
            out.extend(buffer.lock().drain(..));
        }
        Ok(out)
    }

    fn new_game(&mut self, variant: &str) -> Result<Vec<String>, CommandError> {
        let config = match variant {
            "checkers" => presets::checkers(),
            "chess" => presets::chess(),
            _ => {
                return Err(CommandError::UnknownVariant {
                    name: variant.to_string(),
                })
            }
        };
        // Drop the old game first so its timer drains before the new one starts.
        self.game = None;

        let builder = GameBuilder::from_config(config);
        let game = match &self.sink {
            EventSink::Stdout => builder.scheduler(TimerScheduler::new()).build()?,
            EventSink::Buffer(_) => builder.pacing(Pacing::NONE).build()?,
        };
        let sink = self.sink.clone();
        game.observers().subscribe(move |event: &GameEvent| {
            let line = format!("event {event}");
            match &sink {
                EventSink::Stdout => println!("{line}"),
                EventSink::Buffer(buffer) => buffer.lock().push(line),
            }
        });

        let line = format!(
            "ok new {variant} {}x{} players {}",
            game.width(),
            game.height(),
            game.players()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        self.game = Some(game);
        Ok(vec![line])
    }

    fn game_ref(&self) -> Result<&Game, CommandError> {
        self.game.as_ref().ok_or(CommandError::NoGame)
    }

    fn game_mut(&mut self) -> Result<&mut Game, CommandError> {
        self.game.as_mut().ok_or(CommandError::NoGame)
    }
}

pub fn format_state(state: &TurnState) -> String {
    match state {
        TurnState::AwaitingPlayer(player) => format!("state awaiting_player {player}"),
        TurnState::AwaitingSelection(player) => format!("state awaiting_selection {player}"),
        TurnState::CaptureChain { player, piece } => {
            format!("state capture_chain {player} {piece}")
        }
        TurnState::RoundEnd(Outcome::Win { winners }) => {
            let winners: Vec<String> = winners.iter().map(ToString::to_string).collect();
            format!("state round_end win {}", winners.join(" "))
        }
        TurnState::RoundEnd(Outcome::Stalemate { player }) => {
            format!("state round_end stalemate {player}")
        }
        TurnState::Finished => "state finished".to_string(),
    }
}

fn format_actions(game: &Game) -> Vec<String> {
    let mut lines = Vec::new();
    for piece in game.selectable_pieces() {
        let mut line = format!(
            "piece {} {} at {} moves",
            piece.id(),
            game.kind(piece.kind()).name,
            piece.position()
        );
        for to in piece.moves() {
            line.push_str(&format!(" {to}"));
        }
        line.push_str(" captures");
        for capture in piece.captures() {
            line.push_str(&format!(" {}x{}", capture.landing, capture.captured_at));
        }
        lines.push(line);
    }
    lines.push("actions end".to_string());
    lines
}

fn format_applied(applied: &Applied) -> String {
    let (mut line, promoted) = match *applied {
        Applied::Moved { piece, to, promoted } => (format!("ok moved {piece} to {to}"), promoted),
        Applied::Captured {
            piece,
            to,
            captured,
            promoted,
        } => (
            format!("ok captured {captured} with {piece} landing {to}"),
            promoted,
        ),
    };
    if promoted {
        line.push_str(" promoted");
    }
    line
}

fn help_lines() -> Vec<String> {
    [
        "new checkers|chess   create a game",
        "start                begin the first turn",
        "state                show the turn state",
        "board                draw the board",
        "actions              list selectable pieces and their actions",
        "play x1 y1 x2 y2     move the piece on x1,y1 to x2,y2",
        "contenders           list players still in contention",
        "reset | finish       restart or end the game",
        "quit",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

pub fn run_loop() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::interactive();

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };
        if command == Command::Quit {
            break;
        }

        match session.execute(command) {
            Ok(lines) => {
                for l in lines {
                    println!("{l}");
                }
            }
            Err(e) => println!("error {e}"),
        }

        let _ = stdout.flush();
    }
}
