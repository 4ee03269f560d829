use crate::board::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New(String),
    Reset,
    Start,
    State,
    Board,
    Actions,
    Contenders,
    Play { from: Coord, to: Coord },
    Finish,
    Help,
    Quit,
    Invalid(String),
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let cmd = match parts[0] {
        "new" => match parts.get(1) {
            Some(variant) => Command::New((*variant).to_string()),
            None => Command::Invalid("new needs a variant".to_string()),
        },
        "reset" => Command::Reset,
        "start" => Command::Start,
        "state" => Command::State,
        "board" => Command::Board,
        "actions" => Command::Actions,
        "contenders" => Command::Contenders,
        "play" => parse_play(&parts[1..]),
        "finish" => Command::Finish,
        "help" => Command::Help,
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

fn parse_play(args: &[&str]) -> Command {
    let numbers: Option<Vec<i32>> = args.iter().map(|a| a.parse().ok()).collect();
    match numbers.as_deref() {
        Some(&[x1, y1, x2, y2]) => Command::Play {
            from: Coord::new(x1, y1),
            to: Coord::new(x2, y2),
        },
        _ => Command::Invalid("play needs four integers: x1 y1 x2 y2".to_string()),
    }
}
