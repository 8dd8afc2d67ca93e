use crate::model::Seat;
use crate::parser;

/// One line of console input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewSession,
    Refresh,
    SelectSeat(Seat),
    Bid(String),
    Check(String),
    Help,
    Quit,
}

/// Parse a console command line.
///
/// A line that is itself a well-formed bid token ("1h", "pass", "x")
/// is shorthand for `bid <token>`, matching the bare-prompt input of
/// the original game loop.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let head = match parts.next() {
        Some(h) => h,
        None => return Err("empty command (try `help`)".to_string()),
    };
    let rest = parts.collect::<Vec<_>>().join(" ");

    match head.to_lowercase().as_str() {
        "new" => Ok(Command::NewSession),
        "refresh" | "show" | "r" => Ok(Command::Refresh),
        "seat" => match Seat::parse(&rest) {
            Some(seat) => Ok(Command::SelectSeat(seat)),
            None => Err(format!("unknown seat: {rest} (use N, E, S, or W)")),
        },
        "bid" | "b" => {
            if rest.is_empty() {
                Err("usage: bid <call>".to_string())
            } else {
                Ok(Command::Bid(rest))
            }
        }
        "check" | "c" => {
            if rest.is_empty() {
                Err("usage: check <call>".to_string())
            } else {
                Ok(Command::Check(rest))
            }
        }
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ if rest.is_empty() && parser::is_well_formed(head) => {
            Ok(Command::Bid(head.to_string()))
        }
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}
