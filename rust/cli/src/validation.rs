//! Parsing of shell input lines.
//!
//! Numbers are parsed strictly here: a bet of `"12abc"` is a typo, not 12.
//! Range checks (positive, affordable, 0-36) stay with the engine so the
//! shell and the one-shot commands reject the same things the same way.

use nike_engine::session::AdjustMode;

/// One action typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Register { name: String, balance: String },
    Logout,
    Status,
    Adjust { mode: AdjustMode, amount: i64 },
    Roulette { bet: i64, number: i64 },
    Dice { bet: i64 },
    Slots { bet: i64 },
    History { last: Option<usize> },
    /// Play every round in flight to the end.
    Wait,
    Help,
}

#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(ShellCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Blank line
    Empty,
    Invalid(String),
}

pub const SHELL_HELP: &str = "\
Commands:
  register <name> [balance]   create a player (replaces the current one)
  logout                      forget the player
  status                      show balance and prizes
  add <n> | remove <n> | set <n>
                              adjust the balance
  roulette <bet> <number>     bet on one number, 0-36
  dice <bet>                  7 or 11 doubles the bet
  slots <bet>                 three of a kind pays 10x, two sevens 3x
  wait                        finish every round in flight
  history [k]                 summarize the last k rounds
  help                        this text
  quit | q                    leave";

/// Parse a shell line.
///
/// ```rust
/// # use nike_cli::validation::{parse_shell_command, ParseResult, ShellCommand};
/// assert_eq!(
///     parse_shell_command("roulette 10 17"),
///     ParseResult::Command(ShellCommand::Roulette { bet: 10, number: 17 })
/// );
/// assert_eq!(parse_shell_command("q"), ParseResult::Quit);
/// ```
pub fn parse_shell_command(input: &str) -> ParseResult {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(head) = parts.first() else {
        return ParseResult::Empty;
    };
    let head = head.to_lowercase();
    let args = &parts[1..];

    let parsed = match head.as_str() {
        "q" | "quit" | "exit" => return ParseResult::Quit,
        "help" | "?" => Ok(ShellCommand::Help),
        "status" => Ok(ShellCommand::Status),
        "wait" => Ok(ShellCommand::Wait),
        "logout" => Ok(ShellCommand::Logout),
        "register" => Ok(register(args)),
        "add" => adjust(AdjustMode::Add, args),
        "remove" => adjust(AdjustMode::Remove, args),
        "set" => adjust(AdjustMode::Set, args),
        "roulette" => match (args.first(), args.get(1)) {
            (Some(bet), Some(number)) => parse_int(bet, "bet").and_then(|bet| {
                Ok(ShellCommand::Roulette {
                    bet,
                    number: parse_int(number, "number")?,
                })
            }),
            _ => Err("Roulette needs a bet and a number (e.g. 'roulette 10 17')".to_string()),
        },
        "dice" => single_bet(args, "dice").map(|bet| ShellCommand::Dice { bet }),
        "slots" => single_bet(args, "slots").map(|bet| ShellCommand::Slots { bet }),
        "history" => match args.first() {
            None => Ok(ShellCommand::History { last: None }),
            Some(k) => k
                .parse::<usize>()
                .map(|k| ShellCommand::History { last: Some(k) })
                .map_err(|_| format!("Invalid count '{}'", k)),
        },
        other => Err(format!(
            "Unrecognized command '{}'. Type 'help' for the list.",
            other
        )),
    };

    match parsed {
        Ok(cmd) => ParseResult::Command(cmd),
        Err(msg) => ParseResult::Invalid(msg),
    }
}

/// The name may span several words; a trailing number is the balance.
fn register(args: &[&str]) -> ShellCommand {
    let (name, balance) = match args.split_last() {
        Some((last, rest)) if !rest.is_empty() && looks_numeric(last) => {
            (rest.join(" "), last.to_string())
        }
        _ => (args.join(" "), String::new()),
    };
    ShellCommand::Register { name, balance }
}

fn looks_numeric(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+')
}

fn adjust(mode: AdjustMode, args: &[&str]) -> Result<ShellCommand, String> {
    let Some(raw) = args.first() else {
        return Err("An amount is required (e.g. 'add 100')".to_string());
    };
    Ok(ShellCommand::Adjust {
        mode,
        amount: parse_int(raw, "amount")?,
    })
}

fn single_bet(args: &[&str], game: &str) -> Result<i64, String> {
    match args.first() {
        Some(raw) => parse_int(raw, "bet"),
        None => Err(format!("A bet is required (e.g. '{} 5')", game)),
    }
}

fn parse_int(raw: &str, what: &str) -> Result<i64, String> {
    raw.parse::<i64>()
        .map_err(|_| format!("Invalid {} '{}'", what, raw))
}
