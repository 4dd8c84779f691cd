//! # Nike CLI Library
//!
//! Command-line front end for the Nike casino: register a player, bet
//! dracmas on roulette, dice and slots, and review the round log.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, opens the session stored in the data
//! directory and executes one subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["nike", "--instant", "dice", "--bet", "5"];
//! let code = nike_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert!(code == 0 || code == 2);
//! ```
//!
//! ## Available Subcommands
//!
//! - `register`: Create a player (replaces the current one)
//! - `logout`: Forget the player and erase the saved record
//! - `status`: Show balance and prize progress
//! - `balance add|remove|set`: Edit the balance by hand
//! - `roulette`, `dice`, `slots`: Play one round
//! - `history`: Summarize the round log
//! - `cfg`: Display current configuration settings
//! - `shell`: Interactive mode reading one action per line

use clap::Parser;
use std::io::Write;
use tracing::debug;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod runtime;
pub mod terminal;
pub mod ui;
pub mod validation;

use cli::{Commands, NikeCli};
use commands::{
    Play, handle_balance_command, handle_cfg_command, handle_game_command,
    handle_history_command, handle_logout_command, handle_register_command, handle_shell_command,
    handle_status_command,
};
use runtime::{Runtime, Settings};
use terminal::TerminalPresenter;

pub use error::CliError;

const COMMANDS: &[&str] = &[
    "register", "logout", "status", "balance", "roulette", "dice", "slots", "history", "cfg",
    "shell",
];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors (including rejected bets),
/// `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let dir = tempfile::tempdir().unwrap();
/// let data = dir.path().to_str().unwrap();
/// let mut out = Vec::new();
/// let code = nike_cli::run(
///     ["nike", "--data-dir", data, "register", "--name", "Ana", "--balance", "100"],
///     &mut out,
///     &mut io::stderr(),
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Ana: 100 dracmas"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match NikeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Nike Casino CLI");
                    write_or_exit!(err, "Usage: nike [--data-dir DIR] [--seed N] [--instant] <command>\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: nike --help");
                    exit_code::ERROR
                }
            };
        }
    };

    debug!(command = cli.cmd.name(), "dispatching");
    let NikeCli {
        data_dir,
        seed,
        instant,
        cmd,
    } = cli;

    if let Commands::Cfg = cmd {
        return finish(handle_cfg_command(out, err), err);
    }

    let config = match config::load_with_sources() {
        Ok(resolved) => resolved.config,
        Err(e) => {
            write_or_exit!(err, "Error: Invalid configuration: {}", e);
            return exit_code::ERROR;
        }
    };
    let mut rt = Runtime::open(Settings::resolve(config, data_dir, seed, instant));
    let result = dispatch(&mut rt, cmd, out, err);
    finish(result, err)
}

fn dispatch(
    rt: &mut Runtime,
    cmd: Commands,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let live = rt.settings.realtime;
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::History { last } => {
            handle_history_command(&rt.settings.round_log_path(), last, out, err)
        }
        Commands::Shell => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_shell_command(rt, &mut stdin_lock, out, err)
        }
        Commands::Register { name, balance } => {
            let mut screen = TerminalPresenter::new(out, live);
            handle_register_command(rt, &name, balance.as_deref(), &mut screen)
        }
        Commands::Logout => {
            let mut screen = TerminalPresenter::new(out, live);
            handle_logout_command(rt, &mut screen)
        }
        Commands::Status => {
            let mut screen = TerminalPresenter::new(out, live);
            handle_status_command(rt, &mut screen)
        }
        Commands::Balance { action } => {
            let (mode, amount) = action.split();
            let mut screen = TerminalPresenter::new(out, live);
            handle_balance_command(rt, mode, amount, &mut screen).map(|_| ())
        }
        Commands::Roulette { bet, number } => {
            let mut screen = TerminalPresenter::new(out, live);
            handle_game_command(rt, Play::Roulette { bet, number }, &mut screen)
        }
        Commands::Dice { bet } => {
            let mut screen = TerminalPresenter::new(out, live);
            handle_game_command(rt, Play::Dice { bet }, &mut screen)
        }
        Commands::Slots { bet } => {
            let mut screen = TerminalPresenter::new(out, live);
            handle_game_command(rt, Play::Slots { bet }, &mut screen)
        }
    }
}

fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = ui::write_error(err, &format!("Interrupted: {}", msg));
            exit_code::INTERRUPTED
        }
        // cfg has already reported its own failure
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
