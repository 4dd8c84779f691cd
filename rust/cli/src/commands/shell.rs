//! Line-oriented interactive mode.
//!
//! One action per line. A bet starts its round and returns to the prompt,
//! so several rounds can run against the same balance. In realtime mode
//! the timers that came due are fired before each line is handled; `wait`
//! plays everything in flight to the end. EOF or `quit` finishes the
//! rounds still running and ends the session normally.

use std::io::{BufRead, ErrorKind, Write};
use tracing::debug;

use crate::commands::games::{Play, start_round};
use crate::commands::history::handle_history_command;
use crate::commands::profile::{
    handle_balance_command, handle_logout_command, handle_register_command, handle_status_command,
};
use crate::error::CliError;
use crate::io_utils::read_input_line;
use crate::runtime::Runtime;
use crate::terminal::TerminalPresenter;
use crate::ui;
use crate::validation::{ParseResult, SHELL_HELP, ShellCommand, parse_shell_command};

pub fn handle_shell_command(
    rt: &mut Runtime,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut screen = TerminalPresenter::new(out, rt.settings.realtime);
    screen.note("Nike casino. Type 'help' for commands.");
    rt.session.refresh(&mut screen);

    loop {
        let line = match read_input_line(stdin) {
            Ok(Some(l)) => l,
            Ok(None) => break,
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                return Err(CliError::Interrupted("shell input".to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        rt.catch_up(&mut screen);
        match parse_shell_command(&line) {
            ParseResult::Empty => continue,
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Command(cmd) => execute(rt, cmd, &mut screen, err)?,
        }
    }

    if !rt.table.is_idle() {
        rt.drive(&mut screen);
    }
    screen.note("Bye.");
    Ok(())
}

fn execute(
    rt: &mut Runtime,
    cmd: ShellCommand,
    screen: &mut TerminalPresenter<'_>,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        ShellCommand::Register { name, balance } => {
            handle_register_command(rt, &name, Some(&balance), screen)
        }
        ShellCommand::Logout => handle_logout_command(rt, screen),
        ShellCommand::Status => {
            screen.reset();
            handle_status_command(rt, screen)
        }
        ShellCommand::Adjust { mode, amount } => {
            match handle_balance_command(rt, mode, amount, screen) {
                Ok(_) => Ok(()),
                Err(CliError::Engine(e)) => Ok(ui::write_error(err, &e.to_string())?),
                Err(e) => Err(e),
            }
        }
        ShellCommand::Roulette { bet, number } => {
            start_in_background(rt, Play::Roulette { bet, number }, screen);
            Ok(())
        }
        ShellCommand::Dice { bet } => {
            start_in_background(rt, Play::Dice { bet }, screen);
            Ok(())
        }
        ShellCommand::Slots { bet } => {
            start_in_background(rt, Play::Slots { bet }, screen);
            Ok(())
        }
        ShellCommand::Wait => {
            let done = rt.drive(screen);
            debug!(resolved = done.len(), "shell wait finished");
            Ok(())
        }
        ShellCommand::History { last } => {
            let path = rt.settings.round_log_path();
            handle_history_command(&path, last, screen.writer(), err)
        }
        ShellCommand::Help => {
            screen.note(SHELL_HELP);
            Ok(())
        }
    }
}

fn start_in_background(rt: &mut Runtime, play: Play, screen: &mut TerminalPresenter<'_>) {
    match start_round(rt, play, screen) {
        Ok(id) => debug!(round = %id, in_flight = rt.table.in_flight(), "round started"),
        // the presenter has already shown why
        Err(e) => debug!(error = %e, "bet rejected"),
    }
}
