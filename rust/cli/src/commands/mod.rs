//! Command handlers.
//!
//! Each handler takes the live [`crate::runtime::Runtime`] (or just the
//! streams it needs) and returns `Result<_, CliError>`; exit codes are
//! decided once, in [`crate::run`].

pub mod cfg;
pub mod games;
pub mod history;
pub mod profile;
pub mod shell;

pub use cfg::handle_cfg_command;
pub use games::{Play, handle_game_command, play_round, start_round};
pub use history::handle_history_command;
pub use profile::{
    handle_balance_command, handle_logout_command, handle_register_command, handle_status_command,
};
pub use shell::handle_shell_command;
