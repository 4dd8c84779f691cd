//! Command-line definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nike",
    version,
    about = "Nike casino: roulette, dice and slots for dracmas"
)]
pub struct NikeCli {
    /// Directory holding the player record and round log
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// Seed for reproducible draws
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Resolve rounds immediately instead of playing the animation out
    #[arg(long, global = true)]
    pub instant: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a player, replacing the current one
    Register {
        #[arg(long, default_value = "")]
        name: String,
        /// Starting dracmas; anything that is not a whole number reads as 0
        #[arg(long, allow_hyphen_values = true)]
        balance: Option<String>,
    },
    /// Forget the current player and erase the saved record
    Logout,
    /// Show the player, balance and prize progress
    Status,
    /// Adjust the balance by hand
    Balance {
        #[command(subcommand)]
        action: BalanceAction,
    },
    /// Bet on a single roulette number (pays 35 to 1)
    Roulette {
        #[arg(long, allow_negative_numbers = true)]
        bet: i64,
        #[arg(long, allow_negative_numbers = true)]
        number: i64,
    },
    /// Roll two dice; 7 or 11 doubles the bet
    Dice {
        #[arg(long, allow_negative_numbers = true)]
        bet: i64,
    },
    /// Spin three reels
    Slots {
        #[arg(long, allow_negative_numbers = true)]
        bet: i64,
    },
    /// Summarize the round log
    History {
        /// Only the most recent K rounds
        #[arg(long)]
        last: Option<usize>,
    },
    /// Print the resolved configuration
    Cfg,
    /// Read actions from stdin, one per line
    Shell,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum BalanceAction {
    Add {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    Remove {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    Set {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

impl BalanceAction {
    pub fn split(self) -> (nike_engine::session::AdjustMode, i64) {
        use nike_engine::session::AdjustMode;
        match self {
            BalanceAction::Add { amount } => (AdjustMode::Add, amount),
            BalanceAction::Remove { amount } => (AdjustMode::Remove, amount),
            BalanceAction::Set { amount } => (AdjustMode::Set, amount),
        }
    }
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Register { .. } => "register",
            Commands::Logout => "logout",
            Commands::Status => "status",
            Commands::Balance { .. } => "balance",
            Commands::Roulette { .. } => "roulette",
            Commands::Dice { .. } => "dice",
            Commands::Slots { .. } => "slots",
            Commands::History { .. } => "history",
            Commands::Cfg => "cfg",
            Commands::Shell => "shell",
        }
    }
}
