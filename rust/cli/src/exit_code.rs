//! Process exit codes returned by [`crate::run`].

/// Command completed, including rounds the player lost.
pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, a rejected bet, or an I/O failure.
pub const ERROR: i32 = 2;

/// Input was interrupted.
pub const INTERRUPTED: i32 = 130;
