//! Roulette, dice and slots.

use nike_engine::errors::GameError;
use nike_engine::presenter::Presenter;
use nike_engine::round::{RoundId, RoundOutcome};

use crate::error::CliError;
use crate::runtime::Runtime;

/// A bet as typed by the player, before the engine has checked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Play {
    Roulette { bet: i64, number: i64 },
    Dice { bet: i64 },
    Slots { bet: i64 },
}

impl Play {
    fn start(self, rt: &mut Runtime, ui: &mut dyn Presenter) -> Result<RoundId, GameError> {
        match self {
            Play::Roulette { bet, number } => {
                rt.table.play_roulette(&mut rt.session, ui, bet, number)
            }
            Play::Dice { bet } => rt.table.play_dice(&mut rt.session, ui, bet),
            Play::Slots { bet } => rt.table.play_slots(&mut rt.session, ui, bet),
        }
    }
}

/// Places the bet and leaves the round running on the table clock.
pub fn start_round(
    rt: &mut Runtime,
    play: Play,
    ui: &mut dyn Presenter,
) -> Result<RoundId, GameError> {
    play.start(rt, ui)
}

/// Places the bet and plays the round out.
///
/// A rejected bet has already been shown through `ui`; it is still
/// returned so one-shot mode can exit with an error code.
pub fn play_round(
    rt: &mut Runtime,
    play: Play,
    ui: &mut dyn Presenter,
) -> Result<Vec<RoundOutcome>, GameError> {
    start_round(rt, play, ui)?;
    Ok(rt.drive(ui))
}

pub fn handle_game_command(
    rt: &mut Runtime,
    play: Play,
    ui: &mut dyn Presenter,
) -> Result<(), CliError> {
    play_round(rt, play, ui)?;
    Ok(())
}
