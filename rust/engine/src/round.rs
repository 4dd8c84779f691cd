use std::fmt;

use serde::{Deserialize, Serialize};

use crate::presenter::{Animation, Cue, Presenter, Tone};
use crate::rng::RandomSource;
use crate::slots::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Roulette,
    Dice,
    Slots,
}

impl Game {
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Roulette => "roulette",
            Game::Dice => "dice",
            Game::Slots => "slots",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of one round: `Idle -> Debited -> Animating -> Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    /// Accepted nothing yet; the bet is still being validated.
    Idle,
    /// The bet has left the balance.
    Debited,
    /// Timers are running.
    Animating,
    /// Payout credited and reported. Terminal.
    Resolved,
}

impl RoundPhase {
    pub fn next(self) -> Option<Self> {
        match self {
            RoundPhase::Idle => Some(RoundPhase::Debited),
            RoundPhase::Debited => Some(RoundPhase::Animating),
            RoundPhase::Animating => Some(RoundPhase::Resolved),
            RoundPhase::Resolved => None,
        }
    }
}

/// What the dice or reels currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faces {
    Dice(u8, u8),
    Reels([Symbol; 3]),
}

/// The final draw of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Draw {
    Roulette(u8),
    Dice(u8, u8),
    Slots([Symbol; 3]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Loss,
    Win,
    /// Slots only: two or more sevens without a full match.
    Partial,
    Jackpot,
}

impl Tier {
    pub fn tone(&self) -> Tone {
        match self {
            Tier::Loss => Tone::Loss,
            _ => Tone::Win,
        }
    }
}

/// Pure result of applying a game's payout rule to a final draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub draw: Draw,
    pub tier: Tier,
    pub payout: u64,
}

/// A resolved round as reported to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub id: RoundId,
    pub game: Game,
    pub bet: u64,
    pub draw: Draw,
    pub tier: Tier,
    pub payout: u64,
    pub message: String,
    pub tone: Tone,
    /// Balance right after the payout, `None` if the player logged out
    /// while the round was in flight.
    pub balance_after: Option<u64>,
}

/// Collaborators a round may touch while a timer fires.
pub struct RoundContext<'a> {
    /// Source of final draws.
    pub outcome: &'a mut dyn RandomSource,
    /// Source of cosmetic tick faces.
    pub noise: &'a mut dyn RandomSource,
    pub ui: &'a mut dyn Presenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Fire again after this many milliseconds.
    Wait(u64),
    Resolve(Resolution),
}

/// A game's timed sequence, from first timer to resolution.
///
/// The table owns debit, credit, phase bookkeeping and cues; a round only
/// knows its own delays, what to show on each tick and how to pay out.
pub trait Round: fmt::Debug {
    fn game(&self) -> Game;
    fn bet(&self) -> u64;
    fn animation(&self) -> Animation;
    fn cue(&self) -> Cue;
    /// Delay before the first timer fires.
    fn first_delay(&self) -> u64;
    fn on_timer(&mut self, ctx: &mut RoundContext<'_>) -> Step;
    fn describe(&self, resolution: &Resolution) -> String;
}
