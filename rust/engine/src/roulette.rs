//! Single-number roulette on a 37-pocket wheel (0-36).

use crate::errors::GameError;
use crate::presenter::{Animation, Cue};
use crate::rng::RandomSource;
use crate::round::{Draw, Game, Resolution, Round, RoundContext, Step, Tier};

pub const POCKETS: u32 = 37;
pub const MAX_NUMBER: i64 = 36;
pub const PAYOUT_MULTIPLIER: u64 = 35;
/// Wheel spin time before the ball settles.
pub const SPIN_DELAY_MS: u64 = 2_500;

pub fn validate_number(number: i64) -> Result<u8, GameError> {
    if (0..=MAX_NUMBER).contains(&number) {
        Ok(number as u8)
    } else {
        Err(GameError::InvalidNumber { number })
    }
}

pub fn spin(rng: &mut dyn RandomSource) -> u8 {
    rng.below(POCKETS) as u8
}

/// Payout rule: `bet * 35` when the ball lands on the chosen number.
pub fn resolve(bet: u64, chosen: u8, landed: u8) -> Resolution {
    let (tier, payout) = if landed == chosen {
        (Tier::Win, bet.saturating_mul(PAYOUT_MULTIPLIER))
    } else {
        (Tier::Loss, 0)
    };
    Resolution {
        draw: Draw::Roulette(landed),
        tier,
        payout,
    }
}

#[derive(Debug, Clone)]
pub struct RouletteRound {
    bet: u64,
    chosen: u8,
}

impl RouletteRound {
    pub fn new(bet: u64, chosen: u8) -> Self {
        Self { bet, chosen }
    }

    pub fn chosen(&self) -> u8 {
        self.chosen
    }
}

impl Round for RouletteRound {
    fn game(&self) -> Game {
        Game::Roulette
    }

    fn bet(&self) -> u64 {
        self.bet
    }

    fn animation(&self) -> Animation {
        Animation::WheelSpin
    }

    fn cue(&self) -> Cue {
        Cue::Wheel
    }

    fn first_delay(&self) -> u64 {
        SPIN_DELAY_MS
    }

    fn on_timer(&mut self, ctx: &mut RoundContext<'_>) -> Step {
        // the ball is drawn when the wheel stops, not when the bet is placed
        let landed = spin(ctx.outcome);
        Step::Resolve(resolve(self.bet, self.chosen, landed))
    }

    fn describe(&self, res: &Resolution) -> String {
        let landed = match res.draw {
            Draw::Roulette(n) => n,
            _ => 0,
        };
        match res.tier {
            Tier::Loss => format!("Landed on {}. You lost {}.", landed, self.bet),
            _ => format!("Landed on {}! Victory! +{} dracmas.", landed, res.payout),
        }
    }
}
