//! Two dice, pays on a natural (7 or 11).

use crate::presenter::{Animation, Cue};
use crate::rng::RandomSource;
use crate::round::{Draw, Faces, Game, Resolution, Round, RoundContext, Step, Tier};

pub const PAYOUT_MULTIPLIER: u64 = 2;
pub const TICK_MS: u64 = 70;
pub const TICKS: u32 = 10;
/// Pause on the final faces before paying out.
pub const SETTLE_MS: u64 = 2_000;

pub fn roll_die(rng: &mut dyn RandomSource) -> u8 {
    rng.below(6) as u8 + 1
}

pub fn is_natural(sum: u8) -> bool {
    sum == 7 || sum == 11
}

pub fn resolve(bet: u64, d1: u8, d2: u8) -> Resolution {
    let (tier, payout) = if is_natural(d1 + d2) {
        (Tier::Win, bet.saturating_mul(PAYOUT_MULTIPLIER))
    } else {
        (Tier::Loss, 0)
    };
    Resolution {
        draw: Draw::Dice(d1, d2),
        tier,
        payout,
    }
}

#[derive(Debug, Clone)]
pub struct DiceRound {
    bet: u64,
    ticks_left: u32,
    rolled: Option<(u8, u8)>,
}

impl DiceRound {
    pub fn new(bet: u64) -> Self {
        Self {
            bet,
            ticks_left: TICKS,
            rolled: None,
        }
    }
}

impl Round for DiceRound {
    fn game(&self) -> Game {
        Game::Dice
    }

    fn bet(&self) -> u64 {
        self.bet
    }

    fn animation(&self) -> Animation {
        Animation::DiceShake
    }

    fn cue(&self) -> Cue {
        Cue::Dice
    }

    fn first_delay(&self) -> u64 {
        TICK_MS
    }

    fn on_timer(&mut self, ctx: &mut RoundContext<'_>) -> Step {
        if let Some((d1, d2)) = self.rolled {
            return Step::Resolve(resolve(self.bet, d1, d2));
        }

        let shaking = Faces::Dice(roll_die(ctx.noise), roll_die(ctx.noise));
        ctx.ui.show_faces(&shaking);
        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left > 0 {
            return Step::Wait(TICK_MS);
        }

        let d1 = roll_die(ctx.outcome);
        let d2 = roll_die(ctx.outcome);
        ctx.ui.show_faces(&Faces::Dice(d1, d2));
        self.rolled = Some((d1, d2));
        Step::Wait(SETTLE_MS)
    }

    fn describe(&self, res: &Resolution) -> String {
        let (d1, d2) = match res.draw {
            Draw::Dice(a, b) => (a, b),
            _ => (0, 0),
        };
        let sum = d1 + d2;
        match res.tier {
            Tier::Loss => format!("Rolled {} + {} = {}. You lost {}.", d1, d2, sum, self.bet),
            _ => format!(
                "Rolled {} + {} = {}. Victory! +{}.",
                d1, d2, sum, res.payout
            ),
        }
    }
}
