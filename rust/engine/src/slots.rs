//! Three-reel slot machine with a four-symbol alphabet.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::presenter::{Animation, Cue};
use crate::rng::RandomSource;
use crate::round::{Draw, Faces, Game, Resolution, Round, RoundContext, Step, Tier};

pub const JACKPOT_MULTIPLIER: u64 = 10;
pub const SEVENS_MULTIPLIER: u64 = 3;
pub const TICK_MS: u64 = 90;
pub const TICKS: u32 = 19;
pub const SETTLE_MS: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Cherry,
    Bell,
    Diamond,
    Seven,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol::Cherry, Symbol::Bell, Symbol::Diamond, Symbol::Seven];

    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Cherry => "🍒",
            Symbol::Bell => "🔔",
            Symbol::Diamond => "💎",
            Symbol::Seven => "7",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

pub fn spin_reel(rng: &mut dyn RandomSource) -> Symbol {
    Symbol::ALL[rng.below(Symbol::ALL.len() as u32) as usize]
}

pub fn spin_reels(rng: &mut dyn RandomSource) -> [Symbol; 3] {
    [spin_reel(rng), spin_reel(rng), spin_reel(rng)]
}

/// Tiers in priority order: three of a kind, then two or more sevens.
/// Three sevens is therefore a jackpot.
pub fn resolve(bet: u64, reels: [Symbol; 3]) -> Resolution {
    let all_equal = reels[0] == reels[1] && reels[1] == reels[2];
    let sevens = reels.iter().filter(|s| **s == Symbol::Seven).count();
    let (tier, payout) = if all_equal {
        (Tier::Jackpot, bet.saturating_mul(JACKPOT_MULTIPLIER))
    } else if sevens >= 2 {
        (Tier::Partial, bet.saturating_mul(SEVENS_MULTIPLIER))
    } else {
        (Tier::Loss, 0)
    };
    Resolution {
        draw: Draw::Slots(reels),
        tier,
        payout,
    }
}

#[derive(Debug, Clone)]
pub struct SlotsRound {
    bet: u64,
    ticks_left: u32,
    stopped: Option<[Symbol; 3]>,
}

impl SlotsRound {
    pub fn new(bet: u64) -> Self {
        Self {
            bet,
            ticks_left: TICKS,
            stopped: None,
        }
    }
}

impl Round for SlotsRound {
    fn game(&self) -> Game {
        Game::Slots
    }

    fn bet(&self) -> u64 {
        self.bet
    }

    fn animation(&self) -> Animation {
        Animation::SlotsShake
    }

    fn cue(&self) -> Cue {
        Cue::Reels
    }

    fn first_delay(&self) -> u64 {
        TICK_MS
    }

    fn on_timer(&mut self, ctx: &mut RoundContext<'_>) -> Step {
        if let Some(reels) = self.stopped {
            return Step::Resolve(resolve(self.bet, reels));
        }

        ctx.ui.show_faces(&Faces::Reels(spin_reels(ctx.noise)));
        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left > 0 {
            return Step::Wait(TICK_MS);
        }

        let reels = spin_reels(ctx.outcome);
        ctx.ui.show_faces(&Faces::Reels(reels));
        self.stopped = Some(reels);
        Step::Wait(SETTLE_MS)
    }

    fn describe(&self, res: &Resolution) -> String {
        let line = match res.draw {
            Draw::Slots([a, b, c]) => format!("{} | {} | {}", a, b, c),
            _ => String::new(),
        };
        match res.tier {
            Tier::Jackpot => format!("{} - JACKPOT! +{}", line, res.payout),
            Tier::Loss => format!("{} - Nothing this time. -{}", line, self.bet),
            _ => format!("{} - +{}", line, res.payout),
        }
    }
}
