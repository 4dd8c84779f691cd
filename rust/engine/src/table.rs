use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::dice::DiceRound;
use crate::errors::GameError;
use crate::logger::RoundLogger;
use crate::presenter::{Cue, CuePlayer, Presenter, SilentCues, Tone};
use crate::rng::{ChaChaSource, RandomSource};
use crate::roulette::{self, RouletteRound};
use crate::round::{
    Game, Resolution, Round, RoundContext, RoundId, RoundOutcome, RoundPhase, Step, Tier,
};
use crate::session::Session;
use crate::slots::SlotsRound;
use crate::timer::TimerQueue;

#[derive(Debug)]
struct ActiveRound {
    phase: RoundPhase,
    round: Box<dyn Round>,
}

/// Runs rounds of every game against a [`Session`] passed in by the caller.
///
/// Starting a round debits the bet at once and queues its first timer.
/// Nothing else happens until the driver advances the clock with
/// [`Table::advance_to`], [`Table::advance_by`] or [`Table::run_until_idle`],
/// which fire due timers in order and return the rounds that resolved.
///
/// Several rounds may be in flight against the same balance unless
/// exclusive mode is on.
///
/// # Examples
///
/// ```
/// use nike_engine::presenter::{RecordingPresenter, SilentCues};
/// use nike_engine::prize::default_prizes;
/// use nike_engine::rng::ScriptedSource;
/// use nike_engine::session::Session;
/// use nike_engine::store::MemoryStore;
/// use nike_engine::table::Table;
///
/// let mut ui = RecordingPresenter::new();
/// let mut session = Session::open(Box::new(MemoryStore::new()), default_prizes());
/// session.register("Ana", 100, &mut ui);
///
/// let mut table = Table::new(
///     Box::new(ScriptedSource::new([17])),
///     Box::new(ScriptedSource::new([0])),
///     Box::new(SilentCues),
/// );
/// table.play_roulette(&mut session, &mut ui, 10, 17).unwrap();
/// assert_eq!(session.player().unwrap().balance(), 90);
///
/// let outcomes = table.run_until_idle(&mut session, &mut ui);
/// assert_eq!(outcomes[0].payout, 350);
/// assert_eq!(session.player().unwrap().balance(), 440);
/// ```
#[derive(Debug)]
pub struct Table {
    outcome: Box<dyn RandomSource>,
    noise: Box<dyn RandomSource>,
    cues: Box<dyn CuePlayer>,
    timers: TimerQueue,
    rounds: BTreeMap<RoundId, ActiveRound>,
    issued: u64,
    exclusive: bool,
    log: Option<RoundLogger>,
}

impl Table {
    pub fn new(
        outcome: Box<dyn RandomSource>,
        noise: Box<dyn RandomSource>,
        cues: Box<dyn CuePlayer>,
    ) -> Self {
        Self {
            outcome,
            noise,
            cues,
            timers: TimerQueue::new(),
            rounds: BTreeMap::new(),
            issued: 0,
            exclusive: false,
            log: None,
        }
    }

    /// ChaCha-backed table. Outcomes replay for the same seed; tick noise
    /// uses a derived seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            Box::new(ChaChaSource::new_with_seed(seed)),
            Box::new(ChaChaSource::new_with_seed(seed.wrapping_add(1))),
            Box::new(SilentCues),
        )
    }

    pub fn with_cues(mut self, cues: Box<dyn CuePlayer>) -> Self {
        self.cues = cues;
        self
    }

    /// Reject new rounds while another one is in flight.
    pub fn with_exclusive_rounds(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    pub fn with_round_log(mut self, log: RoundLogger) -> Self {
        self.log = Some(log);
        self
    }

    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.timers.next_due()
    }

    pub fn in_flight(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_idle(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Phase of a round this table started; `None` for ids it never issued.
    pub fn phase(&self, id: RoundId) -> Option<RoundPhase> {
        match self.rounds.get(&id) {
            Some(active) => Some(active.phase),
            None if id.0 >= 1 && id.0 <= self.issued => Some(RoundPhase::Resolved),
            None => None,
        }
    }

    pub fn play_roulette(
        &mut self,
        session: &mut Session,
        ui: &mut dyn Presenter,
        bet: i64,
        number: i64,
    ) -> Result<RoundId, GameError> {
        let checked = self
            .check_bet(session, bet)
            .and_then(|bet| Ok((bet, roulette::validate_number(number)?)));
        match checked {
            Ok((bet, chosen)) => Ok(self.start(
                session,
                ui,
                Box::new(RouletteRound::new(bet, chosen)),
            )),
            Err(e) => Err(reject(Game::Roulette, ui, e)),
        }
    }

    pub fn play_dice(
        &mut self,
        session: &mut Session,
        ui: &mut dyn Presenter,
        bet: i64,
    ) -> Result<RoundId, GameError> {
        match self.check_bet(session, bet) {
            Ok(bet) => Ok(self.start(session, ui, Box::new(DiceRound::new(bet)))),
            Err(e) => Err(reject(Game::Dice, ui, e)),
        }
    }

    pub fn play_slots(
        &mut self,
        session: &mut Session,
        ui: &mut dyn Presenter,
        bet: i64,
    ) -> Result<RoundId, GameError> {
        match self.check_bet(session, bet) {
            Ok(bet) => Ok(self.start(session, ui, Box::new(SlotsRound::new(bet)))),
            Err(e) => Err(reject(Game::Slots, ui, e)),
        }
    }

    /// Fires every timer due at or before `t` and returns the rounds that
    /// resolved, in resolution order.
    pub fn advance_to(
        &mut self,
        t: u64,
        session: &mut Session,
        ui: &mut dyn Presenter,
    ) -> Vec<RoundOutcome> {
        let mut resolved = Vec::new();
        while let Some(id) = self.timers.pop_due(t) {
            if let Some(outcome) = self.fire(id, session, ui) {
                resolved.push(outcome);
            }
        }
        self.timers.settle_at(t);
        resolved
    }

    pub fn advance_by(
        &mut self,
        dt: u64,
        session: &mut Session,
        ui: &mut dyn Presenter,
    ) -> Vec<RoundOutcome> {
        let t = self.now().saturating_add(dt);
        self.advance_to(t, session, ui)
    }

    /// Runs the clock until no round is left in flight.
    pub fn run_until_idle(
        &mut self,
        session: &mut Session,
        ui: &mut dyn Presenter,
    ) -> Vec<RoundOutcome> {
        let mut resolved = Vec::new();
        while let Some(due) = self.timers.next_due() {
            resolved.extend(self.advance_to(due, session, ui));
        }
        resolved
    }

    fn check_bet(&self, session: &Session, bet: i64) -> Result<u64, GameError> {
        if session.player().is_none() {
            return Err(GameError::NoPlayer);
        }
        if self.exclusive && !self.rounds.is_empty() {
            return Err(GameError::RoundInFlight);
        }
        if !session.can_afford(bet) {
            return Err(GameError::InvalidBet { amount: bet });
        }
        Ok(bet as u64)
    }

    fn start(
        &mut self,
        session: &mut Session,
        ui: &mut dyn Presenter,
        round: Box<dyn Round>,
    ) -> RoundId {
        self.issued += 1;
        let id = RoundId(self.issued);
        let game = round.game();
        let mut active = ActiveRound {
            phase: RoundPhase::Idle,
            round,
        };

        session.debit(active.round.bet(), ui);
        transition(id, &mut active);

        ui.animate(active.round.animation());
        self.cues.play(active.round.cue());
        ui.message(game, in_progress_text(game), Tone::Neutral);
        transition(id, &mut active);

        let due = self.timers.schedule(active.round.first_delay(), id);
        debug!(round = %id, %game, bet = active.round.bet(), due, "round started");
        self.rounds.insert(id, active);
        id
    }

    fn fire(
        &mut self,
        id: RoundId,
        session: &mut Session,
        ui: &mut dyn Presenter,
    ) -> Option<RoundOutcome> {
        let active = self.rounds.get_mut(&id)?;
        let step = {
            let mut ctx = RoundContext {
                outcome: self.outcome.as_mut(),
                noise: self.noise.as_mut(),
                ui: &mut *ui,
            };
            active.round.on_timer(&mut ctx)
        };
        match step {
            Step::Wait(delay) => {
                self.timers.schedule(delay, id);
                None
            }
            Step::Resolve(resolution) => {
                let active = self.rounds.remove(&id)?;
                Some(self.settle(id, active, resolution, session, ui))
            }
        }
    }

    fn settle(
        &mut self,
        id: RoundId,
        mut active: ActiveRound,
        res: Resolution,
        session: &mut Session,
        ui: &mut dyn Presenter,
    ) -> RoundOutcome {
        let game = active.round.game();
        if !session.credit(res.payout, ui) {
            warn!(round = %id, payout = res.payout, "no player at resolution; payout dropped");
        }

        let message = active.round.describe(&res);
        let tone = res.tier.tone();
        ui.message(game, &message, tone);
        if matches!(res.tier, Tier::Win | Tier::Jackpot) {
            self.cues.play(Cue::Jackpot);
        }
        transition(id, &mut active);

        let outcome = RoundOutcome {
            id,
            game,
            bet: active.round.bet(),
            draw: res.draw,
            tier: res.tier,
            payout: res.payout,
            message,
            tone,
            balance_after: session.player().map(|p| p.balance()),
        };
        info!(
            round = %id,
            %game,
            bet = outcome.bet,
            tier = ?outcome.tier,
            payout = outcome.payout,
            "round resolved"
        );

        if let Some(log) = &mut self.log {
            if let Err(e) = log.record(&outcome) {
                warn!(round = %id, error = %e, "failed to append round log");
            }
        }
        outcome
    }
}

fn transition(id: RoundId, active: &mut ActiveRound) {
    if let Some(next) = active.phase.next() {
        debug!(round = %id, from = ?active.phase, to = ?next, "round phase");
        active.phase = next;
    }
}

fn reject(game: Game, ui: &mut dyn Presenter, err: GameError) -> GameError {
    debug!(%game, error = %err, "bet rejected");
    ui.message(game, &err.to_string(), Tone::Loss);
    err
}

fn in_progress_text(game: Game) -> &'static str {
    match game {
        Game::Roulette => "The wheel is spinning...",
        Game::Dice => "Rolling...",
        Game::Slots => "Spinning...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::RecordingPresenter;
    use crate::prize::default_prizes;
    use crate::rng::ScriptedSource;
    use crate::store::MemoryStore;

    fn setup(balance: u64) -> (Table, Session, RecordingPresenter) {
        let mut ui = RecordingPresenter::new();
        let mut session = Session::open(Box::new(MemoryStore::new()), default_prizes());
        session.register("Ana", balance, &mut ui);
        ui.clear();
        let table = Table::new(
            Box::new(ScriptedSource::new([0])),
            Box::new(ScriptedSource::new([0])),
            Box::new(SilentCues),
        );
        (table, session, ui)
    }

    #[test]
    fn phase_moves_to_animating_on_start_and_resolved_after() {
        let (mut table, mut session, mut ui) = setup(100);
        let id = table.play_roulette(&mut session, &mut ui, 10, 3).unwrap();
        assert_eq!(table.phase(id), Some(RoundPhase::Animating));
        table.run_until_idle(&mut session, &mut ui);
        assert_eq!(table.phase(id), Some(RoundPhase::Resolved));
        assert_eq!(table.phase(RoundId(99)), None);
    }

    #[test]
    fn rejected_bets_do_not_issue_ids_or_touch_the_balance() {
        let (mut table, mut session, mut ui) = setup(100);
        assert_eq!(
            table.play_dice(&mut session, &mut ui, 0),
            Err(GameError::InvalidBet { amount: 0 })
        );
        assert_eq!(
            table.play_roulette(&mut session, &mut ui, 10, 37),
            Err(GameError::InvalidNumber { number: 37 })
        );
        assert_eq!(table.in_flight(), 0);
        assert_eq!(table.phase(RoundId(1)), None);
        assert_eq!(session.player().unwrap().balance(), 100);
        assert_eq!(ui.last_message().unwrap().2, Tone::Loss);
    }

    #[test]
    fn exclusive_mode_rejects_a_second_round() {
        let (table, mut session, mut ui) = setup(100);
        let mut table = table.with_exclusive_rounds(true);
        table.play_dice(&mut session, &mut ui, 5).unwrap();
        assert_eq!(
            table.play_slots(&mut session, &mut ui, 5),
            Err(GameError::RoundInFlight)
        );
        assert_eq!(session.player().unwrap().balance(), 95);
    }

    #[test]
    fn advance_by_fires_only_due_timers() {
        let (mut table, mut session, mut ui) = setup(100);
        table.play_roulette(&mut session, &mut ui, 10, 3).unwrap();
        assert!(table.advance_by(2_499, &mut session, &mut ui).is_empty());
        assert_eq!(table.in_flight(), 1);
        let done = table.advance_by(1, &mut session, &mut ui);
        assert_eq!(done.len(), 1);
        assert_eq!(table.now(), 2_500);
    }
}
