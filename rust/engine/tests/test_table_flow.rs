use nike_engine::dice;
use nike_engine::presenter::{
    Animation, Cue, PresenterCall, RecordingCues, RecordingPresenter, SilentCues, Tone,
};
use nike_engine::prize::default_prizes;
use nike_engine::rng::ScriptedSource;
use nike_engine::round::{Draw, Faces, Game, RoundPhase, Tier};
use nike_engine::session::Session;
use nike_engine::slots::{self, Symbol};
use nike_engine::store::MemoryStore;
use nike_engine::table::Table;

fn setup(balance: u64, outcome: &[u32]) -> (Table, Session, RecordingPresenter) {
    let mut ui = RecordingPresenter::new();
    let mut session = Session::open(Box::new(MemoryStore::new()), default_prizes());
    session.register("Ana", balance, &mut ui);
    ui.clear();
    let table = Table::new(
        Box::new(ScriptedSource::new(outcome.to_vec())),
        Box::new(ScriptedSource::new([0])),
        Box::new(SilentCues),
    );
    (table, session, ui)
}

#[test]
fn start_debits_then_animates_then_posts_progress() {
    let (mut table, mut session, mut ui) = setup(100, &[0]);
    table.play_roulette(&mut session, &mut ui, 10, 17).unwrap();
    assert_eq!(
        ui.calls,
        vec![
            PresenterCall::Status(Some(("Ana".into(), 90))),
            PresenterCall::Prizes(vec![90, 18, 4, 0]),
            PresenterCall::Animate(Animation::WheelSpin),
            PresenterCall::Message(
                Game::Roulette,
                "The wheel is spinning...".into(),
                Tone::Neutral
            ),
        ]
    );
}

#[test]
fn roulette_resolves_after_its_spin_delay() {
    let (mut table, mut session, mut ui) = setup(100, &[17]);
    table.play_roulette(&mut session, &mut ui, 10, 17).unwrap();
    assert!(table.advance_to(2_499, &mut session, &mut ui).is_empty());
    let done = table.advance_to(2_500, &mut session, &mut ui);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].balance_after, Some(440));
}

#[test]
fn dice_shows_ten_ticks_then_the_final_pair() {
    let (mut table, mut session, mut ui) = setup(50, &[2, 3]);
    table.play_dice(&mut session, &mut ui, 5).unwrap();

    let settle = dice::TICK_MS * dice::TICKS as u64 + dice::SETTLE_MS;
    assert!(table.advance_to(settle - 1, &mut session, &mut ui).is_empty());

    let faces = ui.faces();
    assert_eq!(faces.len(), 11);
    assert!(faces[..10].iter().all(|f| *f == Faces::Dice(1, 1)));
    assert_eq!(faces[10], Faces::Dice(3, 4));
    // the final pair is on screen before the balance moves
    assert_eq!(session.player().unwrap().balance(), 45);

    let done = table.advance_to(settle, &mut session, &mut ui);
    assert_eq!(done[0].draw, Draw::Dice(3, 4));
    assert_eq!(session.player().unwrap().balance(), 55);
    assert_eq!(
        ui.last_message(),
        Some((
            Game::Dice,
            "Rolled 3 + 4 = 7. Victory! +10.".to_string(),
            Tone::Win
        ))
    );
}

#[test]
fn slots_show_nineteen_ticks_then_the_stop() {
    let (mut table, mut session, mut ui) = setup(20, &[3, 3, 3]);
    table.play_slots(&mut session, &mut ui, 5).unwrap();

    let settle = slots::TICK_MS * slots::TICKS as u64 + slots::SETTLE_MS;
    assert_eq!(settle, 3_710);
    let done = table.run_until_idle(&mut session, &mut ui);
    assert_eq!(table.now(), settle);
    assert_eq!(done.len(), 1);

    let faces = ui.faces();
    assert_eq!(faces.len(), 20);
    assert_eq!(
        faces[19],
        Faces::Reels([Symbol::Seven, Symbol::Seven, Symbol::Seven])
    );
    assert_eq!(
        ui.last_message(),
        Some((Game::Slots, "7 | 7 | 7 - JACKPOT! +50".to_string(), Tone::Win))
    );
}

#[test]
fn concurrent_rounds_share_one_balance() {
    let (mut table, mut session, mut ui) = setup(100, &[0]);
    table.play_roulette(&mut session, &mut ui, 30, 36).unwrap();
    table.play_dice(&mut session, &mut ui, 30).unwrap();
    table.play_slots(&mut session, &mut ui, 30).unwrap();
    assert_eq!(table.in_flight(), 3);
    assert_eq!(session.player().unwrap().balance(), 10);

    // each check sees the balance left by the previous debit
    assert!(table.play_dice(&mut session, &mut ui, 11).is_err());

    let done = table.run_until_idle(&mut session, &mut ui);
    let games: Vec<Game> = done.iter().map(|o| o.game).collect();
    assert_eq!(games, vec![Game::Roulette, Game::Dice, Game::Slots]);
    assert!(table.is_idle());
}

#[test]
fn rounds_resolve_in_due_order_not_start_order() {
    let (mut table, mut session, mut ui) = setup(100, &[0]);
    let slow = table.play_slots(&mut session, &mut ui, 5).unwrap();
    table.advance_by(1_000, &mut session, &mut ui);
    let fast = table.play_roulette(&mut session, &mut ui, 5, 0).unwrap();

    let done = table.run_until_idle(&mut session, &mut ui);
    assert_eq!(done[0].id, fast);
    assert_eq!(done[1].id, slow);
}

#[test]
fn logout_mid_round_drops_the_payout() {
    let (mut table, mut session, mut ui) = setup(50, &[2, 3]);
    let id = table.play_dice(&mut session, &mut ui, 5).unwrap();
    session.logout(&mut ui);

    let done = table.run_until_idle(&mut session, &mut ui);
    assert_eq!(done[0].tier, Tier::Win);
    assert_eq!(done[0].balance_after, None);
    assert!(session.player().is_none());
    assert_eq!(table.phase(id), Some(RoundPhase::Resolved));
}

#[test]
fn a_new_player_collects_rounds_started_before_them() {
    let (mut table, mut session, mut ui) = setup(50, &[17]);
    table.play_roulette(&mut session, &mut ui, 10, 17).unwrap();
    session.register("Bo", 0, &mut ui);

    table.run_until_idle(&mut session, &mut ui);
    let p = session.player().unwrap();
    assert_eq!(p.name(), "Bo");
    assert_eq!(p.balance(), 350);
}

#[test]
fn cues_follow_the_round() {
    let cues = RecordingCues::new();
    let (table, mut session, mut ui) = setup(100, &[17]);
    let mut table = table.with_cues(Box::new(cues.clone()));

    table.play_roulette(&mut session, &mut ui, 10, 17).unwrap();
    table.run_until_idle(&mut session, &mut ui);
    assert_eq!(cues.played(), vec![Cue::Wheel, Cue::Jackpot]);

    table.play_roulette(&mut session, &mut ui, 10, 3).unwrap();
    table.run_until_idle(&mut session, &mut ui);
    assert_eq!(cues.played(), vec![Cue::Wheel, Cue::Jackpot, Cue::Wheel]);
}

#[test]
fn seeded_tables_replay_the_same_outcomes() {
    let play = || {
        let mut ui = RecordingPresenter::new();
        let mut session = Session::open(Box::new(MemoryStore::new()), default_prizes());
        session.register("Ana", 1_000, &mut ui);
        let mut table = Table::seeded(2024);
        for _ in 0..5 {
            table.play_roulette(&mut session, &mut ui, 1, 7).unwrap();
            table.play_dice(&mut session, &mut ui, 1).unwrap();
            table.play_slots(&mut session, &mut ui, 1).unwrap();
        }
        let draws: Vec<Draw> = table
            .run_until_idle(&mut session, &mut ui)
            .into_iter()
            .map(|o| o.draw)
            .collect();
        (draws, session.player().map(|p| p.balance()))
    };
    assert_eq!(play(), play());
}
