use std::fs;

use nike_engine::logger::{RoundLogger, RoundRecord};
use nike_engine::presenter::{NullPresenter, SilentCues};
use nike_engine::prize::default_prizes;
use nike_engine::rng::ScriptedSource;
use nike_engine::round::{Game, Tier};
use nike_engine::session::Session;
use nike_engine::store::MemoryStore;
use nike_engine::table::Table;

fn read_records(path: &std::path::Path) -> Vec<RoundRecord> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn resolved_rounds_are_appended_as_jsonl() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("logs").join("rounds.jsonl");

    let mut ui = NullPresenter;
    let mut session = Session::open(Box::new(MemoryStore::new()), default_prizes());
    session.register("Ana", 100, &mut ui);
    let mut table = Table::new(
        Box::new(ScriptedSource::new([17, 2, 3])),
        Box::new(ScriptedSource::new([0])),
        Box::new(SilentCues),
    )
    .with_round_log(RoundLogger::open(&path).unwrap());

    table.play_roulette(&mut session, &mut ui, 10, 17).unwrap();
    table.run_until_idle(&mut session, &mut ui);
    table.play_dice(&mut session, &mut ui, 5).unwrap();
    table.run_until_idle(&mut session, &mut ui);

    let records = read_records(&path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].game, Game::Roulette);
    assert_eq!(records[0].payout, 350);
    assert_eq!(records[0].balance_after, Some(440));
    assert_eq!(records[0].net(), 340);
    assert!(records[0].round_id.ends_with("-000001"));
    assert!(records[0].ts.is_some());
    assert_eq!(records[1].game, Game::Dice);
    assert_eq!(records[1].tier, Tier::Win);
    assert!(records[1].round_id.ends_with("-000002"));
}

#[test]
fn reopening_continues_numbering() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("rounds.jsonl");
    fs::write(&path, "{}\n{}\n\n").unwrap();

    let mut log = RoundLogger::open(&path).unwrap();
    assert!(log.next_id().ends_with("-000003"));
}

#[test]
fn ids_are_date_prefixed_and_zero_padded() {
    let mut log = RoundLogger::with_seq_for_test("20260101");
    assert_eq!(log.next_id(), "20260101-000001");
    assert_eq!(log.next_id(), "20260101-000002");
}
