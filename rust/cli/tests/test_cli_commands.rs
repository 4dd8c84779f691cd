mod helpers;

use helpers::{CliRunner, last_balance};
use serial_test::serial;

#[test]
#[serial]
fn register_then_status_reads_the_saved_player() {
    let cli = CliRunner::new();
    let res = cli.run(&["register", "--name", "Ana", "--balance", "100"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Ana: 100 dracmas"));
    assert!(res.stdout.contains("Olive Wreath (100)"));
    assert!(res.stdout.contains("100%"));

    let status = cli.run(&["status"]);
    assert_eq!(status.exit_code, 0);
    assert!(status.stdout.starts_with("Ana: 100 dracmas\n"));
}

#[test]
#[serial]
fn blank_name_and_bad_balance_fall_back() {
    let cli = CliRunner::new();
    let res = cli.run(&["register", "--balance", "plenty"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Player: 0 dracmas"));
}

#[test]
#[serial]
fn roulette_round_trip_matches_one_of_two_balances() {
    let cli = CliRunner::new();
    cli.run(&["register", "--name", "Ana", "--balance", "100"]);
    let res = cli.run(&["--seed", "7", "roulette", "--bet", "10", "--number", "17"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Ana: 90 dracmas"));
    assert!(res.stdout.contains("[roulette] Landed on"));

    let log = cli.round_log();
    assert_eq!(log.len(), 1);
    let landed = log[0]["draw"]["roulette"].as_u64().unwrap();
    let expected = if landed == 17 { 440 } else { 90 };
    assert_eq!(log[0]["balance_after"].as_u64(), Some(expected));
    assert_eq!(last_balance(&cli.run(&["status"]).stdout), Some(expected));
}

#[test]
#[serial]
fn seeded_rounds_repeat() {
    let play = || {
        let cli = CliRunner::new();
        cli.run(&["register", "--name", "Ana", "--balance", "50"]);
        let res = cli.run(&["--seed", "42", "slots", "--bet", "5"]);
        assert_eq!(res.exit_code, 0);
        res.stdout
    };
    assert_eq!(play(), play());
}

#[test]
#[serial]
fn balance_edits() {
    let cli = CliRunner::new();
    cli.run(&["register", "--name", "Ana", "--balance", "10"]);

    let add = cli.run(&["balance", "add", "90"]);
    assert_eq!(add.exit_code, 0);
    assert_eq!(last_balance(&add.stdout), Some(100));

    let remove = cli.run(&["balance", "remove", "500"]);
    assert_eq!(last_balance(&remove.stdout), Some(0));

    let set = cli.run(&["balance", "set", "0"]);
    assert_eq!(set.exit_code, 0);
}

#[test]
#[serial]
fn logout_erases_the_record() {
    let cli = CliRunner::new();
    cli.run(&["register", "--name", "Ana", "--balance", "10"]);
    assert!(cli.data_dir().join("nike_player.json").exists());

    let res = cli.run(&["logout"]);
    assert_eq!(res.exit_code, 0);
    assert!(!cli.data_dir().join("nike_player.json").exists());
    assert_eq!(
        cli.run(&["status"]).stdout.lines().next(),
        Some("No player registered.")
    );
}

#[test]
#[serial]
fn history_summarizes_recorded_rounds() {
    let cli = CliRunner::new();
    cli.run(&["register", "--name", "Ana", "--balance", "100"]);
    for _ in 0..3 {
        assert_eq!(cli.run(&["dice", "--bet", "5"]).exit_code, 0);
    }
    let res = cli.run(&["history"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Rounds: 3"));
    assert!(res.stdout.contains("Wagered: 15"));

    let last = cli.run(&["history", "--last", "2"]);
    assert!(last.stdout.contains("Rounds: 2"));

    let ids: Vec<String> = cli
        .round_log()
        .iter()
        .map(|r| r["round_id"].as_str().unwrap().to_string())
        .collect();
    assert!(ids[0].ends_with("-000001"));
    assert!(ids[2].ends_with("-000003"));
}

#[test]
#[serial]
fn help_lists_every_command() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for c in ["register", "logout", "status", "balance", "roulette", "dice", "slots", "history", "cfg", "shell"] {
        assert!(res.stdout.contains(c), "help should mention {}", c);
    }
}
