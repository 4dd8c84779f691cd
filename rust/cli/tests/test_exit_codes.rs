mod helpers;

use helpers::CliRunner;
use serial_test::serial;

#[test]
#[serial]
fn rejected_bets_exit_with_2_and_leave_the_balance() {
    let cli = CliRunner::new();
    cli.run(&["register", "--name", "Ana", "--balance", "30"]);

    for args in [
        &["dice", "--bet", "0"][..],
        &["dice", "--bet", "-5"][..],
        &["slots", "--bet", "31"][..],
        &["roulette", "--bet", "5", "--number", "37"][..],
    ] {
        let res = cli.run(args);
        assert_eq!(res.exit_code, 2, "{:?}", args);
        assert!(res.stderr.starts_with("Error: Invalid"), "{}", res.stderr);
        assert!(res.stdout.contains("- ["), "rejection should be shown: {}", res.stdout);
    }
    assert!(cli.run(&["status"]).stdout.starts_with("Ana: 30 dracmas"));
    assert!(cli.round_log().is_empty());
}

#[test]
#[serial]
fn playing_without_a_player_exits_with_2() {
    let cli = CliRunner::new();
    let res = cli.run(&["slots", "--bet", "1"]);
    assert_eq!(res.exit_code, 2);
    assert_eq!(res.stderr, "Error: Register first.\n");
}

#[test]
#[serial]
fn invalid_adjustments_exit_with_2() {
    let cli = CliRunner::new();
    cli.run(&["register", "--name", "Ana", "--balance", "30"]);
    let res = cli.run(&["balance", "add", "0"]);
    assert_eq!(res.exit_code, 2);
    assert_eq!(res.stderr, "Error: Invalid amount: 0.\n");
}

#[test]
#[serial]
fn unknown_commands_print_usage() {
    let cli = CliRunner::new();
    let res = cli.run(&["blackjack"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Usage: nike"));
}

#[test]
#[serial]
fn losing_a_round_is_still_success() {
    let cli = CliRunner::new();
    cli.run(&["register", "--name", "Ana", "--balance", "1000"]);
    for seed in 0..5 {
        let seed = seed.to_string();
        let res = cli.run(&["--seed", &seed, "roulette", "--bet", "1", "--number", "0"]);
        assert_eq!(res.exit_code, 0);
    }
}
