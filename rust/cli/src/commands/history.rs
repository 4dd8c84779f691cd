//! Round log summary.
//!
//! Reads `rounds.jsonl` from the data directory, lists the most recent
//! rounds and totals what was wagered and paid out. Lines that do not parse
//! are reported on stderr and skipped.

use nike_engine::logger::RoundRecord;
use nike_engine::round::{Draw, Tier};
use std::io::Write;
use std::path::Path;

use crate::error::CliError;
use crate::io_utils::read_text;

pub fn handle_history_command(
    path: &Path,
    last: Option<usize>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = match read_text(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let mut records: Vec<RoundRecord> = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let rec: RoundRecord = crate::parse_json_or_continue!(line, err, format!("line {}", i + 1));
        records.push(rec);
    }

    if records.is_empty() {
        writeln!(out, "No rounds recorded yet.")?;
        return Ok(());
    }

    let skip = last.map_or(0, |k| records.len().saturating_sub(k));
    let shown = &records[skip..];
    for rec in shown {
        writeln!(out, "{}", format_record(rec))?;
    }

    // saturated payouts can sit next to each other in the log
    let wagered: u128 = shown.iter().map(|r| u128::from(r.bet)).sum();
    let paid: u128 = shown.iter().map(|r| u128::from(r.payout)).sum();
    let net: i128 = shown.iter().map(RoundRecord::net).sum();
    let wins = shown.iter().filter(|r| r.tier != Tier::Loss).count();
    writeln!(
        out,
        "Rounds: {}  Won: {}  Wagered: {}  Paid out: {}  Net: {:+}",
        shown.len(),
        wins,
        wagered,
        paid,
        net
    )?;
    Ok(())
}

fn format_record(rec: &RoundRecord) -> String {
    let draw = match rec.draw {
        Draw::Roulette(n) => n.to_string(),
        Draw::Dice(a, b) => format!("{}+{}", a, b),
        Draw::Slots([a, b, c]) => format!("{} {} {}", a, b, c),
    };
    let tier = match rec.tier {
        Tier::Loss => "loss",
        Tier::Win => "win",
        Tier::Partial => "sevens",
        Tier::Jackpot => "jackpot",
    };
    let balance = rec
        .balance_after
        .map_or_else(|| "-".to_string(), |b| b.to_string());
    format!(
        "{}  {:<8}  bet {:>6}  drew {:<10}  {:<7}  {:>+7}  balance {}",
        rec.round_id,
        rec.game.as_str(),
        rec.bet,
        draw,
        tier,
        rec.net(),
        balance
    )
}
