use serde::{Deserialize, Serialize};

use crate::round::{Draw, Game, RoundOutcome, Tier};

/// One resolved round, as written to the round log (one JSON object per line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    pub game: Game,
    pub bet: u64,
    pub draw: Draw,
    pub tier: Tier,
    pub payout: u64,
    /// Balance after the payout; absent if the player left mid-round
    #[serde(default)]
    pub balance_after: Option<u64>,
    /// Timestamp when the round resolved (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_outcome(round_id: String, outcome: &RoundOutcome) -> Self {
        Self {
            round_id,
            game: outcome.game,
            bet: outcome.bet,
            draw: outcome.draw,
            tier: outcome.tier,
            payout: outcome.payout,
            balance_after: outcome.balance_after,
            ts: None,
        }
    }

    /// Net effect on the balance: payout minus bet.
    pub fn net(&self) -> i128 {
        self.payout as i128 - self.bet as i128
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Opens `path` for appending. Numbering continues after the lines
    /// already in the file so ids stay unique across runs.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let existing = match File::open(path.as_ref()) {
            Ok(f) => BufReader::new(f)
                .lines()
                .map_while(Result::ok)
                .filter(|l| !l.trim().is_empty())
                .count() as u32,
            Err(_) => 0,
        };
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: existing,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }

    /// Assigns the next id to `outcome` and appends it.
    pub fn record(&mut self, outcome: &RoundOutcome) -> std::io::Result<String> {
        let id = self.next_id();
        self.write(&RoundRecord::from_outcome(id.clone(), outcome))?;
        Ok(id)
    }
}
