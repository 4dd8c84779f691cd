//! Wires configuration to a live session and table, and drives the clock.

use nike_engine::logger::RoundLogger;
use nike_engine::presenter::Presenter;
use nike_engine::round::RoundOutcome;
use nike_engine::session::Session;
use nike_engine::store::FileStore;
use nike_engine::table::Table;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::Config;

pub const ROUND_LOG: &str = "rounds.jsonl";

/// Configuration after command-line flags have been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub seed: u64,
    pub realtime: bool,
    pub exclusive_rounds: bool,
    pub prizes: Vec<nike_engine::prize::Prize>,
}

impl Settings {
    /// Flags win over the configuration; a missing seed is drawn fresh.
    pub fn resolve(
        config: Config,
        data_dir: Option<PathBuf>,
        seed: Option<u64>,
        instant: bool,
    ) -> Self {
        Self {
            data_dir: data_dir.unwrap_or(config.data_dir),
            seed: seed.or(config.seed).unwrap_or_else(rand::random),
            realtime: config.realtime && !instant,
            exclusive_rounds: config.exclusive_rounds,
            prizes: config.prizes,
        }
    }

    pub fn round_log_path(&self) -> PathBuf {
        self.data_dir.join(ROUND_LOG)
    }
}

/// The process-wide session and table.
///
/// In realtime mode the table clock tracks wall time since [`Runtime::open`].
#[derive(Debug)]
pub struct Runtime {
    pub settings: Settings,
    pub session: Session,
    pub table: Table,
    opened: Instant,
}

impl Runtime {
    pub fn open(settings: Settings) -> Self {
        let store = FileStore::new(&settings.data_dir);
        let session = Session::open(Box::new(store), settings.prizes.clone());

        let mut table = Table::seeded(settings.seed)
            .with_exclusive_rounds(settings.exclusive_rounds)
            .with_cues(Box::new(crate::terminal::BellCues::new(settings.realtime)));
        match RoundLogger::open(settings.round_log_path()) {
            Ok(log) => table = table.with_round_log(log),
            Err(e) => warn!(
                path = %settings.round_log_path().display(),
                error = %e,
                "round log unavailable; rounds will not be recorded"
            ),
        }
        info!(
            seed = settings.seed,
            data_dir = %settings.data_dir.display(),
            realtime = settings.realtime,
            "runtime ready"
        );

        Self {
            settings,
            session,
            table,
            opened: Instant::now(),
        }
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.opened.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Fires the timers that came due while nobody was driving the clock.
    /// Does nothing in instant mode, where only [`Runtime::drive`] moves time.
    pub fn catch_up(&mut self, ui: &mut dyn Presenter) -> Vec<RoundOutcome> {
        if !self.settings.realtime {
            return Vec::new();
        }
        let now = self.elapsed_ms();
        self.table.advance_to(now, &mut self.session, ui)
    }

    /// Plays every in-flight round to the end. In realtime mode the thread
    /// sleeps until each timer is due; otherwise timers fire back to back.
    pub fn drive(&mut self, ui: &mut dyn Presenter) -> Vec<RoundOutcome> {
        if !self.settings.realtime {
            return self.table.run_until_idle(&mut self.session, ui);
        }
        let mut resolved = Vec::new();
        while let Some(due) = self.table.next_due() {
            let wait = due.saturating_sub(self.elapsed_ms());
            if wait > 0 {
                std::thread::sleep(Duration::from_millis(wait));
            }
            resolved.extend(self.table.advance_to(due, &mut self.session, ui));
        }
        resolved
    }
}
