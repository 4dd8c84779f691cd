//! Terminal renditions of the presentation and audio seams.

use nike_engine::player::Player;
use nike_engine::presenter::{Animation, Cue, CuePlayer, Presenter, Tone};
use nike_engine::prize::PrizeProgress;
use nike_engine::round::{Faces, Game};
use std::io::Write;

use crate::ui;

/// Writes presenter updates as text lines.
///
/// Status and prize lines are only written when they change, so a round
/// prints the debit and the payout but not the same shelf twice. In `live`
/// mode dice and reel ticks redraw a single line in place; otherwise ticks
/// are skipped and only the result message is shown.
///
/// Write failures are ignored: the display is best-effort.
pub struct TerminalPresenter<'a> {
    out: &'a mut dyn Write,
    live: bool,
    mid_line: bool,
    last_status: Option<String>,
    last_progress: Option<Vec<u8>>,
}

impl<'a> TerminalPresenter<'a> {
    pub fn new(out: &'a mut dyn Write, live: bool) -> Self {
        Self {
            out,
            live,
            mid_line: false,
            last_status: None,
            last_progress: None,
        }
    }

    /// Forget what was shown, so the next status and shelf print in full.
    pub fn reset(&mut self) {
        self.last_status = None;
        self.last_progress = None;
    }

    /// Writes a free-form line below whatever is on screen.
    pub fn note(&mut self, text: &str) {
        self.line(text);
    }

    /// The underlying stream, with any half-drawn tick line finished first.
    pub fn writer(&mut self) -> &mut dyn Write {
        if self.mid_line {
            let _ = writeln!(self.out);
            self.mid_line = false;
        }
        &mut *self.out
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.writer(), "{}", text);
    }
}

impl Presenter for TerminalPresenter<'_> {
    fn update_status(&mut self, player: Option<&Player>) {
        let status = ui::format_status(player);
        if self.last_status.as_deref() == Some(status.as_str()) {
            return;
        }
        self.line(&status);
        self.last_status = Some(status);
    }

    fn update_prizes(&mut self, progress: &[PrizeProgress]) {
        let percents: Vec<u8> = progress.iter().map(|p| p.percent).collect();
        if self.last_progress.as_ref() == Some(&percents) {
            return;
        }
        for p in progress {
            self.line(&format!("  {}", ui::format_prize(p)));
        }
        self.last_progress = Some(percents);
    }

    fn animate(&mut self, animation: Animation) {
        if self.live {
            let text = match animation {
                Animation::WheelSpin => "(the wheel turns)",
                Animation::DiceShake => "(the dice rattle)",
                Animation::SlotsShake => "(the reels blur)",
            };
            self.line(text);
        }
    }

    fn show_faces(&mut self, faces: &Faces) {
        if !self.live {
            return;
        }
        let text = match faces {
            Faces::Dice(a, b) => format!("  [{}] [{}]", a, b),
            Faces::Reels([a, b, c]) => format!("  {} | {} | {}", a, b, c),
        };
        let _ = write!(self.out, "\r{:<24}", text);
        let _ = self.out.flush();
        self.mid_line = true;
    }

    fn message(&mut self, game: Game, text: &str, tone: Tone) {
        self.line(&format!("{} [{}] {}", ui::tone_marker(tone), game, text));
    }
}

/// Rings the terminal bell on a jackpot. Other cues are silent.
#[derive(Debug, Clone, Copy)]
pub struct BellCues {
    enabled: bool,
}

impl BellCues {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl CuePlayer for BellCues {
    fn play(&mut self, cue: Cue) {
        if self.enabled && cue == Cue::Jackpot {
            let mut err = std::io::stderr();
            let _ = err.write_all(b"\x07");
            let _ = err.flush();
        }
    }
}
