//! Seams to the outside world: what the player sees and hears.
//!
//! The engine only ever pushes into these traits. Nothing is read back, and
//! nothing an implementation does can fail a round.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::player::Player;
use crate::prize::PrizeProgress;
use crate::round::{Faces, Game};

/// How a message should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Win,
    Loss,
    Neutral,
    /// Plain text, leave the styling as it was.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    WheelSpin,
    DiceShake,
    SlotsShake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Wheel,
    Dice,
    Reels,
    Jackpot,
}

pub trait Presenter {
    fn update_status(&mut self, player: Option<&Player>);
    fn update_prizes(&mut self, progress: &[PrizeProgress]);
    fn animate(&mut self, animation: Animation);
    /// Dice or reel faces changed, either a cosmetic tick or the final draw.
    fn show_faces(&mut self, faces: &Faces);
    fn message(&mut self, game: Game, text: &str, tone: Tone);
}

/// Plays short sound cues. Best-effort: implementations swallow failures.
pub trait CuePlayer: std::fmt::Debug {
    fn play(&mut self, cue: Cue);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn update_status(&mut self, _player: Option<&Player>) {}
    fn update_prizes(&mut self, _progress: &[PrizeProgress]) {}
    fn animate(&mut self, _animation: Animation) {}
    fn show_faces(&mut self, _faces: &Faces) {}
    fn message(&mut self, _game: Game, _text: &str, _tone: Tone) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    Status(Option<(String, u64)>),
    Prizes(Vec<u8>),
    Animate(Animation),
    Faces(Faces),
    Message(Game, String, Tone),
}

/// Keeps every call in order, for assertions.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Game, String, Tone)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PresenterCall::Message(g, t, tone) => Some((*g, t.clone(), *tone)),
                _ => None,
            })
            .collect()
    }

    pub fn last_message(&self) -> Option<(Game, String, Tone)> {
        self.messages().pop()
    }

    pub fn last_status(&self) -> Option<Option<(String, u64)>> {
        self.calls.iter().rev().find_map(|c| match c {
            PresenterCall::Status(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn faces(&self) -> Vec<Faces> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PresenterCall::Faces(f) => Some(*f),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn update_status(&mut self, player: Option<&Player>) {
        self.calls.push(PresenterCall::Status(
            player.map(|p| (p.name().to_string(), p.balance())),
        ));
    }

    fn update_prizes(&mut self, progress: &[PrizeProgress]) {
        self.calls.push(PresenterCall::Prizes(
            progress.iter().map(|p| p.percent).collect(),
        ));
    }

    fn animate(&mut self, animation: Animation) {
        self.calls.push(PresenterCall::Animate(animation));
    }

    fn show_faces(&mut self, faces: &Faces) {
        self.calls.push(PresenterCall::Faces(*faces));
    }

    fn message(&mut self, game: Game, text: &str, tone: Tone) {
        self.calls
            .push(PresenterCall::Message(game, text.to_string(), tone));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}

/// Records played cues behind a shared handle, so a test can keep a clone
/// after handing the player to a table.
#[derive(Debug, Default, Clone)]
pub struct RecordingCues {
    played: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingCues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Cue> {
        self.played.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl CuePlayer for RecordingCues {
    fn play(&mut self, cue: Cue) {
        if let Ok(mut guard) = self.played.lock() {
            guard.push(cue);
        }
    }
}
