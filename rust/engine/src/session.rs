use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{GameError, StoreError};
use crate::player::{Player, PLAYER_KEY};
use crate::presenter::Presenter;
use crate::prize::{progress_for, Prize, PrizeProgress};
use crate::store::KeyValueStore;

/// Manual balance adjustment modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustMode {
    Add,
    Remove,
    Set,
}

/// Owns the one live player, its persisted record and the prize shelf.
///
/// Every mutation persists the player and then pushes the new status and
/// prize progress to the presenter, in that order.
#[derive(Debug)]
pub struct Session {
    store: Box<dyn KeyValueStore>,
    player: Option<Player>,
    prizes: Vec<Prize>,
}

impl Session {
    /// Opens a session, restoring the player from `store` if a usable record
    /// is there.
    pub fn open(store: Box<dyn KeyValueStore>, prizes: Vec<Prize>) -> Self {
        let mut session = Self {
            store,
            player: None,
            prizes,
        };
        session.player = session.load();
        if let Some(p) = &session.player {
            info!(name = %p.name(), balance = p.balance(), "restored player");
        }
        session
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn progress(&self) -> Vec<PrizeProgress> {
        progress_for(&self.prizes, self.player.as_ref().map(Player::balance))
    }

    /// Creates (or replaces) the player and persists it.
    pub fn register(&mut self, name: &str, starting_balance: u64, ui: &mut dyn Presenter) {
        let player = Player::new(name, starting_balance);
        info!(name = %player.name(), balance = player.balance(), "player registered");
        self.player = Some(player);
        self.save(ui);
    }

    /// Drops the player and erases the persisted record.
    pub fn logout(&mut self, ui: &mut dyn Presenter) {
        if let Some(p) = self.player.take() {
            info!(name = %p.name(), balance = p.balance(), "player logged out");
        }
        self.clear();
        self.refresh(ui);
    }

    pub fn can_afford(&self, amount: i64) -> bool {
        self.player.as_ref().is_some_and(|p| p.can_afford(amount))
    }

    /// Adds to the balance. Returns false when nobody is registered.
    pub fn credit(&mut self, amount: u64, ui: &mut dyn Presenter) -> bool {
        self.mutate(ui, |p| p.credit(amount))
    }

    /// Subtracts from the balance, flooring at 0.
    pub fn debit(&mut self, amount: u64, ui: &mut dyn Presenter) -> bool {
        self.mutate(ui, |p| p.debit(amount))
    }

    pub fn set_balance(&mut self, amount: u64, ui: &mut dyn Presenter) -> bool {
        self.mutate(ui, |p| p.set_balance(amount))
    }

    /// Manual adjustment from the balance editor.
    ///
    /// `Add` and `Remove` need a positive amount, `Set` a non-negative one.
    pub fn adjust(
        &mut self,
        amount: i64,
        mode: AdjustMode,
        ui: &mut dyn Presenter,
    ) -> Result<u64, GameError> {
        if self.player.is_none() {
            return Err(GameError::NoPlayer);
        }
        let valid = match mode {
            AdjustMode::Add | AdjustMode::Remove => amount > 0,
            AdjustMode::Set => amount >= 0,
        };
        if !valid {
            return Err(GameError::InvalidAmount { amount });
        }
        let amount = amount as u64;
        match mode {
            AdjustMode::Add => self.credit(amount, ui),
            AdjustMode::Remove => self.debit(amount, ui),
            AdjustMode::Set => self.set_balance(amount, ui),
        };
        debug!(?mode, amount, "balance adjusted");
        Ok(self.player.as_ref().map(Player::balance).unwrap_or(0))
    }

    /// Reads the persisted record. Absent or malformed data is `None`.
    pub fn load(&self) -> Option<Player> {
        let raw = match self.store.get(PLAYER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "failed to read player record");
                return None;
            }
        };
        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "ignoring malformed player record");
                return None;
            }
        };
        let player = Player::from_stored(&value);
        if player.is_none() {
            warn!("ignoring player record that is not an object");
        }
        player
    }

    /// Persists the current player (if any) and notifies the presenter.
    pub fn save(&mut self, ui: &mut dyn Presenter) {
        if let Some(p) = &self.player {
            let written = serde_json::to_string(&p.to_record())
                .map_err(StoreError::from)
                .and_then(|json| self.store.set(PLAYER_KEY, &json));
            if let Err(e) = written {
                warn!(error = %e, "failed to persist player record");
            }
        }
        self.refresh(ui);
    }

    /// Erases the persisted record. The in-memory player is untouched.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove(PLAYER_KEY) {
            warn!(error = %e, "failed to erase player record");
        }
    }

    /// Pushes the current status and prize progress without mutating anything.
    pub fn refresh(&self, ui: &mut dyn Presenter) {
        ui.update_status(self.player.as_ref());
        ui.update_prizes(&self.progress());
    }

    fn mutate(&mut self, ui: &mut dyn Presenter, f: impl FnOnce(&mut Player)) -> bool {
        match self.player.as_mut() {
            Some(p) => {
                f(p);
                self.save(ui);
                true
            }
            None => false,
        }
    }
}
