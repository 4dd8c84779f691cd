use serde::{Deserialize, Serialize};

/// An item on the prize shelf, bought with dracmas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub name: String,
    pub cost: u64,
}

impl Prize {
    pub fn new(name: &str, cost: u64) -> Self {
        Self {
            name: name.to_string(),
            cost,
        }
    }

    /// Percentage of this prize covered by `balance`, capped at 100.
    pub fn progress(&self, balance: u64) -> u8 {
        if self.cost == 0 {
            return 100;
        }
        let pct = (balance as u128 * 100) / self.cost as u128;
        pct.min(100) as u8
    }
}

/// Progress of one prize, as handed to the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrizeProgress {
    pub name: String,
    pub cost: u64,
    pub percent: u8,
}

pub fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new("Olive Wreath", 100),
        Prize::new("Bronze Amphora", 500),
        Prize::new("Silver Owl", 2_000),
        Prize::new("Golden Nike", 10_000),
    ]
}

/// Progress for every prize; no player reads as a zero balance.
pub fn progress_for(prizes: &[Prize], balance: Option<u64>) -> Vec<PrizeProgress> {
    let balance = balance.unwrap_or(0);
    prizes
        .iter()
        .map(|p| PrizeProgress {
            name: p.name.clone(),
            cost: p.cost,
            percent: p.progress(balance),
        })
        .collect()
}
