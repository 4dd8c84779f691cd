//! # nike-engine: Casino Mini-Game Core
//!
//! Player profile, payout rules and round sequencing for three dracma games:
//! single-number roulette, two dice and a three-reel slot machine.
//!
//! ## Core Modules
//!
//! - [`player`] - Player name and balance, clamped arithmetic, record coercion
//! - [`session`] - The single live player, persistence and presenter updates
//! - [`store`] - Key-value backends for the persisted record
//! - [`prize`] - Prize shelf and progress percentages
//! - [`table`] - Starts rounds, debits bets, fires timers, credits payouts
//! - [`round`] - Round trait, phases, draws and outcomes
//! - [`roulette`], [`dice`], [`slots`] - Per-game timing and payout rules
//! - [`timer`] - Virtual-time timer queue
//! - [`rng`] - Injectable random sources (ChaCha20 and scripted)
//! - [`presenter`] - Presentation and audio seams
//! - [`logger`] - Round log records and JSONL writer
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use nike_engine::presenter::NullPresenter;
//! use nike_engine::prize::default_prizes;
//! use nike_engine::session::Session;
//! use nike_engine::store::MemoryStore;
//! use nike_engine::table::Table;
//!
//! let mut ui = NullPresenter;
//! let mut session = Session::open(Box::new(MemoryStore::new()), default_prizes());
//! session.register("Ana", 100, &mut ui);
//!
//! let mut table = Table::seeded(42);
//! table.play_dice(&mut session, &mut ui, 5).unwrap();
//! let outcomes = table.run_until_idle(&mut session, &mut ui);
//! assert_eq!(outcomes.len(), 1);
//! ```
//!
//! ## Payout Rules
//!
//! Pure functions of the final draw, usable without a table:
//!
//! ```rust
//! use nike_engine::slots::{resolve, Symbol};
//! use nike_engine::round::Tier;
//!
//! let res = resolve(5, [Symbol::Seven, Symbol::Seven, Symbol::Seven]);
//! assert_eq!(res.tier, Tier::Jackpot);
//! assert_eq!(res.payout, 50);
//! ```

pub mod dice;
pub mod errors;
pub mod logger;
pub mod player;
pub mod presenter;
pub mod prize;
pub mod rng;
pub mod roulette;
pub mod round;
pub mod session;
pub mod slots;
pub mod store;
pub mod table;
pub mod timer;
