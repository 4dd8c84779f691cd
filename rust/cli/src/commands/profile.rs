//! Player profile commands: register, logout, status and balance edits.

use nike_engine::player::coerce_amount;
use nike_engine::presenter::Presenter;
use nike_engine::session::AdjustMode;
use tracing::debug;

use crate::error::CliError;
use crate::runtime::Runtime;

/// Creates a player, replacing any current one. The starting balance is
/// coerced the lenient way: `"12.5"` is 12, `"abc"` and `"-3"` are 0.
pub fn handle_register_command(
    rt: &mut Runtime,
    name: &str,
    balance: Option<&str>,
    ui: &mut dyn Presenter,
) -> Result<(), CliError> {
    let starting = coerce_amount(balance.unwrap_or(""));
    rt.session.register(name, starting, ui);
    Ok(())
}

pub fn handle_logout_command(rt: &mut Runtime, ui: &mut dyn Presenter) -> Result<(), CliError> {
    if rt.table.in_flight() > 0 {
        debug!(in_flight = rt.table.in_flight(), "logging out with rounds in flight");
    }
    rt.session.logout(ui);
    Ok(())
}

pub fn handle_status_command(rt: &Runtime, ui: &mut dyn Presenter) -> Result<(), CliError> {
    rt.session.refresh(ui);
    Ok(())
}

/// Manual balance edit. Rejections come back as [`CliError::Engine`].
pub fn handle_balance_command(
    rt: &mut Runtime,
    mode: AdjustMode,
    amount: i64,
    ui: &mut dyn Presenter,
) -> Result<u64, CliError> {
    Ok(rt.session.adjust(amount, mode, ui)?)
}
