//! Plain-text formatting shared by the commands and the terminal presenter.

use nike_engine::player::Player;
use nike_engine::presenter::Tone;
use nike_engine::prize::PrizeProgress;
use std::io::Write;

const BAR_WIDTH: usize = 20;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Non-fatal problems, such as a skipped round log line.
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

pub fn format_status(player: Option<&Player>) -> String {
    match player {
        Some(p) => format!("{}: {} dracmas", p.name(), p.balance()),
        None => "No player registered.".to_string(),
    }
}

/// `Olive Wreath (100)  [##########----------]  50%`
pub fn format_prize(progress: &PrizeProgress) -> String {
    let filled = progress.percent as usize * BAR_WIDTH / 100;
    format!(
        "{} ({})  [{}{}] {:>3}%",
        progress.name,
        progress.cost,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.percent
    )
}

pub fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Win => "+",
        Tone::Loss => "-",
        Tone::Neutral => "~",
        Tone::None => " ",
    }
}
