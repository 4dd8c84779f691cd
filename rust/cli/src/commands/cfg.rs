//! Configuration command handler.
//!
//! Prints every setting with the layer it came from (default, file or env)
//! as pretty JSON. Command-line flags are not reflected here.

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "data_dir": {
            "value": config.data_dir,
            "source": sources.data_dir,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "realtime": {
            "value": config.realtime,
            "source": sources.realtime,
        },
        "exclusive_rounds": {
            "value": config.exclusive_rounds,
            "source": sources.exclusive_rounds,
        },
        "prizes": {
            "value": config.prizes,
            "source": sources.prizes,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
