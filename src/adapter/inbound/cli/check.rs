//! `rota check`: validate a settings file without solving.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Settings;

/// Validate the settings file and print a summary of the week it describes.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let settings = Settings::load(path)?;
    let config = settings.configuration()?;
    let demand = config.demand();
    let cap = settings
        .model
        .max_days_per_week
        .map_or_else(|| "none".to_string(), |cap| cap.to_string());

    if output::is_json() {
        output::json_output(&json!({
            "command": "check",
            "config": path.display().to_string(),
            "valid": true,
            "backend": format!("{:?}", settings.solver.backend).to_lowercase(),
            "time_limit_secs": settings.solver.time_limit_secs,
            "max_days_per_week": settings.model.max_days_per_week,
            "staff": config.roster().len(),
            "seeded": settings.staff.is_empty(),
            "demand": demand.as_array(),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Settings file is valid");

    output::section("Summary");
    output::field("Backend", format!("{:?}", settings.solver.backend).to_lowercase());
    output::field("Time limit", format!("{}s", settings.solver.time_limit_secs));
    output::field("Weekly cap", cap);
    output::field("Staff", config.roster().len());
    output::field(
        "Demand",
        demand
            .iter()
            .map(|(day, need)| format!("{day}={need}"))
            .collect::<Vec<_>>()
            .join(" "),
    );
    output::field("Shifts needed", demand.total());
    output::field("Logging", format!("{} ({})", settings.logging.level, settings.logging.format));

    if settings.staff.is_empty() || settings.demand.is_none() {
        output::warning("No [[staff]] or [demand] section; the built-in seed week fills the gap");
    }

    Ok(())
}
