use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{
    get_config, global_config_path, local_config_path, save_global_config, save_local_config,
};
use crate::types::ConfigFile;

/// Print the resolved config, or write it out as a starting config file.
pub fn run(init: bool, global: bool) -> Result<()> {
    let config = get_config()?;

    if !init {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let file = ConfigFile {
        max_lines: Some(config.max_lines),
        max_line_chars: Some(config.max_line_chars),
        task_max_lines: Some(config.task_max_lines),
        header_max_chars: Some(config.header_max_chars),
    };
    let path = if global {
        save_global_config(&file)?;
        global_config_path()?
    } else {
        save_local_config(&file)?;
        local_config_path()
    };

    println!(
        "{} Wrote {}",
        "✓".green().bold(),
        path.display().to_string().cyan()
    );
    Ok(())
}
