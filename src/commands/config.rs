/// `config` commands: read and write the settings store.
use anyhow::Result;
use sakari::SettingsStore;

use crate::cli::OutputCtx;
use crate::cli::args::ConfigCommand;
use crate::cli::output::print_json;

const NOT_SET: &str = "(not set)";

/// Run `sakari config <command>`.
///
/// # Errors
///
/// Returns `SettingsError` when the settings file cannot be written.
pub fn run(command: &ConfigCommand, settings: &mut SettingsStore, ctx: &OutputCtx) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => {
            settings.set(key.as_str(), value.as_str())?;
            ctx.status(&format!("Set {key} = {value}"));
        }
        ConfigCommand::Get { key } => println!("{}", display_value(settings, key)),
        ConfigCommand::List => print_json(&settings.list()),
        ConfigCommand::Clear => {
            settings.clear()?;
            ctx.status("Configuration cleared");
        }
        ConfigCommand::Delete { key } => {
            settings.delete(key)?;
            ctx.status(&format!("Deleted {key}"));
        }
        ConfigCommand::Path => println!("{}", settings.path().display()),
    }
    Ok(())
}

fn display_value(settings: &SettingsStore, key: &str) -> String {
    settings
        .get(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| NOT_SET.to_owned())
}
