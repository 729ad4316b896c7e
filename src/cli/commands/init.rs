use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates `~/.presence-analyzer/` and a default config file. An existing
/// config file is never overwritten.
pub fn handle() -> AppResult<()> {
    let (path, created) = Config::init()?;

    if created {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!("Config file already present: {}", path.display()));
    }

    let cfg = Config::load()?;
    info(format!("Presence CSV : {}", cfg.data_csv_path().display()));
    info(format!("Users XML    : {}", cfg.data_xml_path().display()));
    Ok(())
}
