use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::{missing_keys, unknown_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("# {}", path.display());
            print!("{}", cfg.to_yaml()?);
        }

        if *check {
            check_file(&path)?;
        }

        if *edit_config {
            edit_file(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn check_file(path: &std::path::Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No config file at {}; defaults are in use (run `init`)",
            path.display()
        ));
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content)?;
    let unknown = unknown_keys(&content)?;

    if missing.is_empty() && unknown.is_empty() {
        success("Configuration file is complete");
        return Ok(());
    }
    for key in missing {
        warning(format!("Missing key '{key}' (default value is used)"));
    }
    for key in unknown {
        warning(format!("Unknown key '{key}' is ignored"));
    }
    Ok(())
}

fn edit_file(path: &std::path::Path, editor: Option<&str>) -> AppResult<()> {
    if !path.exists() {
        Config::init()?;
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });
    let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    let status = Command::new(&editor_to_use).arg(path).status();
    if matches!(&status, Ok(s) if s.success()) {
        success(format!("Configuration file edited using '{editor_to_use}'"));
        return Ok(());
    }

    if editor_to_use == default_editor {
        return Err(AppError::Config(format!("editor '{editor_to_use}' failed")));
    }

    warning(format!(
        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
    ));
    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            info(format!("Configuration file edited using fallback '{default_editor}'"));
            Ok(())
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file with '{default_editor}'"
        ))),
    }
}
