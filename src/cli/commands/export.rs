use crate::cli::parser::Commands;
use crate::core::Report;
use crate::data::DataStore;
use crate::errors::AppResult;
use crate::export::export_report;
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, store: &DataStore) -> AppResult<()> {
    if let Commands::Export {
        kind,
        user_id,
        format,
        file,
        force,
    } = cmd
    {
        let data = store.presence()?;
        let report = Report::build(*kind, &data, *user_id);
        if report.is_empty() {
            warning(format!(
                "User {} has no presence data; writing an empty {} export",
                user_id,
                format.as_str()
            ));
        }
        export_report(&report, *format, Path::new(file), *force)?;
    }
    Ok(())
}
