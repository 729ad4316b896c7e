use crate::chart::render_report;
use crate::cli::parser::Commands;
use crate::core::Report;
use crate::data::DataStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, store: &DataStore) -> AppResult<()> {
    if let Commands::Chart { kind, user_id } = cmd {
        let data = store.presence()?;
        let report = Report::build(*kind, &data, *user_id);
        let view = render_report(&report)?;
        println!("{}", serde_json::to_string_pretty(&view)?);
    }
    Ok(())
}
