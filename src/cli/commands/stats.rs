use crate::cli::parser::Commands;
use crate::core::Report;
use crate::data::DataStore;
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, store: &DataStore) -> AppResult<()> {
    if let Commands::Stats {
        kind,
        user_id,
        json,
    } = cmd
    {
        let data = store.presence()?;
        let report = Report::build(*kind, &data, *user_id);

        if *json {
            println!("{}", serde_json::to_string(&report)?);
            return Ok(());
        }

        if report.is_empty() {
            println!("No data for user {}.", user_id);
            return Ok(());
        }

        println!("{} for user {}\n", kind.title(), user_id);
        let mut table = Table::new(report.columns());
        for row in report.rows(true) {
            table.add_row(row);
        }
        print!("{}", table.render());
    }
    Ok(())
}
