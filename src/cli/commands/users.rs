use crate::data::DataStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::table::Table;

pub fn handle(store: &DataStore) -> AppResult<()> {
    let dir = store.users()?;

    if dir.is_empty() {
        warning(format!("No users in {}", store.xml_path().display()));
        return Ok(());
    }

    let mut table = Table::new(["ID", "Name", "Avatar"]);
    for user in dir.listing() {
        table.add_row(vec![
            user.user_id.to_string(),
            user.name.clone(),
            user.avatar.clone(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
