use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::RecordStore;
use crate::db::table::is_blank;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode), including any
///    `--table` / `--schema` / `--allow-duplicates` override
///  - the attendance table, with the header of the configured schema
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing attendlog…");

    if !cli.test {
        let path = cfg.save()?;
        success(format!("Config file: {}", path.display()));
    }

    let store = RecordStore::from_config(cfg);
    let existed = !is_blank(store.path());
    store.initialize()?;

    if existed {
        info(format!("Table already initialized: {}", store.path().display()));
    } else {
        success(format!("Table created: {}", store.path().display()));
    }

    println!(
        "🗂️  Schema: {} | duplicate logins: {}",
        store.schema(),
        if store.allows_duplicates() { "allowed" } else { "rejected" }
    );
    Ok(())
}
