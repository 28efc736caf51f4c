use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = RecordStore::from_config(cfg);
        ExportLogic::export(&store, *format, file, range, *force)?;
    }
    Ok(())
}
