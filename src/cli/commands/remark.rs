use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::view::print_records;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remark {
        date,
        activity,
        text,
    } = cmd
    {
        let store = RecordStore::from_config(cfg);
        let records = store.add_remark(date.as_deref(), activity.as_deref(), text.as_deref())?;

        success("Remark saved.");
        print_records(&records, cfg.schema, cfg.show_weekday);
    }

    Ok(())
}
