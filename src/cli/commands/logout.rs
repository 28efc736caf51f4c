use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::view::print_records;
use crate::utils::date::today_str;
use crate::utils::time::now_formatted;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logout {
        activity,
        date,
        time,
    } = cmd
    {
        let date = date.clone().unwrap_or_else(today_str);
        let time = time
            .clone()
            .unwrap_or_else(|| now_formatted(cfg.time_format()));

        let store = RecordStore::from_config(cfg);
        let records = store.record_logout(&date, activity.as_deref(), &time)?;

        success(format!("Logged out on {} at {}.", date.trim(), time.trim()));
        print_records(&records, cfg.schema, cfg.show_weekday);
    }

    Ok(())
}
