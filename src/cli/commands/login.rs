use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::login::LoginRequest;
use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::view::print_records;
use crate::utils::date::today_str;
use crate::utils::time::now_formatted;

/// Start a session: date defaults to today, time to now.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login {
        activity,
        date,
        time,
        scheduled,
    } = cmd
    {
        let date = date.clone().unwrap_or_else(today_str);
        let time = time
            .clone()
            .unwrap_or_else(|| now_formatted(cfg.time_format()));

        let mut req = LoginRequest::new(&date, activity.as_deref().unwrap_or_default(), &time);
        if let Some(label) = scheduled {
            req = req.scheduled(label);
        }

        let store = RecordStore::from_config(cfg);
        let records = store.record_login(&req)?;

        if let Some(rec) = records.last() {
            success(format!(
                "Logged in to '{}' on {} at {}.",
                rec.activity, rec.date, rec.login_time
            ));
        }
        print_records(&records, cfg.schema, cfg.show_weekday);
    }

    Ok(())
}
