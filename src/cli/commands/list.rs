use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::RecordStore;
use crate::db::queries::{open_records, records_for_date};
use crate::errors::AppResult;
use crate::ui::view::print_records;
use crate::utils::date::{in_bounds, period_bounds};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        open,
        date,
        period,
        json,
    } = cmd
    {
        let store = RecordStore::from_config(cfg);
        let mut records = store.load_all()?;

        if let Some(d) = date {
            records = records_for_date(&records, d.trim());
        }

        if let Some(p) = period {
            let bounds = period_bounds(p)?;
            records.retain(|r| in_bounds(&r.date, bounds));
        }

        if *open {
            records = open_records(&records);
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            print_records(&records, cfg.schema, cfg.show_weekday);
        }
    }

    Ok(())
}
