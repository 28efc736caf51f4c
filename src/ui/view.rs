use crate::models::schema::{
    COL_ACTIVITY, COL_DATE, COL_DAY, COL_LOGIN_TIME, COL_LOGOUT_TIME, COL_REMARKS,
    COL_SCHEDULED_TIME,
};
use crate::models::{Schema, SessionRecord};
use crate::utils::colors::{CYAN, EMPTY_CELL, GREY, color_for_time};
use crate::utils::table::{Cell, Table};

/// Build the on-screen grid for `records`, one column per schema column
/// (minus `Day` when `show_weekday` is off).
pub fn records_table(records: &[SessionRecord], schema: Schema, show_weekday: bool) -> Table {
    let columns: Vec<&str> = schema
        .columns()
        .iter()
        .copied()
        .filter(|c| show_weekday || *c != COL_DAY)
        .collect();

    let mut table = Table::new(std::iter::once("#").chain(columns.iter().copied()));

    for (i, rec) in records.iter().enumerate() {
        let mut row = vec![Cell::plain((i + 1).to_string())];
        for col in &columns {
            row.push(match *col {
                COL_DATE => Cell::plain(&rec.date),
                COL_DAY => Cell::plain(&rec.day),
                COL_SCHEDULED_TIME => optional(rec.scheduled_time.as_deref()),
                COL_ACTIVITY => Cell::colored(&rec.activity, CYAN),
                COL_LOGIN_TIME => Cell::colored(&rec.login_time, color_for_time(&rec.login_time, true)),
                COL_LOGOUT_TIME => {
                    let text = if rec.is_open() { EMPTY_CELL } else { rec.logout_time.as_str() };
                    Cell::colored(text, color_for_time(text, false))
                }
                COL_REMARKS => optional(rec.remarks.as_deref()),
                _ => Cell::plain(""),
            });
        }
        table.add_row(row);
    }

    table
}

fn optional(value: Option<&str>) -> Cell {
    match value {
        Some(v) => Cell::plain(v),
        None => Cell::colored("", GREY),
    }
}

pub fn print_records(records: &[SessionRecord], schema: Schema, show_weekday: bool) {
    if records.is_empty() {
        println!("No records.");
        return;
    }

    print!("{}", records_table(records, schema, show_weekday).render());

    let open = records.iter().filter(|r| r.is_open()).count();
    println!("{} record(s), {} open", records.len(), open);
}
