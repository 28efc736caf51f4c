use crate::errors::AppResult;
use crate::models::activity::ACTIVITIES;
use crate::ui::messages::header;

pub fn handle() -> AppResult<()> {
    header("Activities");
    for (i, name) in ACTIVITIES.iter().enumerate() {
        println!("{:>2}. {}", i + 1, name);
    }
    Ok(())
}
