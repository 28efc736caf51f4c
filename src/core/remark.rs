use crate::core::{lookup_activity, selected};
use crate::db::queries::find_first;
use crate::errors::{AppError, AppResult};
use crate::models::{Schema, SessionKey, SessionRecord};

pub struct RemarkLogic;

impl RemarkLogic {
    /// Overwrite the remark of the first record for (date, activity),
    /// whether or not it is still open.
    pub fn apply(
        records: &mut [SessionRecord],
        schema: Schema,
        date: Option<&str>,
        activity: Option<&str>,
        remark: Option<&str>,
    ) -> AppResult<SessionRecord> {
        if !schema.has_remarks() {
            return Err(AppError::Unsupported(format!("{} schema", schema)));
        }

        let (date, activity) = match (selected(date), selected(activity)) {
            (Some(d), Some(a)) => (d, lookup_activity(schema, a)),
            _ => return Err(AppError::NoSelection),
        };

        let remark = selected(remark).ok_or(AppError::EmptyRemark)?;

        let key = SessionKey {
            date: date.to_string(),
            activity: Some(activity.clone()),
        };

        let idx = find_first(records, &key).ok_or_else(|| AppError::RecordNotFound {
            date: date.to_string(),
            activity,
        })?;

        records[idx].remarks = Some(remark.to_string());
        Ok(records[idx].clone())
    }
}
