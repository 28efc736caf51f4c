pub mod activity;
pub mod record;
pub mod schema;

pub use record::{SessionKey, SessionRecord};
pub use schema::Schema;
