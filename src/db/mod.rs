pub mod initialize;
pub mod log;
pub mod queries;
pub mod store;
pub mod table;

pub use store::RecordStore;
