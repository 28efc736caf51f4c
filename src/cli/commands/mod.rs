pub mod activities;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod logout;
pub mod remark;
