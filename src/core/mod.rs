pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod journal;
pub mod log;
pub mod settings;
pub mod sheet;
pub mod summary;
