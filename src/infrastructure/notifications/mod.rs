pub mod composite;
pub mod log_file;
pub mod terminal;
