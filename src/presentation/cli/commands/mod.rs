pub mod config;
pub mod daemon;
pub mod info;
pub mod status;
