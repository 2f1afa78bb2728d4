#![allow(clippy::expect_used)]

mod common;
mod config_test;
mod engine_test;
mod session_test;
