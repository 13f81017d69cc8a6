pub mod cli;
pub mod config;
pub mod export;
pub mod form;
pub mod logging;
pub mod ui;
