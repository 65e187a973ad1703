pub mod config;
pub mod csv_loader;
pub mod display;
pub mod logging;
pub mod options;
pub mod report;
pub mod utils;
