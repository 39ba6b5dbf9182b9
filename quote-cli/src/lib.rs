pub mod app;
pub mod config;
pub mod logging;
pub mod render;
pub mod state;
pub mod utils;
