mod app;
mod commands;
mod effects;
mod logging;

pub use app::run_app;
