mod app;
mod cli;
mod effects;
mod settings;
mod ui;

pub use app::run_app;
