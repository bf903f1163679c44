mod app;
mod cli;
mod config;

pub use app::app;
pub use cli::run;
