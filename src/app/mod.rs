pub mod cli;
pub mod commands;
pub mod config;
mod context;

pub use config::AnamaliaConfig;
pub use context::AppContext;
