pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod logging;
pub mod resolution;

pub use context::AppContext;
