pub mod conf;
pub mod config;
pub mod errors;
pub mod list;
pub mod wrap;

// Command-line plumbing used by the binary
pub mod commands;

// Re-export commonly used types
pub use conf::{index_width, line_budget, TwConf, TwConfBuilder};
pub use errors::{AppError, AppResult, ConfError};
pub use wrap::{is_breakable_space, is_list_item};
