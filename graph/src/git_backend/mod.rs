pub mod walker;
pub mod log_parser;

pub use walker::{GitWalker, DEFAULT_ABBREV};
pub use log_parser::{history_from_log, parse_log, LOG_FORMAT};
