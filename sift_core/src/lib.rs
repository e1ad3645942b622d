pub mod config;
pub mod engine;
pub mod errors;
pub mod formatter;
pub mod matcher;
pub mod reader;
pub mod results;
pub mod splitter;

pub use config::Config;
pub use engine::run;
pub use errors::{SiftError, SiftResult};
pub use results::{Line, Match};
