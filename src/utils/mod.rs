mod config_path;
mod input;

pub use config_path::resolve_config_path;
pub use input::{modified_time, read_input};
