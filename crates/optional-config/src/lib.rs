pub mod flags;

use std::path::{Path, PathBuf};

pub use flags::{ENV_PREFIX, Flags};
use flags::FLAGS;

/// Names of the configuration files looked up from the current directory upwards, in order of
/// preference.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["optional.toml", ".optional.toml"];

pub fn dump_trace() -> bool {
    FLAGS.dump_trace
}

pub fn log_dir() -> &'static Path {
    &FLAGS.log_dir
}

/// Returns the first configuration file found in `start` or one of its ancestors.
pub fn config_path_from(start: &Path) -> Option<PathBuf> {
    let mut path = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let file = path.join(name);
            if file.exists() {
                return Some(file);
            }
        }
        if !path.pop() {
            return None;
        }
    }
}
