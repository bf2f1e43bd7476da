use std::{fs, io, path::Path, sync::Arc};

use optional_config as config;
use tracing::{Dispatch, Level, dispatcher};
use tracing_subscriber::{Registry, filter::Targets, fmt::writer::BoxMakeWriter, prelude::*};

use crate::ABSENT_TARGET;

const ABSENT_FILE: &str = "absent";

/// Installs a global subscriber dumping absent-retrieval events to `<log_dir>/absent` if
/// `dump_trace` is set. Does nothing otherwise.
pub fn install() -> io::Result<()> {
    if config::dump_trace() {
        install_in(config::log_dir())?;
    }
    Ok(())
}

/// Like [`install`] but ignores the `dump_trace` flag and writes into `log_dir`.
///
/// If the process already has a global subscriber it is left in place, no events are dumped and
/// an existing dump file is not touched.
pub fn install_in(log_dir: &Path) -> io::Result<()> {
    if dispatcher::has_been_set() {
        tracing::debug!("global subscriber already installed, not dumping absent retrievals");
        return Ok(());
    }
    fs::create_dir_all(log_dir)?;
    let file = fs::File::create(log_dir.join(ABSENT_FILE))?;
    let writer = BoxMakeWriter::new(Arc::new(file));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .json()
        .with_filter(Targets::new().with_target(ABSENT_TARGET, Level::TRACE));
    let dispatch = Dispatch::new(Registry::default().with(fmt_layer));
    if dispatch.try_init().is_err() {
        tracing::debug!("global subscriber already installed, not dumping absent retrievals");
    }
    Ok(())
}
