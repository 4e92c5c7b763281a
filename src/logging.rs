//! Logger setup for the demo binaries.

use log::LevelFilter;

/// Installs a [`fern`] dispatcher writing timestamped lines to stderr.
///
/// Calling this twice is harmless; the second call keeps the logger that is already installed.
pub fn init(level: LevelFilter) {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // gltf logs every extension it skips
        .level_for("gltf", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply();

    if result.is_err() {
        log::debug!("Logger already initialised");
    }
}
