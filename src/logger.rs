use std::io::Write;

/// Installs the process logger. Warnings are always shown so skipped
/// manifests and missing template files are never silent.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format(|buf, record| {
            writeln!(buf, "{} [{}] {}", record.level(), record.target(), record.args())
        })
        .init();
}
