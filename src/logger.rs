use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Dependencies stay at `Warn`; only this crate follows `--verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level(env!("CARGO_CRATE_NAME"), level)
        .init()?;

    Ok(())
}
