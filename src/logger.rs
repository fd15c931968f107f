use anyhow::Result;
use simple_logger::init_with_level;

const DEBUG_ENV: &str = "RUNNER_DEBUG";

pub fn init() -> Result<()> {
    init_with_level(level(std::env::var(DEBUG_ENV).ok().as_deref()))?;

    Ok(())
}

/// The runner exports `RUNNER_DEBUG=1` when step debug logging is enabled
fn level(runner_debug: Option<&str>) -> log::Level {
    match runner_debug {
        Some("1") => log::Level::Debug,
        _ => log::Level::Info,
    }
}
