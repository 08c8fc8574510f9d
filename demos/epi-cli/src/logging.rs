//! stderr logger setup.
//!
//! The day report goes to stdout, so log records are kept on stderr where
//! they cannot corrupt it.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

// ISO 8601 timestamp, colour-coded level, module target.
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

pub fn init(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| anyhow!("failed to build log config: {e}"))?;

    log4rs::init_config(config).map_err(|e| anyhow!("failed to install logger: {e}"))?;
    Ok(())
}
