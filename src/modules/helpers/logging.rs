use fern::Dispatch;
use snafu::ResultExt;

use crate::errors::{CustomResult, LoggingSnafu};
use crate::modules::config::Settings;

pub fn setup_logging(settings: &Settings) -> CustomResult<()> {
    let mut base_config = Dispatch::new()
        .level(settings.logging_level)
        // rocket logs every request itself, keep those to warnings
        .level_for("rocket", log::LevelFilter::Warn)
        .level_for("_", log::LevelFilter::Warn)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout());

    if let Some(path) = &settings.log_file {
        let file = fern::log_file(path)
            .map_err(fern::InitError::from)
            .context(LoggingSnafu)?;
        base_config = base_config.chain(file);
    }

    base_config
        .apply()
        .map_err(fern::InitError::from)
        .context(LoggingSnafu)?;

    Ok(())
}
