use anyhow::Result;

/// Sends log records to `log_file`. The terminal is busy drawing the
/// interface, so without a file nothing is logged.
pub fn set_up_logging(log_file: Option<&str>) -> Result<()> {
    let log_file = match log_file {
        Some(log_file) => log_file,
        None => return Ok(()),
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{time} {level} {target}] {message}",
                time = chrono::offset::Local::now().format("%H:%M:%S%.3f"),
                level = record.level(),
                target = record.target(),
                message = message,
            ))
        })
        // Keep dependencies quiet
        .level(log::LevelFilter::Warn)
        .level_for("data_organizer", log::LevelFilter::Debug)
        .level_for("terminal_ui", log::LevelFilter::Debug)
        .chain(fern::log_file(log_file)?)
        .apply()?;

    Ok(())
}
