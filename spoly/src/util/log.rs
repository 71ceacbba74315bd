use log::LevelFilter;

// `--log` verbosity: 0 = off, 1 = info, 2 = debug, 3.. = trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Calculator results go to stdout, so the logger only ever writes to stderr.
pub fn init_stderr_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Debug)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto
    )
}
