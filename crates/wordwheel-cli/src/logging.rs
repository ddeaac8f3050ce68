use log::LevelFilter;

/// Install the `env_logger` backend.
///
/// `Info` by default, `Debug` when `debug_enabled`; `RUST_LOG` overrides
/// both when set. Logs go to stderr so `--json` output stays clean.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (tests, embedding) is harmless.
    let _ = builder.try_init();
    log::debug!("logger initialized at {level:?} level");
}
