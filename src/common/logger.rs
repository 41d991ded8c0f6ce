use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the crate's `env_logger` backend.
///
/// The table never calls this itself; binaries, tests and benches opt in.
/// `RUST_LOG` overrides the defaults set here.
pub fn initialize_logger() {
    // call_once_force so a panicked earlier attempt does not poison the guard.
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("hashyt", LevelFilter::Info)
            .filter_module("hashyt::container", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the host application.
        let _ = builder.try_init();
    });
}
