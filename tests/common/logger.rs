use std::sync::Once;

use hashyt::common::logger as core_logger;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Quiet by default; RUST_LOG=hashyt=debug shows every insert and resize
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        core_logger::initialize_logger();
    });
}
