use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "warn";

static INIT: Once = Once::new();

/// Installs the global subscriber. Level comes from `RUST_LOG`, defaulting to
/// `warn`. Output goes to stderr so demo text on stdout stays clean.
/// Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();

        if installed.is_err() {
            tracing::debug!("global subscriber already set");
        }
    });
}

#[cfg(test)]
pub fn init_for_tests() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(
            "query_demos=debug"
                .parse()
                .expect("static directive parses"),
        );

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
