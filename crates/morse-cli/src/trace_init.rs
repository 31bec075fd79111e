use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Log to stderr so stdout stays clean for piping. `RUST_LOG` wins over
/// `verbose`.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let default_filter = if verbose {
            "morse_core=debug,morse_cli=debug"
        } else {
            "morse_core=warn"
        };
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_filter)),
            )
            .init();
    });
}
