use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `--verbose` forces debug output for
/// this crate; otherwise `RUST_LOG` applies, falling back to warnings only.
pub(super) fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("custbook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
