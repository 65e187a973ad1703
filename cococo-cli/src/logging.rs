use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
///
/// Reports go to stdout, so the default stays at `warn`.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Writes to stderr so JSON on stdout stays parseable.
/// * Strips timestamps and target names to keep CLI output clean.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_level() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
    }
}
