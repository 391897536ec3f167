use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes tracing for the CLI.
///
/// Logs go to stderr so table output on stdout stays pipeable. `RUST_LOG`
/// overrides the default filter; schema-validation diagnostics from the
/// client live at debug level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("homologa=warn,homologa_client=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
