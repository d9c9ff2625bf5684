use tracing_subscriber::{EnvFilter, fmt};

/// Stderr logging, quiet unless `RUST_LOG` says otherwise.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    // A global subscriber may already be installed when tests drive this
    // path; keep whichever got there first.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
