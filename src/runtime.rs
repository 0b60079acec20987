use tracing_subscriber::EnvFilter;

/// Plain-text logs for CloudWatch. Level comes from `RUST_LOG`, `info` if unset.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .init();
}
