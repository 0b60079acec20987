use account_governance::config::{GuardConfig, StdEnvSource};
use account_governance::guard::block_admin_group;
use account_governance::identity_store_client::IdentityStoreClient;
use account_governance::runtime::init_tracing;

use anyhow::Context;
use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = GuardConfig::load(&StdEnvSource)
        .context("Failed to load admin group guard configuration")?;
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = IdentityStoreClient::new(&sdk_config);

    let config = &config;
    let client = &client;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let (payload, _context) = event.into_parts();
        Ok::<_, Error>(block_admin_group(payload, config, client).await?)
    }))
    .await
}
