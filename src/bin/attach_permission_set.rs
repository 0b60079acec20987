use account_governance::attach::attach_permission_set;
use account_governance::config::{AttacherConfig, StdEnvSource};
use account_governance::runtime::init_tracing;
use account_governance::sso_admin_client::SsoAdminClient;

use anyhow::Context;
use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = AttacherConfig::load(&StdEnvSource)
        .context("Failed to load permission set attacher configuration")?;
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = SsoAdminClient::new(&sdk_config);

    let config = &config;
    let client = &client;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let (payload, _context) = event.into_parts();
        Ok::<_, Error>(attach_permission_set(payload, config, client).await)
    }))
    .await
}
