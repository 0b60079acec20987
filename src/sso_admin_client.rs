use crate::config::AttacherConfig;
use crate::error::GovernanceError;
use async_trait::async_trait;

use aws_sdk_ssoadmin::types::{AccountAssignmentOperationStatus, PrincipalType, TargetType};
use aws_sdk_ssoadmin::Client;

/// Everything `CreateAccountAssignment` needs for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRequest {
    pub instance_arn: String,
    pub permission_set_arn: String,
    pub principal_id: String,
    pub principal_type: String,
    pub target_id: String,
    pub target_type: String,
}

impl AssignmentRequest {
    pub fn new(config: &AttacherConfig, target_id: &str) -> Self {
        AssignmentRequest {
            instance_arn: config.instance_arn.clone(),
            permission_set_arn: config.permission_set_arn.clone(),
            principal_id: config.principal_id.clone(),
            principal_type: config.principal_type.clone(),
            target_id: target_id.to_string(),
            target_type: config.target_type.clone(),
        }
    }
}

/// Handle for the asynchronous provisioning the service kicks off.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentStatus {
    pub request_id: Option<String>,
    pub status: Option<String>,
    pub failure_reason: Option<String>,
}

impl From<&AccountAssignmentOperationStatus> for AssignmentStatus {
    fn from(status: &AccountAssignmentOperationStatus) -> Self {
        AssignmentStatus {
            request_id: status.request_id().map(str::to_string),
            status: status.status().map(|value| value.as_str().to_string()),
            failure_reason: status.failure_reason().map(str::to_string),
        }
    }
}

#[async_trait]
pub trait Assign: Send + Sync {
    async fn create_account_assignment(
        &self,
        request: &AssignmentRequest,
    ) -> Result<AssignmentStatus, GovernanceError>;
}

pub struct SsoAdminClient {
    client: Client,
}

#[async_trait]
impl Assign for SsoAdminClient {
    async fn create_account_assignment(
        &self,
        request: &AssignmentRequest,
    ) -> Result<AssignmentStatus, GovernanceError> {
        let output = self
            .client
            .create_account_assignment()
            .instance_arn(&request.instance_arn)
            .permission_set_arn(&request.permission_set_arn)
            .principal_id(&request.principal_id)
            .principal_type(PrincipalType::from(request.principal_type.as_str()))
            .target_id(&request.target_id)
            .target_type(TargetType::from(request.target_type.as_str()))
            .send()
            .await?;

        Ok(output
            .account_assignment_creation_status()
            .map(AssignmentStatus::from)
            .unwrap_or_default())
    }
}

impl SsoAdminClient {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new_with_client(Client::new(sdk_config))
    }

    pub fn new_with_client(client: Client) -> Self {
        SsoAdminClient { client }
    }
}
