use crate::config::AttacherConfig;
use crate::error::GovernanceError;
use crate::event::AccountCreatedEvent;
use crate::sso_admin_client::{Assign, AssignmentRequest};
use serde::Serialize;
use serde_json::Value;
use std::convert::TryFrom;
use tracing::{error, info};

pub const ATTACHED: &str = "Permission set attached";
pub const FAILED: &str = "Failed";

#[derive(Debug, PartialEq, Serialize)]
pub struct AttachOutput {
    pub status: &'static str,
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AttachOutput {
    fn failed(account_id: Option<String>, error: &GovernanceError) -> Self {
        error!(account_id = ?account_id, error = %error, "Failed to attach permission set");
        AttachOutput {
            status: FAILED,
            account_id,
            request_id: None,
            assignment_status: None,
            reason: Some(error.to_string()),
        }
    }
}

/// Assigns the configured permission set to the account named in a Control
/// Tower `CreateManagedAccount` event.
///
/// Never fails: a malformed event or a rejected call is logged and reported
/// in the returned record, so the platform does not retry the invocation.
pub async fn attach_permission_set<C: Assign>(
    event: Value,
    config: &AttacherConfig,
    client: &C,
) -> AttachOutput {
    let event = match AccountCreatedEvent::try_from(event) {
        Ok(event) => event,
        Err(error) => return AttachOutput::failed(None, &error),
    };
    let account_id = match event.account_id() {
        Some(account_id) => account_id.to_string(),
        None => {
            let error = GovernanceError::MissingField(
                "detail.serviceEventDetails.createManagedAccountStatus.account.accountId",
            );
            return AttachOutput::failed(None, &error);
        }
    };

    info!(
        account_id = %account_id,
        account_name = ?event.account_name(),
        "Attaching permission set to account"
    );

    let request = AssignmentRequest::new(config, &account_id);
    match client.create_account_assignment(&request).await {
        Ok(status) => {
            info!(
                account_id = %account_id,
                request_id = ?status.request_id,
                status = ?status.status,
                failure_reason = ?status.failure_reason,
                "Permission set attached successfully"
            );
            AttachOutput {
                status: ATTACHED,
                account_id: Some(account_id),
                request_id: status.request_id,
                assignment_status: status.status,
                reason: None,
            }
        }
        Err(error) => AttachOutput::failed(Some(account_id), &error),
    }
}
