use crate::config::GuardConfig;
use crate::error::GovernanceError;
use crate::event::MembershipChangeEvent;
use crate::identity_store_client::RevokeMembership;
use serde::Serialize;
use serde_json::Value;
use std::convert::TryFrom;
use tracing::info;

/// Role name fragment of the break-glass administrator permission set.
pub const BREAK_GLASS_ROLE: &str = "AWSReservedSSO_AWSAdministratorAccess";

pub const NO_ACTION: &str = "No action taken";
pub const DELETED: &str = "Membership deleted";

#[derive(Debug, PartialEq)]
pub enum Decision {
    ExemptRole,
    Revert,
    Ignore,
}

/// First match wins: an exempt role beats a protected group.
pub fn decide(event: &MembershipChangeEvent, config: &GuardConfig) -> Decision {
    if event.user_role().contains(BREAK_GLASS_ROLE) {
        Decision::ExemptRole
    } else if event.group_id() == Some(config.protected_group_id.as_str()) {
        Decision::Revert
    } else {
        Decision::Ignore
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct GuardOutput {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_id: Option<String>,
    pub group_id: Option<String>,
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Reverts additions to the protected admin group unless the break-glass role
/// made them. Service errors are returned so the platform sees a failed
/// invocation.
pub async fn block_admin_group<C: RevokeMembership>(
    event: Value,
    config: &GuardConfig,
    client: &C,
) -> Result<GuardOutput, GovernanceError> {
    let event = MembershipChangeEvent::try_from(event)?;
    let group_id = event.group_id().map(str::to_string);
    let user_id = event.member_id().map(str::to_string);
    let user_role = event.user_role();

    match decide(&event, config) {
        Decision::ExemptRole => {
            info!(
                user_role = %user_role,
                "User role contains {}. No action taken.",
                BREAK_GLASS_ROLE
            );
            Ok(GuardOutput {
                status: NO_ACTION,
                reason: Some(format!("User role contains {}", BREAK_GLASS_ROLE)),
                user_role: Some(user_role.to_string()),
                membership_id: None,
                group_id,
                user_id,
                request_id: None,
            })
        }
        Decision::Revert => {
            let member_id = user_id
                .as_deref()
                .ok_or(GovernanceError::MissingField(
                    "detail.requestParameters.member.memberId",
                ))?;
            let membership_id = client
                .group_membership_id(
                    &config.identity_store_id,
                    &config.protected_group_id,
                    member_id,
                )
                .await?;
            let receipt = client
                .delete_group_membership(&config.identity_store_id, &membership_id)
                .await?;

            info!(
                membership_id = %membership_id,
                user_id = %member_id,
                group_id = %config.protected_group_id,
                user_role = %user_role,
                "Membership deleted from group"
            );
            Ok(GuardOutput {
                status: DELETED,
                reason: None,
                user_role: None,
                membership_id: Some(membership_id),
                group_id,
                user_id,
                request_id: receipt.request_id,
            })
        }
        Decision::Ignore => {
            info!(group_id = ?group_id, "Group ID does not match protected group");
            Ok(GuardOutput {
                status: NO_ACTION,
                reason: None,
                user_role: None,
                membership_id: None,
                group_id,
                user_id,
                request_id: None,
            })
        }
    }
}
