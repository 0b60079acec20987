use crate::error::GovernanceError;
use serde::Deserialize;
use serde_json::Value;
use std::convert::TryFrom;

/// Control Tower lifecycle event emitted when `CreateManagedAccount` finishes.
///
/// Only the fields the attacher reads are modelled. Every level is optional so
/// that a partial payload deserializes, while a payload of the wrong shape
/// (e.g. `accountId` as a number) is rejected.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct AccountCreatedEvent {
    pub detail: Option<LifecycleDetail>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleDetail {
    pub service_event_details: Option<ServiceEventDetails>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEventDetails {
    pub create_managed_account_status: Option<CreateManagedAccountStatus>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateManagedAccountStatus {
    pub account: Option<ManagedAccount>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAccount {
    pub account_id: Option<String>,
    pub account_name: Option<String>,
}

impl AccountCreatedEvent {
    fn account(&self) -> Option<&ManagedAccount> {
        self.detail
            .as_ref()?
            .service_event_details
            .as_ref()?
            .create_managed_account_status
            .as_ref()?
            .account
            .as_ref()
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account()?.account_id.as_deref()
    }

    pub fn account_name(&self) -> Option<&str> {
        self.account()?.account_name.as_deref()
    }
}

impl TryFrom<Value> for AccountCreatedEvent {
    type Error = GovernanceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(value)?)
    }
}

/// CloudTrail `CreateGroupMembership` call delivered through EventBridge.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct MembershipChangeEvent {
    pub detail: Option<MembershipDetail>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDetail {
    pub request_parameters: Option<RequestParameters>,
    pub user_identity: Option<UserIdentity>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    pub group_id: Option<String>,
    pub member: Option<Member>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub member_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub session_context: Option<SessionContext>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub session_issuer: Option<SessionIssuer>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionIssuer {
    pub user_name: Option<String>,
}

impl MembershipChangeEvent {
    fn request_parameters(&self) -> Option<&RequestParameters> {
        self.detail.as_ref()?.request_parameters.as_ref()
    }

    pub fn group_id(&self) -> Option<&str> {
        self.request_parameters()?.group_id.as_deref()
    }

    pub fn member_id(&self) -> Option<&str> {
        self.request_parameters()?.member.as_ref()?.member_id.as_deref()
    }

    /// Name of the role that made the change, or an empty string when the
    /// caller was not an assumed role.
    pub fn user_role(&self) -> &str {
        self.detail
            .as_ref()
            .and_then(|detail| detail.user_identity.as_ref())
            .and_then(|identity| identity.session_context.as_ref())
            .and_then(|context| context.session_issuer.as_ref())
            .and_then(|issuer| issuer.user_name.as_deref())
            .unwrap_or("")
    }
}

impl TryFrom<Value> for MembershipChangeEvent {
    type Error = GovernanceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(value)?)
    }
}
