use crate::error::GovernanceError;
use async_trait::async_trait;

use aws_sdk_identitystore::operation::RequestId;
use aws_sdk_identitystore::types::MemberId;
use aws_sdk_identitystore::Client;

/// What the service sends back for a deleted membership. The response body is
/// empty, so the request id is all there is to keep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletionReceipt {
    pub request_id: Option<String>,
}

#[async_trait]
pub trait RevokeMembership: Send + Sync {
    async fn group_membership_id(
        &self,
        identity_store_id: &str,
        group_id: &str,
        user_id: &str,
    ) -> Result<String, GovernanceError>;

    async fn delete_group_membership(
        &self,
        identity_store_id: &str,
        membership_id: &str,
    ) -> Result<DeletionReceipt, GovernanceError>;
}

pub struct IdentityStoreClient {
    client: Client,
}

#[async_trait]
impl RevokeMembership for IdentityStoreClient {
    async fn group_membership_id(
        &self,
        identity_store_id: &str,
        group_id: &str,
        user_id: &str,
    ) -> Result<String, GovernanceError> {
        let output = self
            .client
            .get_group_membership_id()
            .identity_store_id(identity_store_id)
            .group_id(group_id)
            .member_id(MemberId::UserId(user_id.to_string()))
            .send()
            .await?;
        Ok(output.membership_id().to_string())
    }

    async fn delete_group_membership(
        &self,
        identity_store_id: &str,
        membership_id: &str,
    ) -> Result<DeletionReceipt, GovernanceError> {
        let output = self
            .client
            .delete_group_membership()
            .identity_store_id(identity_store_id)
            .membership_id(membership_id)
            .send()
            .await?;
        Ok(DeletionReceipt {
            request_id: output.request_id().map(str::to_string),
        })
    }
}

impl IdentityStoreClient {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new_with_client(Client::new(sdk_config))
    }

    pub fn new_with_client(client: Client) -> Self {
        IdentityStoreClient { client }
    }
}
