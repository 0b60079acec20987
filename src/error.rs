use std::error::Error;

use aws_sdk_identitystore::operation::delete_group_membership::DeleteGroupMembershipError;
use aws_sdk_identitystore::operation::get_group_membership_id::GetGroupMembershipIdError;
use aws_sdk_ssoadmin::error::{DisplayErrorContext, SdkError};
use aws_sdk_ssoadmin::operation::create_account_assignment::CreateAccountAssignmentError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum GovernanceError {
    MissingVariable(&'static str),
    InvalidVariable {
        name: &'static str,
        value: String,
    },
    MalformedEvent(serde_json::Error),
    MissingField(&'static str),
    Service {
        operation: &'static str,
        message: String,
    },
}

impl GovernanceError {
    /// Wraps a failed API call. SDK errors only print their outermost layer,
    /// so the whole chain is flattened into the message and not kept as a
    /// source.
    pub fn service<E: Error>(operation: &'static str, error: E) -> Self {
        GovernanceError::Service {
            operation,
            message: DisplayErrorContext(&error).to_string(),
        }
    }
}

impl Display for GovernanceError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            GovernanceError::MissingVariable(name) => {
                write!(f, "Environment variable {} is not set", name)
            }
            GovernanceError::InvalidVariable { name, ref value } => {
                write!(f, "Environment variable {} has invalid value {:?}", name, value)
            }
            GovernanceError::MalformedEvent(ref error) => {
                write!(f, "Event does not match the expected shape: {}", error)
            }
            GovernanceError::MissingField(path) => write!(f, "Event field {} is missing", path),
            GovernanceError::Service {
                operation,
                ref message,
            } => write!(f, "{} failed: {}", operation, message),
        }
    }
}

impl Error for GovernanceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            GovernanceError::MalformedEvent(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GovernanceError {
    fn from(e: serde_json::Error) -> GovernanceError {
        GovernanceError::MalformedEvent(e)
    }
}

impl From<SdkError<CreateAccountAssignmentError>> for GovernanceError {
    fn from(e: SdkError<CreateAccountAssignmentError>) -> GovernanceError {
        GovernanceError::service("CreateAccountAssignment", e)
    }
}

impl From<SdkError<GetGroupMembershipIdError>> for GovernanceError {
    fn from(e: SdkError<GetGroupMembershipIdError>) -> GovernanceError {
        GovernanceError::service("GetGroupMembershipId", e)
    }
}

impl From<SdkError<DeleteGroupMembershipError>> for GovernanceError {
    fn from(e: SdkError<DeleteGroupMembershipError>) -> GovernanceError {
        GovernanceError::service("DeleteGroupMembership", e)
    }
}
