use crate::responses::{INTERNAL_SERVER_ERROR, ROLE_ADDED, ROLE_FETCH_FAILED, ROLE_REMOVED};
use async_trait::async_trait;
pub use domain_shared::discord::{RoleId, TransportError, UserId};
pub use domain_shared::environment::GuildEnv;
pub use domain_shared::roles::{RoleAssignment, RoleCreateRequest, RoleSummary};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Guild role management against the Discord REST API.
///
/// Every call issues exactly one request and keeps no state between calls.
#[async_trait]
pub trait GuildRolePort {
    /// Creates a role and returns Discord's role object as sent.
    async fn create_guild_role(
        &self,
        body: RoleCreateRequest,
        env: &GuildEnv,
    ) -> Result<Value, ServiceError>;

    /// Assigns a role to a member. A request that never completes surfaces
    /// as [`AddMemberRoleError::Transport`], unlike [`Self::remove_member_role`].
    async fn add_member_role(
        &self,
        body: RoleAssignment,
        env: &GuildEnv,
    ) -> Result<Acknowledgement, AddMemberRoleError>;

    async fn remove_member_role(
        &self,
        body: RoleAssignment,
        env: &GuildEnv,
    ) -> Result<RoleRemoved, ServiceError>;

    /// All roles of the guild, in Discord's order.
    async fn list_guild_roles(&self, env: &GuildEnv) -> Result<Vec<RoleSummary>, GuildRoleError>;

    /// First role named exactly `name`, or `None` on a miss.
    async fn find_guild_role_by_name(
        &self,
        name: &str,
        env: &GuildEnv,
    ) -> Result<Option<RoleSummary>, GuildRoleError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    pub fn role_added() -> Self {
        Self {
            message: ROLE_ADDED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRemoved {
    pub message: String,
    pub user_affected: RoleAssignment,
}

impl RoleRemoved {
    pub fn new(user_affected: RoleAssignment) -> Self {
        Self {
            message: ROLE_REMOVED.to_string(),
            user_affected,
        }
    }
}

/// Standardized `{ code, message }` failure returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} ({code})")]
pub struct ServiceError {
    pub code: u16,
    pub message: String,
}

impl ServiceError {
    pub fn internal_server_error() -> Self {
        Self {
            code: 500,
            message: INTERNAL_SERVER_ERROR.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GuildRoleError {
    #[error("{}", ROLE_FETCH_FAILED)]
    RoleFetchFailed,
}

#[derive(Debug, Error)]
pub enum AddMemberRoleError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Discord rejected the role assignment with status {status}")]
    Rejected { status: u16 },
}
