use application_ports::guild_role::{
    Acknowledgement, AddMemberRoleError, GuildRoleError, GuildRolePort, RoleRemoved, ServiceError,
};
use async_trait::async_trait;
use domain::guild_role::{
    add_member_role_request, create_role_request, find_role_by_name, list_roles_request,
    remove_member_role_request, RoleAssignment, RoleCreateRequest, RoleSummary,
};
use domain::ports::discord::{DiscordHttpPort, DiscordResponse, TransportError};
use domain_shared::environment::GuildEnv;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct GuildRoleService {
    discord_http_port: Arc<dyn DiscordHttpPort + Send + Sync>,
}

impl GuildRoleService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(discord_http_port: Arc<dyn DiscordHttpPort + Send + Sync>) -> Self {
        Self { discord_http_port }
    }
}

#[async_trait]
impl GuildRolePort for GuildRoleService {
    #[instrument(level = "info", skip(self, body, env), fields(guild_id = %env.guild_id))]
    async fn create_guild_role(
        &self,
        body: RoleCreateRequest,
        env: &GuildEnv,
    ) -> Result<Value, ServiceError> {
        let response = self
            .discord_http_port
            .send(create_role_request(&body, env))
            .await
            .map_err(map_transport_to_service_err)?;
        let response = ensure_success(response).map_err(map_status_to_service_err)?;

        let role = response.json::<Value>().map_err(|err| {
            error!("Failed to parse created role: {:?}", err);
            ServiceError::internal_server_error()
        })?;

        info!(role_name = %body.role_name, "Guild role created");

        Ok(role)
    }

    #[instrument(level = "info", skip(self, body, env), fields(guild_id = %env.guild_id))]
    async fn add_member_role(
        &self,
        body: RoleAssignment,
        env: &GuildEnv,
    ) -> Result<Acknowledgement, AddMemberRoleError> {
        let response = self
            .discord_http_port
            .send(add_member_role_request(&body, env))
            .await?;
        ensure_success(response).map_err(|status| AddMemberRoleError::Rejected { status })?;

        info!(
            user_id = %body.user_id,
            role_id = %body.role_id,
            "Role added to member"
        );

        Ok(Acknowledgement::role_added())
    }

    #[instrument(level = "info", skip(self, body, env), fields(guild_id = %env.guild_id))]
    async fn remove_member_role(
        &self,
        body: RoleAssignment,
        env: &GuildEnv,
    ) -> Result<RoleRemoved, ServiceError> {
        let response = self
            .discord_http_port
            .send(remove_member_role_request(&body, env))
            .await
            .map_err(map_transport_to_service_err)?;
        ensure_success(response).map_err(map_status_to_service_err)?;

        info!(
            user_id = %body.user_id,
            role_id = %body.role_id,
            "Role removed from member"
        );

        Ok(RoleRemoved::new(body))
    }

    #[instrument(level = "debug", skip(self, env), fields(guild_id = %env.guild_id))]
    async fn list_guild_roles(&self, env: &GuildEnv) -> Result<Vec<RoleSummary>, GuildRoleError> {
        let response = self
            .discord_http_port
            .send(list_roles_request(env))
            .await
            .map_err(|err| {
                warn!("Guild roles request failed: {:?}", err);
                GuildRoleError::RoleFetchFailed
            })?;
        let response = ensure_success(response).map_err(|status| {
            warn!(status, "Discord refused to list guild roles");
            GuildRoleError::RoleFetchFailed
        })?;

        response.json::<Vec<RoleSummary>>().map_err(|err| {
            error!("Failed to parse guild roles: {:?}", err);
            GuildRoleError::RoleFetchFailed
        })
    }

    #[instrument(level = "debug", skip(self, env), fields(guild_id = %env.guild_id))]
    async fn find_guild_role_by_name(
        &self,
        name: &str,
        env: &GuildEnv,
    ) -> Result<Option<RoleSummary>, GuildRoleError> {
        let roles = self.list_guild_roles(env).await?;

        Ok(find_role_by_name(roles, name))
    }
}

/// Passes 2xx responses through and hands back the status of anything else.
fn ensure_success(response: DiscordResponse) -> Result<DiscordResponse, u16> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(response.status)
    }
}

#[instrument(level = "trace", skip_all)]
fn map_transport_to_service_err(err: TransportError) -> ServiceError {
    error!("Discord request failed: {:?}", err);
    ServiceError::internal_server_error()
}

#[instrument(level = "trace", skip_all)]
fn map_status_to_service_err(status: u16) -> ServiceError {
    error!(status, "Discord responded with a non-success status");
    ServiceError::internal_server_error()
}
