use crate::ports::discord::{DiscordRequest, HttpMethod};
use domain_shared::discord::GuildId;
pub use domain_shared::roles::{RoleAssignment, RoleCreateRequest, RoleSummary};
use domain_shared::environment::GuildEnv;
use serde_json::Value;
use tracing::instrument;

/// Wire body for `POST /guilds/{guild}/roles`.
#[instrument(level = "trace", skip_all)]
pub fn role_create_payload(request: &RoleCreateRequest) -> Value {
    let mut payload = request.fields.clone();
    payload.insert("name".to_string(), Value::String(request.role_name.clone()));
    Value::Object(payload)
}

/// `guilds/{guild}/roles`, one entry per path segment.
pub fn guild_roles_path(guild_id: &GuildId) -> Vec<String> {
    vec!["guilds".to_string(), guild_id.0.clone(), "roles".to_string()]
}

/// `guilds/{guild}/members/{user}/roles/{role}`. Ids are kept whole, each in
/// its own segment, whatever characters they contain.
pub fn member_role_path(guild_id: &GuildId, assignment: &RoleAssignment) -> Vec<String> {
    vec![
        "guilds".to_string(),
        guild_id.0.clone(),
        "members".to_string(),
        assignment.user_id.0.clone(),
        "roles".to_string(),
        assignment.role_id.0.clone(),
    ]
}

#[instrument(level = "trace", skip_all)]
pub fn create_role_request(request: &RoleCreateRequest, env: &GuildEnv) -> DiscordRequest {
    DiscordRequest {
        method: HttpMethod::Post,
        path_segments: guild_roles_path(&env.guild_id),
        bot_token: env.bot_token.clone(),
        body: Some(role_create_payload(request)),
    }
}

#[instrument(level = "trace", skip_all)]
pub fn add_member_role_request(assignment: &RoleAssignment, env: &GuildEnv) -> DiscordRequest {
    DiscordRequest {
        method: HttpMethod::Put,
        path_segments: member_role_path(&env.guild_id, assignment),
        bot_token: env.bot_token.clone(),
        body: None,
    }
}

#[instrument(level = "trace", skip_all)]
pub fn remove_member_role_request(assignment: &RoleAssignment, env: &GuildEnv) -> DiscordRequest {
    DiscordRequest {
        method: HttpMethod::Delete,
        path_segments: member_role_path(&env.guild_id, assignment),
        bot_token: env.bot_token.clone(),
        body: None,
    }
}

#[instrument(level = "trace", skip_all)]
pub fn list_roles_request(env: &GuildEnv) -> DiscordRequest {
    DiscordRequest {
        method: HttpMethod::Get,
        path_segments: guild_roles_path(&env.guild_id),
        bot_token: env.bot_token.clone(),
        body: None,
    }
}

/// First role whose name is exactly `name`. No case folding or trimming:
/// `@everyone` and `everyone` are different roles.
#[instrument(level = "trace", skip(roles))]
pub fn find_role_by_name(roles: Vec<RoleSummary>, name: &str) -> Option<RoleSummary> {
    roles.into_iter().find(|role| role.name == name)
}
