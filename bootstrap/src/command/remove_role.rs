use crate::command::{print_outcome, Completion};
use application_ports::guild_role::{GuildRolePort, RoleAssignment, RoleId, UserId};
use clap::Args;
use domain_shared::environment::GuildEnv;
use std::io::Write;
use tracing::instrument;

#[derive(Args, Debug)]
pub struct RemoveRoleArgs {
    /// ID of the member losing the role
    #[arg(long = "user")]
    pub user_id: String,
    /// ID of the role to revoke
    #[arg(long = "role")]
    pub role_id: String,
}

#[instrument(level = "info", skip(port, env, out))]
pub async fn run(
    port: &(dyn GuildRolePort + Send + Sync),
    env: &GuildEnv,
    args: RemoveRoleArgs,
    out: &mut impl Write,
) -> anyhow::Result<Completion> {
    let RemoveRoleArgs { user_id, role_id } = args;
    let body = RoleAssignment::new(UserId(user_id), RoleId(role_id));

    match port.remove_member_role(body, env).await {
        Ok(removed) => {
            print_outcome(out, &removed)?;
            Ok(Completion::Succeeded)
        }
        Err(err) => {
            print_outcome(out, &err)?;
            Ok(Completion::Failed)
        }
    }
}
