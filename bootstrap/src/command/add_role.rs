use crate::command::{print_outcome, Completion};
use application_ports::guild_role::{GuildRolePort, RoleAssignment, RoleId, UserId};
use clap::Args;
use domain_shared::environment::GuildEnv;
use std::io::Write;
use tracing::instrument;

#[derive(Args, Debug)]
pub struct AddRoleArgs {
    /// ID of the member receiving the role
    #[arg(long = "user")]
    pub user_id: String,
    /// ID of the role to assign
    #[arg(long = "role")]
    pub role_id: String,
}

#[instrument(level = "info", skip(port, env, out))]
pub async fn run(
    port: &(dyn GuildRolePort + Send + Sync),
    env: &GuildEnv,
    args: AddRoleArgs,
    out: &mut impl Write,
) -> anyhow::Result<Completion> {
    let AddRoleArgs { user_id, role_id } = args;
    let body = RoleAssignment::new(UserId(user_id), RoleId(role_id));

    let acknowledgement = port.add_member_role(body, env).await?;

    print_outcome(out, &acknowledgement)?;
    Ok(Completion::Succeeded)
}
