use crate::command::{print_outcome, Completion};
use application_ports::guild_role::GuildRolePort;
use clap::Args;
use domain_shared::environment::GuildEnv;
use std::io::Write;
use tracing::instrument;

#[derive(Args, Debug)]
pub struct ListRolesArgs {}

#[instrument(level = "info", skip(port, env, args, out))]
pub async fn run(
    port: &(dyn GuildRolePort + Send + Sync),
    env: &GuildEnv,
    args: ListRolesArgs,
    out: &mut impl Write,
) -> anyhow::Result<Completion> {
    let ListRolesArgs {} = args;

    let roles = port.list_guild_roles(env).await?;

    print_outcome(out, &roles)?;
    Ok(Completion::Succeeded)
}
