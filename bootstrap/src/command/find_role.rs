use crate::command::{print_outcome, Completion};
use application_ports::guild_role::GuildRolePort;
use clap::Args;
use domain_shared::environment::GuildEnv;
use std::io::Write;
use tracing::{info, instrument};

#[derive(Args, Debug)]
pub struct FindRoleArgs {
    /// Exact, case-sensitive role name, e.g. "@everyone"
    pub name: String,
}

/// Prints the matching role, or `null` when no role has that name. A miss is
/// a normal answer, not a failure.
#[instrument(level = "info", skip(port, env, out))]
pub async fn run(
    port: &(dyn GuildRolePort + Send + Sync),
    env: &GuildEnv,
    args: FindRoleArgs,
    out: &mut impl Write,
) -> anyhow::Result<Completion> {
    let FindRoleArgs { name } = args;

    let role = port.find_guild_role_by_name(&name, env).await?;
    if role.is_none() {
        info!(guild_id = %env.guild_id, "No role named {:?}", name);
    }

    print_outcome(out, &role)?;
    Ok(Completion::Succeeded)
}
