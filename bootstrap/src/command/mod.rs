pub mod add_role;
pub mod create_role;
pub mod find_role;
pub mod list_roles;
pub mod remove_role;

use crate::args::CommonArgs;
use crate::command::add_role::AddRoleArgs;
use crate::command::create_role::CreateRoleArgs;
use crate::command::find_role::FindRoleArgs;
use crate::command::list_roles::ListRolesArgs;
use crate::command::remove_role::RemoveRoleArgs;
use application::guild_role::GuildRoleService;
use clap::Subcommand;
use domain_shared::discord::GuildId;
use domain_shared::environment::{BotToken, GuildEnv};
use infrastructure::discord::{DiscordHttpAdapter, DiscordHttpAdapterConfig};
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::instrument;

#[derive(Subcommand)]
pub enum Command {
    /// Create a role in the guild
    #[command(name = "create-role")]
    CreateRole(CreateRoleArgs),
    /// Assign a role to a member
    #[command(name = "add-role")]
    AddRole(AddRoleArgs),
    /// Revoke a role from a member
    #[command(name = "remove-role")]
    RemoveRole(RemoveRoleArgs),
    /// List every role of the guild
    #[command(name = "list-roles")]
    ListRoles(ListRolesArgs),
    /// Look a role up by its exact name
    #[command(name = "find-role")]
    FindRole(FindRoleArgs),
}

/// How a command ended once its outcome has been printed.
///
/// `Failed` means a `{ code, message }` error was printed in place of a result;
/// errors that were not printed travel as `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
}

impl From<Completion> for ExitCode {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Succeeded => ExitCode::SUCCESS,
            Completion::Failed => ExitCode::FAILURE,
        }
    }
}

impl Command {
    #[instrument(level = "trace", skip(self, common_args))]
    pub async fn run(self, common_args: CommonArgs) -> anyhow::Result<Completion> {
        let CommonArgs {
            discord_bot_token,
            guild,
            discord_api_url,
        } = common_args;

        let env = GuildEnv::new(BotToken::new(discord_bot_token), GuildId(guild));
        let discord_http_adapter = Arc::new(DiscordHttpAdapter::new(DiscordHttpAdapterConfig {
            api_url: discord_api_url,
        }));
        let guild_role_service = GuildRoleService::new(discord_http_adapter);
        let mut out = std::io::stdout();

        match self {
            Command::CreateRole(args) => {
                create_role::run(&guild_role_service, &env, args, &mut out).await
            }
            Command::AddRole(args) => add_role::run(&guild_role_service, &env, args, &mut out).await,
            Command::RemoveRole(args) => {
                remove_role::run(&guild_role_service, &env, args, &mut out).await
            }
            Command::ListRoles(args) => {
                list_roles::run(&guild_role_service, &env, args, &mut out).await
            }
            Command::FindRole(args) => find_role::run(&guild_role_service, &env, args, &mut out).await,
        }
    }
}

/// Prints `outcome` as pretty JSON followed by a newline.
pub(crate) fn print_outcome(out: &mut impl Write, outcome: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcome)?;
    writeln!(out)?;
    Ok(())
}
