use clap::Args;
use url::Url;

#[derive(Args)]
pub struct CommonArgs {
    /// The token for the Discord bot
    #[arg(long, env = "DISCORD_BOT_TOKEN", hide_env_values = true)]
    pub discord_bot_token: String,
    /// The ID of the Discord guild (server) whose roles are managed
    #[arg(long, env = "DISCORD_GUILD_ID")]
    pub guild: String,
    /// Base URL of the Discord REST API
    #[arg(long, env = "DISCORD_API_URL", default_value = infrastructure::discord::DISCORD_API_URL)]
    pub discord_api_url: Url,
}
