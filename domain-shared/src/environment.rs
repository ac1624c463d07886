use crate::discord::GuildId;
use secrecy::{ExposeSecret, SecretString};

/// Bot token as issued by the Discord developer portal, without the `Bot ` prefix.
#[derive(Clone, Debug)]
pub struct BotToken(pub SecretString);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Self {
        let token: String = token.into();
        Self(SecretString::new(token.into_boxed_str()))
    }

    /// Value of the `Authorization` header for bot requests.
    pub fn authorization(&self) -> String {
        format!("Bot {}", self.0.expose_secret())
    }
}

/// Credentials and target guild for a single role operation.
///
/// Owned by the caller and handed to every operation by reference.
#[derive(Clone, Debug)]
pub struct GuildEnv {
    pub bot_token: BotToken,
    pub guild_id: GuildId,
}

impl GuildEnv {
    pub fn new(bot_token: BotToken, guild_id: GuildId) -> Self {
        Self {
            bot_token,
            guild_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_uses_bot_scheme() {
        let token = BotToken::new("abc.def");
        assert_eq!(token.authorization(), "Bot abc.def");
    }

    #[test]
    fn debug_does_not_leak_token() {
        let env = GuildEnv::new(BotToken::new("MTAx.token-value"), GuildId("42".to_string()));
        let rendered = format!("{:?}", env);
        assert!(!rendered.contains("MTAx.token-value"));
        assert!(rendered.contains("42"));
    }
}
