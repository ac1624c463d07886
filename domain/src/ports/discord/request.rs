use domain_shared::environment::BotToken;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request against the Discord REST API, relative to the API base URL.
///
/// The path is kept as raw segments; ids are never spliced into a path string,
/// so a `/` inside an id stays inside its segment.
#[derive(Debug, Clone)]
pub struct DiscordRequest {
    pub method: HttpMethod,
    pub path_segments: Vec<String>,
    pub bot_token: BotToken,
    pub body: Option<Value>,
}
