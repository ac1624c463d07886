mod http_method;

use crate::discord::http_method::domain_to_reqwest_method;
use async_trait::async_trait;
use domain::ports::discord::{DiscordHttpPort, DiscordRequest, DiscordResponse, TransportError};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::{debug, instrument, warn};
use url::Url;

pub const DISCORD_API_URL: &str = "https://discord.com/api/v10";

#[derive(Clone, Debug)]
pub struct DiscordHttpAdapterConfig {
    pub api_url: Url,
}

pub struct DiscordHttpAdapter {
    http_client: HttpClient,
    api_url: Url,
}

impl DiscordHttpAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(config: DiscordHttpAdapterConfig) -> Self {
        let http_client = HttpClient::new();

        Self {
            http_client,
            api_url: config.api_url,
        }
    }

    /// Appends `segments` below the API base URL, percent-encoding each one so
    /// an id can never add or climb path levels.
    fn endpoint(&self, segments: &[String]) -> Result<Url, TransportError> {
        if segments
            .iter()
            .any(|segment| matches!(segment.as_str(), "" | "." | ".."))
        {
            warn!(?segments, "Refusing Discord path with an empty or dot segment");
            return Err(TransportError::InvalidPath(segments.to_vec()));
        }

        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidPath(segments.to_vec()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

#[async_trait]
impl DiscordHttpPort for DiscordHttpAdapter {
    #[instrument(
        level = "debug",
        skip(self, request),
        fields(method = ?request.method, path = ?request.path_segments)
    )]
    async fn send(&self, request: DiscordRequest) -> Result<DiscordResponse, TransportError> {
        let DiscordRequest {
            method,
            path_segments,
            bot_token,
            body,
        } = request;

        let url = self.endpoint(&path_segments)?;
        let mut builder = self
            .http_client
            .request(domain_to_reqwest_method(method), url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, bot_token.authorization());
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|err| {
            warn!("Discord request failed: {:?}", err);
            TransportError::RequestFailed(err.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| {
            warn!("Failed to read Discord response body: {:?}", err);
            TransportError::BodyUnreadable(err.to_string())
        })?;

        debug!(status, "Discord responded");

        Ok(DiscordResponse::new(status, body))
    }
}
