mod request;
mod response;

pub use domain_shared::discord::TransportError;
pub use domain_shared::roles::RoleSummary;
pub use request::{DiscordRequest, HttpMethod};
pub use response::DiscordResponse;

use async_trait::async_trait;

/// Transport capability for the Discord REST API.
///
/// Implementations send exactly one HTTP request per call and never retry.
/// A non-success status is a regular [`DiscordResponse`]; only a request that
/// never completed is a [`TransportError`].
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DiscordHttpPort {
    async fn send(&self, request: DiscordRequest) -> Result<DiscordResponse, TransportError>;
}
