use domain::ports::discord::HttpMethod;
use reqwest::Method;
use tracing::instrument;

#[instrument(level = "trace", skip(method))]
pub fn domain_to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}
