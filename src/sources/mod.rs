pub mod wfm;

use self::wfm::types::OrdersResponse;

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("failed to build request: {0}")]
    RequestConstruction(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("item not found (API returned 404 for '{slug}')")]
    NotFound { slug: String },
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub trait PriceSource {
    fn get_orders(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<OrdersResponse, PricingError>> + Send;
}
