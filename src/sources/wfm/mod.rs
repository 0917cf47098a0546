use self::types::OrdersResponse;
use crate::sources::PricingError;
use log::{debug, info, warn};
use reqwest::{header::USER_AGENT, Client, StatusCode};

use super::PriceSource;

pub const BASE_URL: &str = "https://api.warframe.market/v1";
const AGENT: &str = "warframe-market-cli/1.0";

pub mod types;

#[derive(Clone)]
pub struct WarframeMarket {
    req_client: Client,
    base_url: String,
}

impl WarframeMarket {
    pub fn new(base_url: &str) -> Result<Self, PricingError> {
        let client = reqwest::ClientBuilder::new()
            .build()
            .map_err(PricingError::RequestConstruction)?;

        Ok(Self {
            req_client: client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Builds a client against `WFM_API_URL`, falling back to the public api
    pub fn from_env() -> Result<Self, PricingError> {
        match std::env::var("WFM_API_URL") {
            Ok(url) if !url.trim().is_empty() => {
                debug!("Using marketplace api at {}", url);
                Self::new(url.trim())
            }
            _ => Self::new(BASE_URL),
        }
    }

    pub fn orders_url(&self, slug: &str) -> String {
        format!("{}/items/{}/orders", self.base_url, slug)
    }
}

impl PriceSource for WarframeMarket {
    /// Requests every order listed for the given slug.
    /// No retry is attempted, any failure is returned to the caller.
    async fn get_orders(&self, slug: &str) -> Result<OrdersResponse, PricingError> {
        let req = self
            .req_client
            .get(self.orders_url(slug))
            .header(USER_AGENT, AGENT)
            .build()
            .map_err(PricingError::RequestConstruction)?;

        debug!("GET {}", req.url());

        let res = self
            .req_client
            .execute(req)
            .await
            .map_err(PricingError::Transport)?;

        let status = res.status();
        debug!("warframe.market answered {} for {}", status, slug);

        if status == StatusCode::NOT_FOUND {
            return Err(PricingError::NotFound {
                slug: slug.to_owned(),
            });
        }

        if !status.is_success() {
            let body = match res.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read error body from warframe.market: {:?}", e);
                    String::new()
                }
            };
            return Err(PricingError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = res.text().await.map_err(PricingError::BodyRead)?;
        let orders: OrdersResponse = serde_json::from_str(&body)?;

        info!(
            "Fetched {} orders for {}",
            orders.payload.orders.len(),
            slug
        );

        Ok(orders)
    }
}
