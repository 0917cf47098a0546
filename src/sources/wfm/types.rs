use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrdersResponse {
    pub payload: Payload,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Payload {
    pub item: ItemInfo,
    pub orders: Orders,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItemInfo {
    pub item_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    pub order_type: String,
    pub platinum: f64,
    pub visible: bool,
    // online/ingame/offline, kept for future filtering
    pub user: OrderUser,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderUser {
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Sell,
    Buy,
}

impl Order {
    /// Order side, matched case-insensitively. Unknown types yield `None`.
    pub fn kind(&self) -> Option<OrderKind> {
        if self.order_type.eq_ignore_ascii_case("sell") {
            Some(OrderKind::Sell)
        } else if self.order_type.eq_ignore_ascii_case("buy") {
            Some(OrderKind::Buy)
        } else {
            None
        }
    }
}

/// Lowest visible sell and highest visible buy. `None` means there was no
/// visible order of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceExtremes {
    pub lowest_sell: Option<f64>,
    pub highest_buy: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(transparent)]
pub struct Orders(pub Vec<Order>);

impl Orders {
    /// Orders the marketplace currently displays
    pub fn visible(&self) -> impl Iterator<Item = &Order> {
        self.0.iter().filter(|order| order.visible)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn price_extremes(&self) -> PriceExtremes {
        self.visible()
            .fold(PriceExtremes::default(), |mut extremes, order| {
                let price = order.platinum;
                match order.kind() {
                    Some(OrderKind::Sell) => {
                        if extremes.lowest_sell.map_or(true, |low| price < low) {
                            extremes.lowest_sell = Some(price);
                        }
                    }
                    Some(OrderKind::Buy) => {
                        if extremes.highest_buy.map_or(true, |high| price > high) {
                            extremes.highest_buy = Some(price);
                        }
                    }
                    None => {}
                }
                extremes
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::PricingError;

    fn order(order_type: &str, platinum: f64, visible: bool) -> Order {
        Order {
            order_type: order_type.to_owned(),
            platinum,
            visible,
            user: OrderUser {
                status: "ingame".to_owned(),
            },
        }
    }

    #[test]
    fn invisible_orders_are_ignored() {
        let orders = Orders(vec![
            order("sell", 10.0, true),
            order("sell", 5.0, true),
            order("sell", 1.0, false),
            order("buy", 20.0, true),
            order("buy", 25.0, true),
        ]);

        let extremes = orders.price_extremes();
        assert_eq!(extremes.lowest_sell, Some(5.0));
        assert_eq!(extremes.highest_buy, Some(25.0));
    }

    #[test]
    fn no_orders_means_no_extremes() {
        assert_eq!(Orders::default().price_extremes(), PriceExtremes::default());
    }

    #[test]
    fn order_type_is_case_insensitive() {
        let orders = Orders(vec![
            order("Sell", 12.0, true),
            order("SELL", 9.5, true),
            order("BuY", 3.0, true),
        ]);

        let extremes = orders.price_extremes();
        assert_eq!(extremes.lowest_sell, Some(9.5));
        assert_eq!(extremes.highest_buy, Some(3.0));
    }

    #[test]
    fn unknown_order_types_are_skipped() {
        let orders = Orders(vec![order("trade", 1.0, true), order("buy", 7.0, true)]);

        let extremes = orders.price_extremes();
        assert_eq!(extremes.lowest_sell, None);
        assert_eq!(extremes.highest_buy, Some(7.0));
    }

    #[test]
    fn only_hidden_buys_leaves_buy_side_empty() {
        let orders = Orders(vec![order("buy", 40.0, false), order("sell", 45.0, true)]);

        let extremes = orders.price_extremes();
        assert_eq!(extremes.lowest_sell, Some(45.0));
        assert_eq!(extremes.highest_buy, None);
    }

    #[test]
    fn decodes_marketplace_payload() {
        let body = r#"{
            "payload": {
                "item": { "item_name": "Mirage Prime Blueprint", "url_name": "mirage_prime_blueprint" },
                "orders": [
                    { "order_type": "sell", "platinum": 15, "visible": true, "user": { "status": "ingame", "ingame_name": "tenno" } },
                    { "order_type": "buy", "platinum": 11.5, "visible": true, "user": { "status": "offline" } },
                    { "order_type": "sell", "platinum": 14, "visible": false, "user": { "status": "online" } }
                ]
            }
        }"#;

        let response: OrdersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.payload.item.item_name, "Mirage Prime Blueprint");
        assert_eq!(response.payload.orders.len(), 3);
        assert_eq!(response.payload.orders.0[1].platinum, 11.5);
        assert_eq!(response.payload.orders.0[0].user.status, "ingame");
        assert_eq!(response.payload.orders.visible().count(), 2);
    }

    fn decode_single_order(order: &str) -> Result<OrdersResponse, PricingError> {
        let body = format!(
            r#"{{ "payload": {{ "item": {{ "item_name": "x" }}, "orders": [ {} ] }} }}"#,
            order
        );
        Ok(serde_json::from_str(&body)?)
    }

    #[test]
    fn well_formed_order_decodes() {
        let order = r#"{ "order_type": "sell", "platinum": 7, "visible": true, "user": { "status": "ingame" } }"#;
        assert!(decode_single_order(order).is_ok());
    }

    #[test]
    fn string_price_is_a_decode_error() {
        let order = r#"{ "order_type": "sell", "platinum": "7", "visible": true, "user": { "status": "ingame" } }"#;
        assert!(matches!(decode_single_order(order), Err(PricingError::Decode(_))));
    }

    #[test]
    fn missing_user_is_a_decode_error() {
        let order = r#"{ "order_type": "sell", "platinum": 7, "visible": true }"#;
        assert!(matches!(decode_single_order(order), Err(PricingError::Decode(_))));
    }

    #[test]
    fn missing_user_status_is_a_decode_error() {
        let order = r#"{ "order_type": "sell", "platinum": 7, "visible": true, "user": {} }"#;
        assert!(matches!(decode_single_order(order), Err(PricingError::Decode(_))));
    }

    #[test]
    fn missing_visibility_is_a_decode_error() {
        let order = r#"{ "order_type": "sell", "platinum": 7, "user": { "status": "ingame" } }"#;
        assert!(matches!(decode_single_order(order), Err(PricingError::Decode(_))));
    }
}
