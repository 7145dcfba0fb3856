/*
[INPUT]:  Order requests with signed form parameters
[OUTPUT]: Order placement, cancellation and lookup responses
[POS]:    HTTP layer - spot trading endpoints (require signing)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;

use crate::http::{OkexClient, Result};
use crate::types::{BatchPlaceOrdersRequest, OrdersQueryType, PlaceOrderRequest, WireParams};

impl OkexClient {
    /// Place a single spot order
    ///
    /// POST /api/v1/trade.do
    pub async fn place_order(&self, request: PlaceOrderRequest) -> Result<Value> {
        self.send_private("trade", request.wire_params()).await
    }

    /// Place up to 5 spot orders in one call
    ///
    /// POST /api/v1/batch_trade.do
    pub async fn batch_place_orders(&self, request: BatchPlaceOrdersRequest) -> Result<Value> {
        let params = request.wire_params()?;
        self.send_private("batch_trade", params).await
    }

    /// Cancel up to 3 orders, comma-joined on the wire
    ///
    /// POST /api/v1/cancel_order.do
    pub async fn cancel_order(&self, symbol: &str, order_ids: &[i64]) -> Result<Value> {
        let mut params = WireParams::new();
        params.insert("symbol", symbol.to_string());
        params.insert("order_id", join_ids(order_ids));
        self.send_private("cancel_order", params).await
    }

    /// Look up a single order, or every unfilled order with `order_id` -1
    ///
    /// POST /api/v1/order_info.do
    pub async fn order_info(&self, symbol: &str, order_id: i64) -> Result<Value> {
        let mut params = WireParams::new();
        params.insert("symbol", symbol.to_string());
        params.insert("order_id", order_id.to_string());
        self.send_private("order_info", params).await
    }

    /// Look up up to 50 orders by id, filtered by fill state
    ///
    /// POST /api/v1/orders_info.do
    pub async fn orders_info(
        &self,
        symbol: &str,
        query_type: OrdersQueryType,
        order_ids: &[i64],
    ) -> Result<Value> {
        let mut params = WireParams::new();
        params.insert("symbol", symbol.to_string());
        params.insert("type", query_type.as_str().to_string());
        params.insert("order_id", join_ids(order_ids));
        self.send_private("orders_info", params).await
    }
}

fn join_ids(order_ids: &[i64]) -> String {
    order_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
