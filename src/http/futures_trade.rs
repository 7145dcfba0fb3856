/*
[INPUT]:  Futures account and order requests with signed form parameters
[OUTPUT]: Contract balances, positions, order placement and lookup
[POS]:    HTTP layer - futures trading endpoints (require signing)
[UPDATE]: When adding new futures endpoints or changing order flow
*/

use serde_json::Value;

use crate::http::futures::contract_params;
use crate::http::{OkexClient, Result};
use crate::types::{ContractType, FutureOrderInfoRequest, PlaceFutureOrderRequest, WireParams};

impl OkexClient {
    /// Cross-margin contract account balances
    ///
    /// POST /api/v1/future_userinfo.do
    pub async fn future_user_info(&self) -> Result<Value> {
        self.send_private("future_userinfo", WireParams::new())
            .await
    }

    /// Open positions for a cross-margin contract
    ///
    /// POST /api/v1/future_position.do
    pub async fn future_position(
        &self,
        symbol: &str,
        contract_type: Option<ContractType>,
    ) -> Result<Value> {
        self.send_private("future_position", contract_params(symbol, contract_type))
            .await
    }

    /// Place a futures order
    ///
    /// POST /api/v1/future_trade.do
    pub async fn place_future_order(&self, request: PlaceFutureOrderRequest) -> Result<Value> {
        self.send_private("future_trade", request.wire_params())
            .await
    }

    /// Cancel up to 3 futures orders, comma-joined on the wire
    ///
    /// POST /api/v1/future_cancel.do
    pub async fn cancel_future_order(
        &self,
        symbol: &str,
        contract_type: Option<ContractType>,
        order_ids: &[i64],
    ) -> Result<Value> {
        let mut params = contract_params(symbol, contract_type);
        params.insert(
            "order_id",
            order_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
        );
        self.send_private("future_cancel", params).await
    }

    /// Look up futures orders by id and fill state
    ///
    /// POST /api/v1/future_order_info.do
    pub async fn future_order_info(&self, request: FutureOrderInfoRequest) -> Result<Value> {
        self.send_private("future_order_info", request.wire_params())
            .await
    }

    /// Fixed-margin contract account balances
    ///
    /// POST /api/v1/future_userinfo_4fix.do
    pub async fn future_user_info_fixed(&self) -> Result<Value> {
        self.send_private("future_userinfo_4fix", WireParams::new())
            .await
    }

    /// Open positions for a fixed-margin contract
    ///
    /// POST /api/v1/future_position_4fix.do
    pub async fn future_position_fixed(
        &self,
        symbol: &str,
        contract_type: Option<ContractType>,
    ) -> Result<Value> {
        self.send_private(
            "future_position_4fix",
            contract_params(symbol, contract_type),
        )
        .await
    }
}
