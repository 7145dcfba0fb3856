/*
[INPUT]:  Symbol identifiers and query parameters
[OUTPUT]: Spot market data (ticker, depth, trades, klines, lend depth)
[POS]:    HTTP layer - public spot endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing parameters
*/

use serde_json::Value;

use crate::http::{OkexClient, Result};
use crate::types::{DepthRequest, KlineRequest, WireParams};

impl OkexClient {
    /// Latest price ticker for a symbol
    ///
    /// GET /api/v1/ticker.do
    pub async fn ticker(&self, symbol: &str) -> Result<Value> {
        let mut params = WireParams::new();
        params.insert("symbol", symbol.to_string());
        self.send_public("ticker", params).await
    }

    /// Order book snapshot
    ///
    /// GET /api/v1/depth.do
    pub async fn depth(&self, request: DepthRequest) -> Result<Value> {
        self.send_public("depth", request.wire_params()).await
    }

    /// Recent market trades, optionally from a trade id onward
    ///
    /// GET /api/v1/trades.do
    pub async fn trades(&self, symbol: &str, since: Option<i64>) -> Result<Value> {
        let mut params = WireParams::new();
        params.insert("symbol", symbol.to_string());
        if let Some(since) = since {
            params.insert("since", since.to_string());
        }
        self.send_public("trades", params).await
    }

    /// Candlestick history
    ///
    /// GET /api/v1/kline.do
    pub async fn kline(&self, request: KlineRequest) -> Result<Value> {
        self.send_public("kline", request.wire_params()).await
    }

    /// Margin lending depth for a symbol
    ///
    /// GET /api/v1/lend_depth.do
    pub async fn lend_depth(&self, symbol: &str) -> Result<Value> {
        let mut params = WireParams::new();
        params.insert("symbol", symbol.to_string());
        self.send_public("lend_depth", params).await
    }
}
