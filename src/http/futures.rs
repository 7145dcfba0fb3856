/*
[INPUT]:  Symbol and contract-type query parameters
[OUTPUT]: Futures market data (ticker, depth, trades, index, klines)
[POS]:    HTTP layer - public futures endpoints (no auth required)
[UPDATE]: When adding new futures endpoints or changing parameters
*/

use serde_json::Value;

use crate::http::{OkexClient, Result};
use crate::types::{ContractType, FutureDepthRequest, FutureKlineRequest, WireParams};

pub(crate) fn contract_params(symbol: &str, contract_type: Option<ContractType>) -> WireParams {
    let mut params = WireParams::new();
    params.insert("symbol", symbol.to_string());
    params.insert(
        "contract_type",
        contract_type.unwrap_or_default().as_str().to_string(),
    );
    params
}

impl OkexClient {
    /// Latest futures ticker for a contract
    ///
    /// GET /api/v1/future_ticker.do
    pub async fn future_ticker(
        &self,
        symbol: &str,
        contract_type: Option<ContractType>,
    ) -> Result<Value> {
        self.send_public("future_ticker", contract_params(symbol, contract_type))
            .await
    }

    /// Futures order book snapshot
    ///
    /// GET /api/v1/future_depth.do
    pub async fn future_depth(&self, request: FutureDepthRequest) -> Result<Value> {
        self.send_public("future_depth", request.wire_params())
            .await
    }

    /// Recent futures trades for a contract
    ///
    /// GET /api/v1/future_trades.do
    pub async fn future_trades(
        &self,
        symbol: &str,
        contract_type: Option<ContractType>,
    ) -> Result<Value> {
        self.send_public("future_trades", contract_params(symbol, contract_type))
            .await
    }

    /// Futures index price for a symbol
    ///
    /// GET /api/v1/future_index.do
    pub async fn future_index(&self, symbol: &str) -> Result<Value> {
        let mut params = WireParams::new();
        params.insert("symbol", symbol.to_string());
        self.send_public("future_index", params).await
    }

    /// USD-CNY exchange rate used by the futures index
    ///
    /// GET /api/v1/exchange_rate.do
    pub async fn exchange_rate(&self) -> Result<Value> {
        self.send_public("exchange_rate", WireParams::new()).await
    }

    /// Futures candlestick history
    ///
    /// GET /api/v1/future_kline.do
    pub async fn future_kline(&self, request: FutureKlineRequest) -> Result<Value> {
        self.send_public("future_kline", request.wire_params())
            .await
    }

    /// Open interest for a contract
    ///
    /// GET /api/v1/future_hold_amount.do
    pub async fn future_hold_amount(
        &self,
        symbol: &str,
        contract_type: Option<ContractType>,
    ) -> Result<Value> {
        self.send_public("future_hold_amount", contract_params(symbol, contract_type))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_params_default() {
        let params = contract_params("btc_usd", None);
        assert_eq!(params.get("contract_type").unwrap(), "quarter");
    }

    #[test]
    fn test_contract_params_explicit() {
        let params = contract_params("btc_usd", Some(ContractType::NextWeek));
        assert_eq!(params.get("contract_type").unwrap(), "next_week");
    }
}
