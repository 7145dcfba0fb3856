/*
[INPUT]:  Account queries with signed form parameters
[OUTPUT]: Balances, ledger records, personal history, withdrawals
[POS]:    HTTP layer - spot account endpoints (require signing)
[UPDATE]: When adding new account endpoints or changing parameters
*/

use serde_json::Value;

use crate::http::{OkexClient, Result};
use crate::types::{
    AccountRecordsRequest, OrderHistoryRequest, TradeHistoryRequest, WireParams, WithdrawRequest,
};

impl OkexClient {
    /// Account balances and holds
    ///
    /// POST /api/v1/userinfo.do
    pub async fn user_info(&self) -> Result<Value> {
        self.send_private("userinfo", WireParams::new()).await
    }

    /// Paged deposit or withdrawal ledger
    ///
    /// POST /api/v1/account_records.do
    pub async fn account_records(&self, request: AccountRecordsRequest) -> Result<Value> {
        self.send_private("account_records", request.wire_params())
            .await
    }

    /// Personal fills from a trade id onward
    ///
    /// POST /api/v1/trade_history.do
    pub async fn trade_history(&self, request: TradeHistoryRequest) -> Result<Value> {
        self.send_private("trade_history", request.wire_params())
            .await
    }

    /// Paged finished-order history
    ///
    /// POST /api/v1/order_history.do
    pub async fn order_history(&self, request: OrderHistoryRequest) -> Result<Value> {
        self.send_private("order_history", request.wire_params())
            .await
    }

    /// Withdraw coins to an address or internal account
    ///
    /// POST /api/v1/withdraw.do
    pub async fn withdraw(&self, request: WithdrawRequest) -> Result<Value> {
        self.send_private("withdraw", request.wire_params()).await
    }

    /// Cancel a pending withdrawal
    ///
    /// POST /api/v1/cancel_withdraw.do
    pub async fn cancel_withdraw(&self, symbol: &str, withdraw_id: i64) -> Result<Value> {
        let mut params = WireParams::new();
        params.insert("symbol", symbol.to_string());
        params.insert("withdraw_id", withdraw_id.to_string());
        self.send_private("cancel_withdraw", params).await
    }
}
