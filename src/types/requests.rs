/*
[INPUT]:  v1 API endpoint parameter definitions
[OUTPUT]: Typed request structs that flatten into wire parameters
[POS]:    Data layer - request construction for API communication
[UPDATE]: When endpoint parameters change or new endpoints are added
*/

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{
    AccountRecordType, ContractType, FutureOrderAction, KlineInterval, OrderSide,
    OrderStatusFilter, WithdrawTarget,
};

/// Flat parameter mapping as it goes on the wire. The map keeps keys in
/// ascending byte order, which is the order both the query string and the
/// signature canonicalization use.
pub type WireParams = BTreeMap<&'static str, String>;

/// Order book snapshot query (`depth.do`).
///
/// `size` and `merge` fall back to `200` and `1` on the wire when unset;
/// the exchange applies no default of its own for merged depth.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthRequest {
    pub symbol: String,
    /// Number of levels per side, 1..=200
    pub size: Option<u32>,
    /// Price-merge depth, 0 or 1
    pub merge: Option<u32>,
}

impl DepthRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            size: None,
            merge: None,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert("size", self.size.unwrap_or(200).to_string());
        params.insert("merge", self.merge.unwrap_or(1).to_string());
        params
    }
}

/// Candlestick history query (`kline.do`)
#[derive(Debug, Clone, PartialEq)]
pub struct KlineRequest {
    pub symbol: String,
    pub interval: KlineInterval,
    /// Number of candles, most recent first
    pub size: Option<u32>,
    /// Unix millisecond timestamp to read from
    pub since: Option<i64>,
}

impl KlineRequest {
    pub fn new(symbol: impl Into<String>, interval: KlineInterval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            size: None,
            since: None,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert("type", self.interval.as_str().to_string());
        if let Some(size) = self.size {
            params.insert("size", size.to_string());
        }
        if let Some(since) = self.since {
            params.insert("since", since.to_string());
        }
        params
    }
}

/// Single spot order (`trade.do`).
///
/// Limit orders carry both `price` and `amount`. Market buys carry only
/// `price` (total quote currency to spend); market sells carry only
/// `amount` (base currency to sell).
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    pub price: Option<Decimal>,
    pub amount: Option<Decimal>,
}

impl PlaceOrderRequest {
    pub fn limit_buy(symbol: impl Into<String>, price: Decimal, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side: OrderSide::Buy,
            price: Some(price),
            amount: Some(amount),
        }
    }

    pub fn limit_sell(symbol: impl Into<String>, price: Decimal, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side: OrderSide::Sell,
            price: Some(price),
            amount: Some(amount),
        }
    }

    /// Market buy spending `total` of the quote currency
    pub fn market_buy(symbol: impl Into<String>, total: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side: OrderSide::BuyMarket,
            price: Some(total),
            amount: None,
        }
    }

    /// Market sell of `amount` base currency
    pub fn market_sell(symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side: OrderSide::SellMarket,
            price: None,
            amount: Some(amount),
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert("type", self.side.as_str().to_string());
        if let Some(price) = self.price {
            params.insert("price", price.to_string());
        }
        if let Some(amount) = self.amount {
            params.insert("amount", amount.to_string());
        }
        params
    }
}

/// One order inside a batch, serialized into the `orders_data` JSON array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOrderItem {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Overrides the batch-level side for this item
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
}

impl BatchOrderItem {
    pub fn new(price: Decimal, amount: Decimal) -> Self {
        Self {
            price,
            amount,
            side: None,
        }
    }

    pub fn with_side(price: Decimal, amount: Decimal, side: OrderSide) -> Self {
        Self {
            price,
            amount,
            side: Some(side),
        }
    }
}

/// Batch spot order placement (`batch_trade.do`), up to 5 orders per call
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPlaceOrdersRequest {
    pub symbol: String,
    /// Default side for items that do not carry one
    pub side: Option<OrderSide>,
    pub orders: Vec<BatchOrderItem>,
}

impl BatchPlaceOrdersRequest {
    pub fn new(symbol: impl Into<String>, orders: Vec<BatchOrderItem>) -> Self {
        Self {
            symbol: symbol.into(),
            side: None,
            orders,
        }
    }

    pub fn wire_params(&self) -> serde_json::Result<WireParams> {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        if let Some(side) = self.side {
            params.insert("type", side.as_str().to_string());
        }
        params.insert("orders_data", serde_json::to_string(&self.orders)?);
        Ok(params)
    }
}

/// Finished-order history query (`order_history.do`)
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistoryRequest {
    pub symbol: String,
    pub status: OrderStatusFilter,
    /// 1-based page number
    pub current_page: u32,
    /// Rows per page, 1..=200
    pub page_length: u32,
}

impl OrderHistoryRequest {
    pub fn new(
        symbol: impl Into<String>,
        status: OrderStatusFilter,
        current_page: u32,
        page_length: u32,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            status,
            current_page,
            page_length,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert("status", self.status.as_str().to_string());
        params.insert("current_page", self.current_page.to_string());
        params.insert("page_length", self.page_length.to_string());
        params
    }
}

/// Deposit/withdrawal ledger query (`account_records.do`)
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecordsRequest {
    pub symbol: String,
    pub record_type: AccountRecordType,
    /// 1-based page number
    pub current_page: u32,
    /// Rows per page, 1..=50
    pub page_length: u32,
}

impl AccountRecordsRequest {
    pub fn new(
        symbol: impl Into<String>,
        record_type: AccountRecordType,
        current_page: u32,
        page_length: u32,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            record_type,
            current_page,
            page_length,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert("type", self.record_type.as_str().to_string());
        params.insert("current_page", self.current_page.to_string());
        params.insert("page_length", self.page_length.to_string());
        params
    }
}

/// Personal fill history query (`trade_history.do`)
#[derive(Debug, Clone, PartialEq)]
pub struct TradeHistoryRequest {
    pub symbol: String,
    /// Trade id to read from
    pub since: i64,
}

impl TradeHistoryRequest {
    pub fn new(symbol: impl Into<String>, since: i64) -> Self {
        Self {
            symbol: symbol.into(),
            since,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert("since", self.since.to_string());
        params
    }
}

/// Coin withdrawal (`withdraw.do`)
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    pub symbol: String,
    /// Network fee; internal transfers take 0
    pub chargefee: Decimal,
    /// Trade/funds password on the account
    pub trade_pwd: String,
    pub withdraw_address: String,
    pub withdraw_amount: Decimal,
    pub target: WithdrawTarget,
}

impl WithdrawRequest {
    pub fn new(
        symbol: impl Into<String>,
        chargefee: Decimal,
        trade_pwd: impl Into<String>,
        withdraw_address: impl Into<String>,
        withdraw_amount: Decimal,
        target: WithdrawTarget,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            chargefee,
            trade_pwd: trade_pwd.into(),
            withdraw_address: withdraw_address.into(),
            withdraw_amount,
            target,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert("chargefee", self.chargefee.to_string());
        params.insert("trade_pwd", self.trade_pwd.clone());
        params.insert("withdraw_address", self.withdraw_address.clone());
        params.insert("withdraw_amount", self.withdraw_amount.to_string());
        params.insert("target", self.target.as_str().to_string());
        params
    }
}

/// Futures order book snapshot query (`future_depth.do`).
///
/// Same `size`/`merge` defaults as the spot book; `contract_type` falls
/// back to `quarter` when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct FutureDepthRequest {
    pub symbol: String,
    pub contract_type: Option<ContractType>,
    pub size: Option<u32>,
    pub merge: Option<u32>,
}

impl FutureDepthRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            contract_type: None,
            size: None,
            merge: None,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert(
            "contract_type",
            self.contract_type.unwrap_or_default().as_str().to_string(),
        );
        params.insert("size", self.size.unwrap_or(200).to_string());
        params.insert("merge", self.merge.unwrap_or(1).to_string());
        params
    }
}

/// Futures candlestick history query (`future_kline.do`)
#[derive(Debug, Clone, PartialEq)]
pub struct FutureKlineRequest {
    pub symbol: String,
    pub interval: KlineInterval,
    pub contract_type: Option<ContractType>,
    pub size: Option<u32>,
    pub since: Option<i64>,
}

impl FutureKlineRequest {
    pub fn new(symbol: impl Into<String>, interval: KlineInterval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            contract_type: None,
            size: None,
            since: None,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert("type", self.interval.as_str().to_string());
        params.insert(
            "contract_type",
            self.contract_type.unwrap_or_default().as_str().to_string(),
        );
        if let Some(size) = self.size {
            params.insert("size", size.to_string());
        }
        if let Some(since) = self.since {
            params.insert("since", since.to_string());
        }
        params
    }
}

/// Futures order placement (`future_trade.do`).
///
/// `price` is required unless `match_price` is set, in which case the
/// exchange fills at the best counterparty price and ignores `price`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceFutureOrderRequest {
    pub symbol: String,
    pub contract_type: Option<ContractType>,
    pub action: FutureOrderAction,
    pub amount: Decimal,
    pub price: Option<Decimal>,
    /// Fill at best counterparty price instead of `price`
    pub match_price: Option<bool>,
    /// Leverage, 10 or 20
    pub lever_rate: Option<u32>,
}

impl PlaceFutureOrderRequest {
    pub fn new(symbol: impl Into<String>, action: FutureOrderAction, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            contract_type: None,
            action,
            amount,
            price: None,
            match_price: None,
            lever_rate: None,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert(
            "contract_type",
            self.contract_type.unwrap_or_default().as_str().to_string(),
        );
        params.insert("type", self.action.as_str().to_string());
        params.insert("amount", self.amount.to_string());
        if let Some(price) = self.price {
            params.insert("price", price.to_string());
        }
        if let Some(match_price) = self.match_price {
            params.insert("match_price", if match_price { "1" } else { "0" }.to_string());
        }
        if let Some(lever_rate) = self.lever_rate {
            params.insert("lever_rate", lever_rate.to_string());
        }
        params
    }
}

/// Futures order query (`future_order_info.do`)
#[derive(Debug, Clone, PartialEq)]
pub struct FutureOrderInfoRequest {
    pub symbol: String,
    pub contract_type: Option<ContractType>,
    pub status: OrderStatusFilter,
    /// Order id, or -1 for every order matching `status`
    pub order_id: i64,
    pub current_page: Option<u32>,
    pub page_length: Option<u32>,
}

impl FutureOrderInfoRequest {
    pub fn new(symbol: impl Into<String>, status: OrderStatusFilter, order_id: i64) -> Self {
        Self {
            symbol: symbol.into(),
            contract_type: None,
            status,
            order_id,
            current_page: None,
            page_length: None,
        }
    }

    pub fn wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.insert("symbol", self.symbol.clone());
        params.insert(
            "contract_type",
            self.contract_type.unwrap_or_default().as_str().to_string(),
        );
        // Futures order status goes out as 1/2 where spot history uses 0/1
        let status = match self.status {
            OrderStatusFilter::Unfilled => "1",
            OrderStatusFilter::Filled => "2",
        };
        params.insert("status", status.to_string());
        params.insert("order_id", self.order_id.to_string());
        if let Some(current_page) = self.current_page {
            params.insert("current_page", current_page.to_string());
        }
        if let Some(page_length) = self.page_length {
            params.insert("page_length", page_length.to_string());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn d(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_depth_request_fills_defaults() {
        let params = DepthRequest::new("btc_usd").wire_params();
        assert_eq!(params.get("symbol").unwrap(), "btc_usd");
        assert_eq!(params.get("size").unwrap(), "200");
        assert_eq!(params.get("merge").unwrap(), "1");
    }

    #[test]
    fn test_depth_request_explicit_values() {
        let mut request = DepthRequest::new("ltc_usd");
        request.size = Some(50);
        request.merge = Some(0);
        let params = request.wire_params();
        assert_eq!(params.get("size").unwrap(), "50");
        assert_eq!(params.get("merge").unwrap(), "0");
    }

    #[test]
    fn test_kline_request_omits_unset_fields() {
        let params = KlineRequest::new("btc_usd", KlineInterval::Min15).wire_params();
        assert_eq!(params.get("type").unwrap(), "15min");
        assert!(!params.contains_key("size"));
        assert!(!params.contains_key("since"));
    }

    #[test]
    fn test_limit_order_params() {
        let request = PlaceOrderRequest::limit_buy("btc_cny", d("100"), d("1"));
        let params = request.wire_params();
        assert_eq!(params.get("type").unwrap(), "buy");
        assert_eq!(params.get("price").unwrap(), "100");
        assert_eq!(params.get("amount").unwrap(), "1");
    }

    #[test]
    fn test_market_order_params() {
        let buy = PlaceOrderRequest::market_buy("btc_usd", d("500")).wire_params();
        assert_eq!(buy.get("type").unwrap(), "buy_market");
        assert_eq!(buy.get("price").unwrap(), "500");
        assert!(!buy.contains_key("amount"));

        let sell = PlaceOrderRequest::market_sell("btc_usd", d("0.25")).wire_params();
        assert_eq!(sell.get("type").unwrap(), "sell_market");
        assert_eq!(sell.get("amount").unwrap(), "0.25");
        assert!(!sell.contains_key("price"));
    }

    #[test]
    fn test_batch_orders_data_json() {
        let request = BatchPlaceOrdersRequest::new(
            "btc_usd",
            vec![
                BatchOrderItem::new(d("680"), d("0.1")),
                BatchOrderItem::with_side(d("681.5"), d("0.2"), OrderSide::Sell),
            ],
        );
        let params = request.wire_params().unwrap();
        assert_eq!(
            params.get("orders_data").unwrap(),
            r#"[{"price":"680","amount":"0.1"},{"price":"681.5","amount":"0.2","type":"sell"}]"#
        );
        assert!(!params.contains_key("type"));
    }

    #[test]
    fn test_future_depth_defaults() {
        let params = FutureDepthRequest::new("btc_usd").wire_params();
        assert_eq!(params.get("contract_type").unwrap(), "quarter");
        assert_eq!(params.get("size").unwrap(), "200");
        assert_eq!(params.get("merge").unwrap(), "1");
    }

    #[test]
    fn test_future_order_params() {
        let mut request =
            PlaceFutureOrderRequest::new("btc_usd", FutureOrderAction::OpenShort, d("2"));
        request.contract_type = Some(ContractType::ThisWeek);
        request.price = Some(d("430.5"));
        request.match_price = Some(false);
        request.lever_rate = Some(20);
        let params = request.wire_params();
        assert_eq!(params.get("contract_type").unwrap(), "this_week");
        assert_eq!(params.get("type").unwrap(), "2");
        assert_eq!(params.get("price").unwrap(), "430.5");
        assert_eq!(params.get("match_price").unwrap(), "0");
        assert_eq!(params.get("lever_rate").unwrap(), "20");
    }

    #[test]
    fn test_future_order_info_status_values() {
        let unfilled =
            FutureOrderInfoRequest::new("btc_usd", OrderStatusFilter::Unfilled, -1).wire_params();
        assert_eq!(unfilled.get("status").unwrap(), "1");

        let filled =
            FutureOrderInfoRequest::new("btc_usd", OrderStatusFilter::Filled, 15088).wire_params();
        assert_eq!(filled.get("status").unwrap(), "2");
        assert_eq!(filled.get("order_id").unwrap(), "15088");
    }

    #[test]
    fn test_withdraw_params() {
        let request = WithdrawRequest::new(
            "btc_usd",
            d("0.0001"),
            "pwd",
            "1BcWgq...",
            d("1.5"),
            WithdrawTarget::Address,
        );
        let params = request.wire_params();
        assert_eq!(params.get("chargefee").unwrap(), "0.0001");
        assert_eq!(params.get("withdraw_amount").unwrap(), "1.5");
        assert_eq!(params.get("target").unwrap(), "address");
    }
}
