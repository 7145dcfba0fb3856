/*
[INPUT]:  v1 API parameter vocabularies
[OUTPUT]: Typed Rust enums with wire-form rendering
[POS]:    Data layer - fixed parameter values for API communication
[UPDATE]: When the API parameter vocabulary changes
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    Buy,
    Sell,
    BuyMarket,
    SellMarket,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
            OrderSide::BuyMarket => "buy_market",
            OrderSide::SellMarket => "sell_market",
        }
    }
}

/// Futures contract maturity. Endpoints that take an optional contract
/// type fall back to `Quarter` when none is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    ThisWeek,
    NextWeek,
    #[default]
    Quarter,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::ThisWeek => "this_week",
            ContractType::NextWeek => "next_week",
            ContractType::Quarter => "quarter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KlineInterval {
    #[serde(rename = "1min")]
    Min1,
    #[serde(rename = "3min")]
    Min3,
    #[serde(rename = "5min")]
    Min5,
    #[serde(rename = "15min")]
    Min15,
    #[serde(rename = "30min")]
    Min30,
    #[serde(rename = "1hour")]
    Hour1,
    #[serde(rename = "2hour")]
    Hour2,
    #[serde(rename = "4hour")]
    Hour4,
    #[serde(rename = "6hour")]
    Hour6,
    #[serde(rename = "12hour")]
    Hour12,
    #[serde(rename = "1day")]
    Day1,
    #[serde(rename = "3day")]
    Day3,
    #[serde(rename = "1week")]
    Week1,
}

impl KlineInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            KlineInterval::Min1 => "1min",
            KlineInterval::Min3 => "3min",
            KlineInterval::Min5 => "5min",
            KlineInterval::Min15 => "15min",
            KlineInterval::Min30 => "30min",
            KlineInterval::Hour1 => "1hour",
            KlineInterval::Hour2 => "2hour",
            KlineInterval::Hour4 => "4hour",
            KlineInterval::Hour6 => "6hour",
            KlineInterval::Hour12 => "12hour",
            KlineInterval::Day1 => "1day",
            KlineInterval::Day3 => "3day",
            KlineInterval::Week1 => "1week",
        }
    }
}

/// Futures order action, sent as the numeric `type` field (`1`..`4`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FutureOrderAction {
    OpenLong,
    OpenShort,
    CloseLong,
    CloseShort,
}

impl FutureOrderAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FutureOrderAction::OpenLong => "1",
            FutureOrderAction::OpenShort => "2",
            FutureOrderAction::CloseLong => "3",
            FutureOrderAction::CloseShort => "4",
        }
    }
}

/// Order history status filter, sent as `0` (unfilled) or `1` (filled)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatusFilter {
    Unfilled,
    Filled,
}

impl OrderStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatusFilter::Unfilled => "0",
            OrderStatusFilter::Filled => "1",
        }
    }
}

/// Batch order-info query type, sent as `0` (unfilled) or `1` (filled)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersQueryType {
    Unfilled,
    Filled,
}

impl OrdersQueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrdersQueryType::Unfilled => "0",
            OrdersQueryType::Filled => "1",
        }
    }
}

/// Account ledger record type, sent as `0` (deposit) or `1` (withdrawal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRecordType {
    Deposit,
    Withdrawal,
}

impl AccountRecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRecordType::Deposit => "0",
            AccountRecordType::Withdrawal => "1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawTarget {
    Okcn,
    Okcom,
    Okex,
    Address,
}

impl WithdrawTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawTarget::Okcn => "okcn",
            WithdrawTarget::Okcom => "okcom",
            WithdrawTarget::Okex => "okex",
            WithdrawTarget::Address => "address",
        }
    }
}
