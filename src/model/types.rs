use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction categories accepted by the transaction-history endpoint.
///
/// `Display` renders the exact wire form (`BUY_ONLY`, `CASH_IN_OR_OUT`, ...)
/// and `FromStr` accepts it back, so round-tripping through a string is the
/// validity check for externally supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// All transaction categories
    All,
    /// Trades only
    Trade,
    /// Buy-side trades only
    BuyOnly,
    /// Sell-side trades only
    SellOnly,
    /// Cash deposits and withdrawals
    CashInOrOut,
    /// Checking activity
    Checking,
    /// Dividend payments
    Dividend,
    /// Interest payments
    Interest,
    /// Anything not covered by the other categories
    Other,
    /// Advisor fee charges
    AdvisorFees,
}

impl TransactionType {
    /// The wire representation sent in the `type=` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::All => "ALL",
            TransactionType::Trade => "TRADE",
            TransactionType::BuyOnly => "BUY_ONLY",
            TransactionType::SellOnly => "SELL_ONLY",
            TransactionType::CashInOrOut => "CASH_IN_OR_OUT",
            TransactionType::Checking => "CHECKING",
            TransactionType::Dividend => "DIVIDEND",
            TransactionType::Interest => "INTEREST",
            TransactionType::Other => "OTHER",
            TransactionType::AdvisorFees => "ADVISOR_FEES",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(TransactionType::All),
            "TRADE" => Ok(TransactionType::Trade),
            "BUY_ONLY" => Ok(TransactionType::BuyOnly),
            "SELL_ONLY" => Ok(TransactionType::SellOnly),
            "CASH_IN_OR_OUT" => Ok(TransactionType::CashInOrOut),
            "CHECKING" => Ok(TransactionType::Checking),
            "DIVIDEND" => Ok(TransactionType::Dividend),
            "INTEREST" => Ok(TransactionType::Interest),
            "OTHER" => Ok(TransactionType::Other),
            "ADVISOR_FEES" => Ok(TransactionType::AdvisorFees),
            other => Err(AppError::invalid_value(format!(
                "unknown transaction type: {other}"
            ))),
        }
    }
}

/// Order status filter accepted by the orders endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatusType {
    /// Waiting on a parent order
    AwaitingParentOrder,
    /// Waiting on a triggering condition
    AwaitingCondition,
    /// Held for manual review
    AwaitingManualReview,
    /// Accepted by the broker
    Accepted,
    /// Waiting on a UR-out
    AwaitingUrOut,
    /// Pending activation
    PendingActivation,
    /// Queued for the market open
    Queued,
    /// Working at the exchange
    Working,
    /// Rejected
    Rejected,
    /// Cancel requested, not yet confirmed
    PendingCancel,
    /// Canceled
    Canceled,
    /// Replace requested, not yet confirmed
    PendingReplace,
    /// Replaced by another order
    Replaced,
    /// Completely filled
    Filled,
    /// Expired without filling
    Expired,
    /// Any status
    All,
}

impl OrderStatusType {
    /// The wire representation sent in the `status=` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatusType::AwaitingParentOrder => "AWAITING_PARENT_ORDER",
            OrderStatusType::AwaitingCondition => "AWAITING_CONDITION",
            OrderStatusType::AwaitingManualReview => "AWAITING_MANUAL_REVIEW",
            OrderStatusType::Accepted => "ACCEPTED",
            OrderStatusType::AwaitingUrOut => "AWAITING_UR_OUT",
            OrderStatusType::PendingActivation => "PENDING_ACTIVATION",
            OrderStatusType::Queued => "QUEUED",
            OrderStatusType::Working => "WORKING",
            OrderStatusType::Rejected => "REJECTED",
            OrderStatusType::PendingCancel => "PENDING_CANCEL",
            OrderStatusType::Canceled => "CANCELED",
            OrderStatusType::PendingReplace => "PENDING_REPLACE",
            OrderStatusType::Replaced => "REPLACED",
            OrderStatusType::Filled => "FILLED",
            OrderStatusType::Expired => "EXPIRED",
            OrderStatusType::All => "ALL",
        }
    }
}

impl fmt::Display for OrderStatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatusType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AWAITING_PARENT_ORDER" => Ok(OrderStatusType::AwaitingParentOrder),
            "AWAITING_CONDITION" => Ok(OrderStatusType::AwaitingCondition),
            "AWAITING_MANUAL_REVIEW" => Ok(OrderStatusType::AwaitingManualReview),
            "ACCEPTED" => Ok(OrderStatusType::Accepted),
            "AWAITING_UR_OUT" => Ok(OrderStatusType::AwaitingUrOut),
            "PENDING_ACTIVATION" => Ok(OrderStatusType::PendingActivation),
            "QUEUED" => Ok(OrderStatusType::Queued),
            "WORKING" => Ok(OrderStatusType::Working),
            "REJECTED" => Ok(OrderStatusType::Rejected),
            "PENDING_CANCEL" => Ok(OrderStatusType::PendingCancel),
            "CANCELED" => Ok(OrderStatusType::Canceled),
            "PENDING_REPLACE" => Ok(OrderStatusType::PendingReplace),
            "REPLACED" => Ok(OrderStatusType::Replaced),
            "FILLED" => Ok(OrderStatusType::Filled),
            "EXPIRED" => Ok(OrderStatusType::Expired),
            "ALL" => Ok(OrderStatusType::All),
            other => Err(AppError::invalid_value(format!(
                "unknown order status type: {other}"
            ))),
        }
    }
}
