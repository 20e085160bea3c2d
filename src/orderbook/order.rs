//! Order and trade records held by the book and the registry.

use super::error::OrderBookError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for an order.
///
/// Ids are assigned by the caller (the intake layer) and are expected to be
/// unique and strictly increasing within a process lifetime. The engine
/// never generates ids itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side of an order: buy (bid) or sell (ask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = OrderBookError;

    /// Parse a direction tag from the intake layer, case-insensitively.
    ///
    /// Any tag other than `BUY`/`SELL` is a contract violation by the
    /// caller and fails loudly rather than being matched on an arbitrary
    /// side.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            _ => Err(OrderBookError::InvalidDirection(s.to_string())),
        }
    }
}

/// One fill event from the perspective of one order.
///
/// `order_id` is the counterparty. A single crossing event produces exactly
/// two `Trade` records, one appended to each order involved, sharing amount
/// and price but with opposite counterparty ids. The price is always the
/// resting order's limit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Counterparty order id
    pub order_id: OrderId,
    /// Traded amount
    pub amount: Decimal,
    /// Execution price (the resting order's limit)
    pub price: Decimal,
}

/// A limit order.
///
/// Identity fields (`id`, `timestamp`, `asset`, `side`, `price`, `amount`)
/// are set at construction and never change. `pending` starts equal to
/// `amount` and only decreases, with floor zero; `trades` is append-only.
/// Invariant: `0 <= pending <= amount` at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Creation timestamp, RFC 3339 with offset, assigned once by the caller
    pub timestamp: String,
    pub asset: String,
    pub side: Side,
    pub price: Decimal,
    pub amount: Decimal,
    /// Unfilled remainder of `amount`
    pub pending: Decimal,
    /// Fills accumulated against this order
    pub trades: Vec<Trade>,
}

impl Order {
    /// Create a new order with `pending` initialized to the full amount.
    pub fn new(
        id: OrderId,
        timestamp: impl Into<String>,
        asset: impl Into<String>,
        side: Side,
        price: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            asset: asset.into(),
            side,
            price,
            amount,
            pending: amount,
            trades: Vec::new(),
        }
    }

    /// Whether the order has been completely filled.
    pub fn is_filled(&self) -> bool {
        self.pending.is_zero()
    }
}

/// Lifecycle state of an order as recorded in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Resting in the book, no fills yet
    Open,
    /// Resting in the book with at least one fill
    PartiallyFilled,
    /// Completely filled (terminal)
    Filled,
    /// Canceled before being completely filled (terminal)
    Canceled,
}

impl OrderStatus {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Filled | OrderStatus::Canceled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Open => write!(f, "OPEN"),
            OrderStatus::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            OrderStatus::Filled => write!(f, "FILLED"),
            OrderStatus::Canceled => write!(f, "CANCELED"),
        }
    }
}

/// The registry's snapshot of an order: the order itself plus its status.
///
/// Records are immutable values; every mutation of a live order replaces
/// the whole record in the registry so concurrent readers never observe a
/// half-updated state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order: Order,
    pub status: OrderStatus,
}

impl OrderRecord {
    /// Build a record with status derived from the order's fill state.
    pub fn of(order: Order) -> Self {
        let status = if order.pending.is_zero() {
            OrderStatus::Filled
        } else if order.pending < order.amount {
            OrderStatus::PartiallyFilled
        } else {
            OrderStatus::Open
        };
        Self { order, status }
    }

    /// Build a canceled record. The order's pending amount is zeroed so the
    /// `pending == 0 <=> terminal` invariant holds for canceled orders too.
    pub fn canceled(mut order: Order) -> Self {
        order.pending = Decimal::ZERO;
        Self {
            order,
            status: OrderStatus::Canceled,
        }
    }

    /// Id of the underlying order.
    pub fn id(&self) -> OrderId {
        self.order.id
    }
}
