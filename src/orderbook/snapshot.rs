//! Order book snapshot for market data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate view of one price level at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevelSnapshot {
    /// Price of this level
    pub price: Decimal,
    /// Number of resting orders at this level
    pub order_count: usize,
    /// Sum of pending amounts at this level
    pub total_amount: Decimal,
}

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The asset symbol for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Bid price levels, highest price first
    pub bids: Vec<PriceLevelSnapshot>,

    /// Ask price levels, lowest price first
    pub asks: Vec<PriceLevelSnapshot>,
}

impl OrderBookSnapshot {
    pub(super) fn from_levels(
        symbol: &str,
        timestamp: u64,
        bids: Vec<(Decimal, usize, Decimal)>,
        asks: Vec<(Decimal, usize, Decimal)>,
    ) -> Self {
        let to_levels = |rows: Vec<(Decimal, usize, Decimal)>| {
            rows.into_iter()
                .map(|(price, order_count, total_amount)| PriceLevelSnapshot {
                    price,
                    order_count,
                    total_amount,
                })
                .collect()
        };
        Self {
            symbol: symbol.to_string(),
            timestamp,
            bids: to_levels(bids),
            asks: to_levels(asks),
        }
    }

    /// Get the best bid price and amount
    pub fn best_bid(&self) -> Option<(Decimal, Decimal)> {
        self.bids
            .first()
            .map(|level| (level.price, level.total_amount))
    }

    /// Get the best ask price and amount
    pub fn best_ask(&self) -> Option<(Decimal, Decimal)> {
        self.asks
            .first()
            .map(|level| (level.price, level.total_amount))
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some((bid + ask) / Decimal::TWO),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask - bid),
            _ => None,
        }
    }

    /// Total pending amount on the bid side
    pub fn total_bid_amount(&self) -> Decimal {
        self.bids.iter().map(|level| level.total_amount).sum()
    }

    /// Total pending amount on the ask side
    pub fn total_ask_amount(&self) -> Decimal {
        self.asks.iter().map(|level| level.total_amount).sum()
    }
}
