//! Core OrderBook implementation for managing price levels and orders

use super::order::{OrderId, OrderRecord, Side};
use super::side::BookSide;
use super::snapshot::OrderBookSnapshot;
use crate::utils::current_time_millis;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Both halves of the book. Mutated only under the book's lock.
#[derive(Debug)]
pub(super) struct Halves {
    pub(super) bids: BookSide,
    pub(super) asks: BookSide,
}

impl Halves {
    /// The half holding resting orders of the given side.
    pub(super) fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }
}

/// The OrderBook holds the resting orders for one asset and the registry of
/// every order ever submitted to it.
///
/// Crossing logic reads and writes both halves and the registry as one
/// atomic step, so `submit` and `cancel_order` run their entire body under
/// a single lock. The registry is a concurrent map whose entries are
/// replaced wholesale inside that same critical section, which lets
/// `get_order` read lock-free without ever observing a torn record.
pub struct OrderBook {
    /// The asset symbol this book trades
    pub(super) symbol: String,

    /// Bid and ask price levels, behind the book's exclusion lock
    pub(super) halves: Mutex<Halves>,

    /// Registry: order id to the most recent snapshot of that order.
    /// Entries are never removed; history lives for the process lifetime.
    pub(super) orders: DashMap<OrderId, OrderRecord>,
}

impl OrderBook {
    /// Create a new order book for the given asset symbol
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            halves: Mutex::new(Halves {
                bids: BookSide::new(Side::Buy),
                asks: BookSide::new(Side::Sell),
            }),
            orders: DashMap::new(),
        }
    }

    /// Get the asset symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Acquire the book lock, recovering the guard if a previous holder
    /// panicked.
    pub(super) fn lock_halves(&self) -> MutexGuard<'_, Halves> {
        self.halves.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<Decimal> {
        self.lock_halves().bids.best_price()
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<Decimal> {
        self.lock_halves().asks.best_price()
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Decimal> {
        let halves = self.lock_halves();
        match (halves.bids.best_price(), halves.asks.best_price()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        let halves = self.lock_halves();
        match (halves.bids.best_price(), halves.asks.best_price()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::TWO),
            _ => None,
        }
    }

    /// Get the latest recorded state of an order by id.
    ///
    /// Pure registry read: never touches the book halves and may run
    /// concurrently with mutations. Returns the snapshot written by the
    /// last matching or cancellation that touched this id.
    pub fn get_order(&self, order_id: OrderId) -> Option<OrderRecord> {
        let record = self.orders.get(&order_id).map(|entry| entry.clone());
        trace!(
            "Order book {}: lookup of order {} -> found={}",
            self.symbol,
            order_id,
            record.is_some()
        );
        record
    }

    /// Number of orders ever recorded by this book.
    pub fn recorded_order_count(&self) -> usize {
        self.orders.len()
    }

    /// Number of orders currently resting in the book.
    pub fn resting_order_count(&self) -> usize {
        let halves = self.lock_halves();
        halves.bids.order_count() + halves.asks.order_count()
    }

    /// Create a snapshot of the current book state, up to `depth` price
    /// levels per side, best prices first.
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let halves = self.lock_halves();
        OrderBookSnapshot::from_levels(
            &self.symbol,
            current_time_millis(),
            halves.bids.depth(depth),
            halves.asks.depth(depth),
        )
    }
}
