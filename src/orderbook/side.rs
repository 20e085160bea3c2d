//! One half of the order book: price-ordered FIFO queues of resting orders.

use super::order::{Order, OrderId, Side};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, VecDeque};
use tracing::trace;

/// Price levels for a single side of the book.
///
/// Levels are keyed by price in a `BTreeMap`; the bid side reads its best
/// price from the maximum key, the ask side from the minimum key. Within a
/// level, orders are held in strict insertion order, which is the time
/// component of price-time priority. A level whose queue becomes empty is
/// deleted from the map rather than left behind.
#[derive(Debug)]
pub struct BookSide {
    side: Side,
    levels: BTreeMap<Decimal, VecDeque<Order>>,
}

impl BookSide {
    /// Create an empty side.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// Which side of the book this is.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Top-of-book price: the maximum key for bids, the minimum for asks.
    /// `None` if the side is empty.
    pub fn best_price(&self) -> Option<Decimal> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// The earliest-inserted order at `price`, or `None`.
    pub fn peek_front(&self, price: Decimal) -> Option<&Order> {
        self.levels.get(&price).and_then(|queue| queue.front())
    }

    /// Mutable access to the earliest-inserted order at `price`.
    pub fn front_mut(&mut self, price: Decimal) -> Option<&mut Order> {
        self.levels.get_mut(&price).and_then(|queue| queue.front_mut())
    }

    /// Remove and return the earliest-inserted order at `price`, deleting
    /// the level if its queue becomes empty.
    pub fn pop_front(&mut self, price: Decimal) -> Option<Order> {
        let queue = self.levels.get_mut(&price)?;
        let order = queue.pop_front();
        if queue.is_empty() {
            self.levels.remove(&price);
        }
        order
    }

    /// Append `order` to the tail of the queue at its limit price, creating
    /// the level if absent. Only orders with pending amount left are rested.
    pub fn rest(&mut self, order: Order) {
        trace!("Resting {} order {} at price {}", self.side, order.id, order.price);
        self.levels.entry(order.price).or_default().push_back(order);
    }

    /// Remove the order with `order_id` from the queue at `price`.
    ///
    /// Returns the excised order if it was resting there; the level is
    /// deleted if the queue becomes empty.
    pub fn remove(&mut self, order_id: OrderId, price: Decimal) -> Option<Order> {
        let queue = self.levels.get_mut(&price)?;
        let position = queue.iter().position(|order| order.id == order_id)?;
        let order = queue.remove(position);
        if queue.is_empty() {
            self.levels.remove(&price);
        }
        order
    }

    /// Delete the level at `price` outright. Used to clean up a level found
    /// empty during matching.
    pub fn drop_level(&mut self, price: Decimal) {
        self.levels.remove(&price);
    }

    /// Whether this side holds no resting orders.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of price levels currently present.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total number of resting orders on this side.
    pub fn order_count(&self) -> usize {
        self.levels.values().map(VecDeque::len).sum()
    }

    /// Per-level (price, order count, total pending amount) rows, best
    /// price first.
    pub fn depth(&self, depth: usize) -> Vec<(Decimal, usize, Decimal)> {
        let rows = self.levels.iter().map(|(price, queue)| {
            let total: Decimal = queue.iter().map(|order| order.pending).sum();
            (*price, queue.len(), total)
        });
        match self.side {
            Side::Buy => rows.rev().take(depth).collect(),
            Side::Sell => rows.take(depth).collect(),
        }
    }
}
