//! Order intake: the service layer sitting in front of the matching engine.
//!
//! Mirrors what a transport layer needs but the engine refuses to own:
//! allocating unique, strictly-increasing order ids, stamping creation
//! times, and turning a raw direction tag into a [`Side`]. The engine
//! itself only ever sees fully-formed [`Order`] values.

use crate::orderbook::{CancelOutcome, Order, OrderBook, OrderBookError, OrderId, OrderRecord};
use crate::utils::current_timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Process-scoped allocator of unique, strictly-increasing order ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> OrderId {
        OrderId(self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

/// An order as received from the outside world, before the intake layer
/// has assigned identity to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub asset: String,
    pub price: Decimal,
    pub amount: Decimal,
    /// Direction tag, `BUY` or `SELL`, case-insensitive
    pub direction: String,
}

/// Intake service for one order book: assigns ids and timestamps, then
/// hands fully-formed orders to the engine.
pub struct OrderIntake {
    book: Arc<OrderBook>,
    ids: IdGenerator,
}

impl OrderIntake {
    pub fn new(book: Arc<OrderBook>) -> Self {
        Self {
            book,
            ids: IdGenerator::new(),
        }
    }

    /// The book this intake feeds.
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Place a limit order: parse the direction, stamp id and creation
    /// time, and submit to the engine.
    ///
    /// A direction tag that is neither BUY nor SELL fails this request with
    /// [`OrderBookError::InvalidDirection`] without touching the book.
    pub fn place_order(&self, request: OrderRequest) -> Result<OrderRecord, OrderBookError> {
        let side = request.direction.parse()?;
        let order = Order::new(
            self.ids.next_id(),
            current_timestamp(),
            request.asset,
            side,
            request.price,
            request.amount,
        );
        debug!("Placing {} order {} on {}", side, order.id, self.book.symbol());
        self.book.submit(order)
    }

    /// Latest recorded state of an order.
    pub fn get_order(&self, order_id: OrderId) -> Option<OrderRecord> {
        self.book.get_order(order_id)
    }

    /// Cancel a resting order.
    pub fn cancel_order(&self, order_id: OrderId) -> CancelOutcome {
        self.book.cancel_order(order_id)
    }
}
