//! # Price-Time Priority Matching Engine
//!
//! A single-asset limit order matching engine. Incoming BUY/SELL limit
//! orders are crossed against a resting book under price-time priority:
//! better prices match first, and among equal prices the earliest-submitted
//! order matches first. Fills are recorded as paired trades, one per side
//! of each crossing event, always priced at the resting order's limit.
//!
//! ## Key properties
//!
//! - **Exact decimal arithmetic**: every price and amount is a
//!   `rust_decimal::Decimal`; comparisons, subtraction and minimums are
//!   exact, so partial fills never leave phantom residual amounts behind.
//!
//! - **Price-time priority**: each side of the book is a price-ordered map
//!   of FIFO queues. The bid side serves its highest price first, the ask
//!   side its lowest; within a level, strict insertion order is preserved.
//!
//! - **Consistent lookups**: a registry maps every order id ever submitted
//!   to its latest snapshot. Records are replaced wholesale inside the same
//!   critical section that mutates the book, so [`OrderBook::get_order`]
//!   can read concurrently with matching without seeing torn state.
//!
//! - **Cancellation**: resting orders can be excised by id. Cancel is
//!   idempotent and distinguishes an unknown id from an order that is
//!   already filled or canceled.
//!
//! The engine consumes fully-formed orders and returns plain result
//! records; transport, request validation and wire formats belong to the
//! caller. [`OrderIntake`] provides the thin service layer the engine
//! expects in front of it: monotonic id allocation, creation timestamps
//! and direction-tag parsing.
//!
//! ## Example
//!
//! ```
//! use matchbook_rs::{Order, OrderBook, OrderId, Side};
//! use rust_decimal::Decimal;
//!
//! let book = OrderBook::new("BTCUSD");
//!
//! let sell = Order::new(
//!     OrderId(1),
//!     "2021-12-08T13:34:44.498775Z",
//!     "BTCUSD",
//!     Side::Sell,
//!     Decimal::new(43_251, 0),
//!     Decimal::ONE,
//! );
//! book.submit(sell).unwrap();
//!
//! let buy = Order::new(
//!     OrderId(2),
//!     "2021-12-08T13:34:45.000000Z",
//!     "BTCUSD",
//!     Side::Buy,
//!     Decimal::new(43_251, 0),
//!     Decimal::ONE,
//! );
//! let result = book.submit(buy).unwrap();
//! assert!(result.order.is_filled());
//! assert_eq!(result.order.trades.len(), 1);
//! ```

pub mod orderbook;

pub mod intake;

mod utils;

pub use intake::{IdGenerator, OrderIntake, OrderRequest};
pub use orderbook::{
    BookSide, CancelOutcome, Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId,
    OrderRecord, OrderStatus, PriceLevelSnapshot, Side, Trade,
};
pub use utils::{current_time_millis, current_timestamp};
