//! OrderBook implementation: price-time priority matching for one asset.

pub mod book;
mod error;
mod modifications;
mod order;
mod side;
mod snapshot;

pub mod matching;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use modifications::CancelOutcome;
pub use order::{Order, OrderId, OrderRecord, OrderStatus, Side, Trade};
pub use side::BookSide;
pub use snapshot::{OrderBookSnapshot, PriceLevelSnapshot};
