//! Order cancellation.

use super::order::{OrderId, OrderRecord};
use crate::OrderBook;
use tracing::trace;

/// Result of a cancellation request.
///
/// The three cases are distinguished so the intake layer can map them to
/// different responses: an id the book has never seen, an order already in
/// a terminal state (no-op), and a successful cancel.
#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    /// The order was resting and has been removed from the book.
    Canceled(OrderRecord),
    /// The order exists but is already filled or canceled; nothing changed.
    AlreadyClosed(OrderRecord),
    /// The id was never submitted to this book.
    NotFound,
}

impl CancelOutcome {
    /// Whether this call actually canceled the order. Canceling the same id
    /// twice yields `false` the second time.
    pub fn was_canceled(&self) -> bool {
        matches!(self, CancelOutcome::Canceled(_))
    }

    /// The order snapshot, if the id was known.
    pub fn record(&self) -> Option<&OrderRecord> {
        match self {
            CancelOutcome::Canceled(record) | CancelOutcome::AlreadyClosed(record) => Some(record),
            CancelOutcome::NotFound => None,
        }
    }
}

impl OrderBook {
    /// Cancel a resting order by id.
    ///
    /// The registry's recorded side locates the order in the correct book
    /// half (the side of an order is immutable, so the recorded side can be
    /// trusted). Cancellation never resurrects or partially cancels a
    /// filled order: if the order is no longer resting, whether filled,
    /// already canceled, or fully matched on arrival without ever resting,
    /// this is a no-op.
    pub fn cancel_order(&self, order_id: OrderId) -> CancelOutcome {
        // Lock before consulting the registry so the record cannot change
        // between the terminal check and the removal.
        let mut halves = self.lock_halves();

        let Some(record) = self.orders.get(&order_id).map(|entry| entry.clone()) else {
            trace!("Order book {}: cancel of unknown order {}", self.symbol, order_id);
            return CancelOutcome::NotFound;
        };
        if record.status.is_terminal() {
            trace!(
                "Order book {}: cancel no-op, order {} is {}",
                self.symbol, order_id, record.status
            );
            return CancelOutcome::AlreadyClosed(record);
        }

        let side = record.order.side;
        let price = record.order.price;
        match halves.side_mut(side).remove(order_id, price) {
            Some(resting) => {
                trace!("Order book {}: canceled order {}", self.symbol, order_id);
                let canceled = OrderRecord::canceled(resting);
                self.orders.insert(order_id, canceled.clone());
                CancelOutcome::Canceled(canceled)
            }
            // Not in the book despite a non-terminal record; treat as closed.
            None => CancelOutcome::AlreadyClosed(record),
        }
    }
}
