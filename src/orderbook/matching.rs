//! Contains the core matching engine logic for the order book.

use super::book::Halves;
use super::order::{Order, OrderRecord, Side, Trade};
use crate::{OrderBook, OrderBookError};
use rust_decimal::Decimal;
use tracing::trace;

impl OrderBook {
    /// Submit a limit order: cross it against the opposite side while the
    /// price allows, then rest any remainder at its own limit price.
    ///
    /// Returns the submitted order's final state, carrying only the trades
    /// generated during this call. Fills applied to this order later, by
    /// future crossing submissions, are visible through [`OrderBook::get_order`]
    /// but never through an earlier `submit` return value. Resting orders
    /// consumed by this call are updated in place and their registry
    /// records replaced.
    ///
    /// Preconditions are checked before any mutation, so an error leaves
    /// both the book and the registry untouched.
    pub fn submit(&self, mut order: Order) -> Result<OrderRecord, OrderBookError> {
        if order.price <= Decimal::ZERO {
            return Err(OrderBookError::InvalidPrice(order.price));
        }
        if order.amount <= Decimal::ZERO {
            return Err(OrderBookError::InvalidAmount(order.amount));
        }

        trace!(
            "Order book {}: submitting {} order {} amount {} limit {}",
            self.symbol, order.side, order.id, order.pending, order.price
        );

        let mut halves = self.lock_halves();
        self.cross(&mut halves, &mut order);

        // Any remainder rests at the tail of its own price level, making it
        // the newest order there for future time-priority matching.
        if order.pending > Decimal::ZERO {
            halves.side_mut(order.side).rest(order.clone());
        }

        let record = OrderRecord::of(order);
        self.orders.insert(record.id(), record.clone());
        Ok(record)
    }

    /// Walk the opposite side best-price-first, trading against the front
    /// of each level until the order is exhausted or no level crosses.
    fn cross(&self, halves: &mut Halves, order: &mut Order) {
        let opposite = order.side.opposite();

        while order.pending > Decimal::ZERO {
            let book_side = halves.side_mut(opposite);
            let Some(best_price) = book_side.best_price() else {
                break;
            };

            // Inclusive crossing: an exactly-equal price always trades.
            let acceptable = match order.side {
                Side::Buy => order.price >= best_price,
                Side::Sell => order.price <= best_price,
            };
            if !acceptable {
                break;
            }

            let Some(resting) = book_side.front_mut(best_price) else {
                // Stale empty level; erase it and retry at the next price.
                book_side.drop_level(best_price);
                continue;
            };

            let traded = order.pending.min(resting.pending);
            if traded.is_zero() {
                // Zero-amount corruption guard: continuing could loop forever.
                break;
            }

            // One crossing event, two mirrored trade records, both priced
            // at the resting order's limit.
            order.trades.push(Trade {
                order_id: resting.id,
                amount: traded,
                price: best_price,
            });
            resting.trades.push(Trade {
                order_id: order.id,
                amount: traded,
                price: best_price,
            });

            order.pending -= traded;
            resting.pending -= traded;
            debug_assert!(order.pending >= Decimal::ZERO);
            debug_assert!(resting.pending >= Decimal::ZERO);

            trace!(
                "Order book {}: order {} traded {} at {} against {}",
                self.symbol, order.id, traded, best_price, resting.id
            );

            // Replace the counterparty's registry record in the same
            // critical section, so lookups never drift from the book.
            let filled = resting.pending.is_zero();
            let resting_record = OrderRecord::of(resting.clone());
            self.orders.insert(resting_record.id(), resting_record);

            if filled {
                book_side.pop_front(best_price);
            }
        }
    }
}
