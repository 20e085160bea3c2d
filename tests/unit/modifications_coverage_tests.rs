//! Cancellation scenarios through the public API.

use matchbook_rs::{CancelOutcome, Order, OrderBook, OrderId, OrderStatus, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn create_order(id: u64, side: Side, price: Decimal, amount: Decimal) -> Order {
    Order::new(
        OrderId(id),
        "2021-12-08T13:34:44.498775Z",
        "BTC",
        side,
        price,
        amount,
    )
}

#[test]
fn test_cancel_resting_order_removes_it_from_the_book() {
    let book = OrderBook::new("BTC");
    book.submit(create_order(1, Side::Buy, dec!(10000), dec!(1.0)))
        .unwrap();

    let outcome = book.cancel_order(OrderId(1));
    assert!(outcome.was_canceled());
    let record = outcome.record().unwrap();
    assert_eq!(record.status, OrderStatus::Canceled);
    assert_eq!(record.order.pending, dec!(0));

    assert_eq!(book.best_bid(), None);
    assert_eq!(book.resting_order_count(), 0);
}

#[test]
fn test_cancel_unknown_order_is_not_found() {
    let book = OrderBook::new("BTC");
    assert!(matches!(book.cancel_order(OrderId(42)), CancelOutcome::NotFound));
}

#[test]
fn test_cancel_is_idempotent() {
    let book = OrderBook::new("BTC");
    book.submit(create_order(1, Side::Sell, dec!(10000), dec!(1.0)))
        .unwrap();

    assert!(book.cancel_order(OrderId(1)).was_canceled());

    let second = book.cancel_order(OrderId(1));
    assert!(!second.was_canceled());
    match second {
        CancelOutcome::AlreadyClosed(record) => {
            assert_eq!(record.status, OrderStatus::Canceled);
        }
        other => panic!("expected AlreadyClosed, got {other:?}"),
    }
}

#[test]
fn test_cancel_filled_order_keeps_its_trades() {
    let book = OrderBook::new("BTC");
    book.submit(create_order(1, Side::Sell, dec!(10000), dec!(1.0)))
        .unwrap();
    book.submit(create_order(2, Side::Buy, dec!(10000), dec!(1.0)))
        .unwrap();

    let outcome = book.cancel_order(OrderId(1));
    assert!(!outcome.was_canceled());
    let record = outcome.record().unwrap();
    assert_eq!(record.status, OrderStatus::Filled);
    assert_eq!(record.order.trades.len(), 1);

    // The registry view is untouched as well.
    let lookup = book.get_order(OrderId(1)).unwrap();
    assert_eq!(lookup.status, OrderStatus::Filled);
}

#[test]
fn test_cancel_partially_filled_order_releases_the_remainder() {
    let book = OrderBook::new("BTC");
    book.submit(create_order(1, Side::Sell, dec!(10000), dec!(2.0)))
        .unwrap();
    book.submit(create_order(2, Side::Buy, dec!(10000), dec!(0.5)))
        .unwrap();

    let outcome = book.cancel_order(OrderId(1));
    assert!(outcome.was_canceled());
    let record = outcome.record().unwrap();
    assert_eq!(record.status, OrderStatus::Canceled);
    assert_eq!(record.order.pending, dec!(0));
    assert_eq!(record.order.trades.len(), 1);

    // A later buy at the same price no longer finds a counterparty.
    let response = book
        .submit(create_order(3, Side::Buy, dec!(10000), dec!(1.0)))
        .unwrap();
    assert!(response.order.trades.is_empty());
}
