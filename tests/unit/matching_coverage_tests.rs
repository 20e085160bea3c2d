//! End-to-end matching scenarios through the public API.

use matchbook_rs::{Order, OrderBook, OrderId, OrderStatus, Side};
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
fn test_buy_order_with_no_matching_sell_rests() {
    let book = OrderBook::new("BTC");
    let response = book
        .submit(create_order(1, Side::Buy, dec!(10000), dec!(1.0)))
        .unwrap();

    assert_eq!(response.id(), OrderId(1));
    assert_eq!(response.order.pending, response.order.amount);
}

#[test]
fn test_sell_order_with_no_matching_buy_rests() {
    let book = OrderBook::new("BTC");
    let response = book
        .submit(create_order(2, Side::Sell, dec!(11000), dec!(2.0)))
        .unwrap();

    assert_eq!(response.id(), OrderId(2));
    assert_eq!(response.order.pending, dec!(2.0));
}

#[test]
fn test_buy_order_matches_existing_sell_order() {
    let book = OrderBook::new("BTC");
    book.submit(create_order(3, Side::Sell, dec!(10000), dec!(1.5)))
        .unwrap();

    let response = book
        .submit(create_order(4, Side::Buy, dec!(10000), dec!(1.0)))
        .unwrap();

    assert_eq!(response.order.pending, dec!(0.0));
    assert_eq!(response.order.trades.len(), 1);
    let trade = &response.order.trades[0];
    assert_eq!(trade.order_id, OrderId(3));
    assert_eq!(trade.amount, dec!(1.0));
    assert_eq!(trade.price, dec!(10000));
}

#[test]
fn test_sell_order_matches_existing_buy_order() {
    let book = OrderBook::new("BTC");
    book.submit(create_order(5, Side::Buy, dec!(10500), dec!(2.0)))
        .unwrap();

    let response = book
        .submit(create_order(6, Side::Sell, dec!(10500), dec!(1.5)))
        .unwrap();

    assert_eq!(response.order.pending, dec!(0.0));
    assert_eq!(response.order.trades.len(), 1);
    let trade = &response.order.trades[0];
    assert_eq!(trade.order_id, OrderId(5));
    assert_eq!(trade.amount, dec!(1.5));
    assert_eq!(trade.price, dec!(10500));
}

#[test]
fn test_price_improvement_goes_to_the_taker() {
    let book = OrderBook::new("BTC");
    // Asks at 9900 and 10000; a buy at 10000 lifts the cheaper ask first.
    book.submit(create_order(1, Side::Sell, dec!(10000), dec!(1.0)))
        .unwrap();
    book.submit(create_order(2, Side::Sell, dec!(9900), dec!(1.0)))
        .unwrap();

    let response = book
        .submit(create_order(3, Side::Buy, dec!(10000), dec!(1.0)))
        .unwrap();

    assert_eq!(response.order.trades.len(), 1);
    assert_eq!(response.order.trades[0].order_id, OrderId(2));
    assert_eq!(response.order.trades[0].price, dec!(9900));
    assert_eq!(book.best_ask(), Some(dec!(10000)));
}

#[test]
fn test_one_taker_fills_many_makers() {
    let book = OrderBook::new("BTC");
    book.submit(create_order(1, Side::Sell, dec!(10000), dec!(0.4)))
        .unwrap();
    book.submit(create_order(2, Side::Sell, dec!(10000), dec!(0.4)))
        .unwrap();
    book.submit(create_order(3, Side::Sell, dec!(10001), dec!(0.4)))
        .unwrap();

    let response = book
        .submit(create_order(4, Side::Buy, dec!(10001), dec!(1.0)))
        .unwrap();

    assert_eq!(response.status, OrderStatus::Filled);
    assert_eq!(response.order.trades.len(), 3);
    // FIFO at 10000, then the 10001 level for the remaining 0.2.
    assert_eq!(response.order.trades[0].order_id, OrderId(1));
    assert_eq!(response.order.trades[1].order_id, OrderId(2));
    assert_eq!(response.order.trades[2].order_id, OrderId(3));
    assert_eq!(response.order.trades[2].amount, dec!(0.2));

    let maker3 = book.get_order(OrderId(3)).unwrap();
    assert_eq!(maker3.order.pending, dec!(0.2));
    assert_eq!(maker3.status, OrderStatus::PartiallyFilled);
}

#[test]
fn test_interleaved_flow_conserves_quantity() {
    let book = OrderBook::new("BTC");
    let orders = [
        (1, Side::Buy, dec!(100), dec!(1.0)),
        (2, Side::Sell, dec!(101), dec!(2.0)),
        (3, Side::Buy, dec!(101), dec!(0.7)),
        (4, Side::Sell, dec!(99), dec!(1.6)),
        (5, Side::Buy, dec!(102), dec!(2.0)),
        (6, Side::Sell, dec!(100), dec!(0.3)),
    ];
    for (id, side, price, amount) in orders {
        book.submit(create_order(id, side, price, amount)).unwrap();
    }

    // Every trade was booked twice with equal amounts, so the total filled
    // quantity on the buy side equals the sell side exactly.
    let filled = |id: u64| {
        let record = book.get_order(OrderId(id)).unwrap();
        record.order.amount - record.order.pending
    };
    let buys: Decimal = [1, 3, 5].into_iter().map(filled).sum();
    let sells: Decimal = [2, 4, 6].into_iter().map(filled).sum();
    assert_eq!(buys, sells);

    // And every trade references a counterparty whose mirrored trade has
    // the same amount and price.
    for id in 1..=6u64 {
        let record = book.get_order(OrderId(id)).unwrap();
        for trade in &record.order.trades {
            let counterparty = book.get_order(trade.order_id).unwrap();
            assert!(counterparty.order.trades.iter().any(|mirror| {
                mirror.order_id == OrderId(id)
                    && mirror.amount == trade.amount
                    && mirror.price == trade.price
            }));
        }
    }
}

#[test]
fn test_get_order_unknown_id_is_none() {
    let book = OrderBook::new("BTC");
    assert!(book.get_order(OrderId(999)).is_none());
}
