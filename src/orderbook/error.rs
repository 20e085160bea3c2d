//! Order book error types

use rust_decimal::Decimal;
use std::fmt;

/// Errors that can occur within the OrderBook
///
/// Expected steady-state conditions (unknown id on lookup, cancel of an
/// already-terminal order) are not errors; they are reported through
/// `Option` and `CancelOutcome` results. The variants here abort a single
/// request and leave the book untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// A direction tag that maps to neither BUY nor SELL reached the engine
    InvalidDirection(String),

    /// Order price was zero or negative
    InvalidPrice(Decimal),

    /// Order amount was zero or negative
    InvalidAmount(Decimal),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidDirection(tag) => {
                write!(f, "Invalid order direction: {}", tag)
            }
            OrderBookError::InvalidPrice(price) => {
                write!(f, "Order price must be positive, got {}", price)
            }
            OrderBookError::InvalidAmount(amount) => {
                write!(f, "Order amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
