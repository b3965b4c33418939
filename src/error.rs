use crate::domain::money::Money;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VendingError>;

/// Every way a machine operation can fail. Checks run before any mutation,
/// so a returned error always leaves the machine unchanged.
#[derive(Error, Debug)]
pub enum VendingError {
    #[error("slot index {index} must be less than {slot_count}")]
    InvalidSlotIndex { index: usize, slot_count: usize },
    #[error("product count must be greater than 0 and at most {space_left}, got {count}")]
    InvalidCount { count: u32, space_left: u32 },
    #[error("slot already holds {held}, cannot add {offered}")]
    ConflictingProduct { held: String, offered: String },
    #[error("product must have a name")]
    EmptyProductName,
    #[error("price {price} cannot be paid with the accepted coins")]
    UnrepresentablePrice { price: Money },
    #[error("the selected product is out of stock")]
    OutOfStock,
    #[error("price {price} exceeds the inserted balance {balance}")]
    InsufficientFunds { price: Money, balance: Money },
    #[error("coin {coin} is not accepted")]
    InvalidCoin { coin: Money },
    #[error("subtraction would produce a negative amount")]
    NegativeResult,
    #[error("amount {0} cannot be represented in whole cents")]
    InvalidAmount(String),
    #[error("malformed operation: {0}")]
    MalformedOperation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
