use crate::application::machine::VendingMachine;
use crate::domain::money::Money;
use crate::domain::product::Product;
use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Load,
    Coin,
    Buy,
    Refund,
}

/// One row of an operation script. Monetary fields carry decimal euro
/// amounts (`1.20`) as written in the file; conversion to minor units
/// happens in [`to_minor_units`] when the row is applied.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Operation {
    pub op: OperationKind,
    pub slot: Option<usize>,
    pub product: Option<String>,
    pub price: Option<Decimal>,
    pub count: Option<u32>,
    pub coin: Option<Decimal>,
}

/// What an applied operation produced, for the driver to report.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Stocked { slot: usize, count: u32 },
    Balance(Money),
    Dispensed(Product),
    Refunded(Money),
}

impl Operation {
    /// Runs this operation against `machine`. Missing fields fail as
    /// `MalformedOperation`; everything else is the machine's verdict.
    pub fn apply(self, machine: &mut VendingMachine) -> Result<Outcome> {
        match self.op {
            OperationKind::Load => {
                let slot = require(self.slot, "load requires a slot")?;
                let name = require(self.product, "load requires a product name")?;
                let price = to_minor_units(require(self.price, "load requires a price")?)?;
                let count = require(self.count, "load requires a count")?;
                machine.add_product(Product::new(name, price), count, slot)?;
                Ok(Outcome::Stocked { slot, count })
            }
            OperationKind::Coin => {
                let coin = to_minor_units(require(self.coin, "coin requires a value")?)?;
                Ok(Outcome::Balance(machine.insert_coin(coin)?))
            }
            OperationKind::Buy => {
                let slot = require(self.slot, "buy requires a slot")?;
                Ok(Outcome::Dispensed(machine.buy(slot)?))
            }
            OperationKind::Refund => Ok(Outcome::Refunded(machine.return_money())),
        }
    }
}

fn require<T>(field: Option<T>, message: &str) -> Result<T> {
    field.ok_or_else(|| VendingError::MalformedOperation(message.to_string()))
}

/// Converts a decimal euro amount to minor units exactly. Negative and
/// sub-cent values have no `Money` representation and are rejected.
pub fn to_minor_units(value: Decimal) -> Result<Money> {
    let cents = value * Decimal::from(100);
    if cents.is_sign_negative() || !cents.fract().is_zero() {
        return Err(VendingError::InvalidAmount(value.to_string()));
    }
    cents
        .to_u64()
        .map(Money::from_cents)
        .ok_or_else(|| VendingError::InvalidAmount(value.to_string()))
}
