use crate::domain::money::Money;
use crate::domain::product::Product;
use crate::domain::slot::Slot;
use crate::error::{Result, VendingError};
use tracing::debug;

/// Coin denominations the machine accepts, in minor units.
pub const ACCEPTED_COINS: [Money; 4] = [
    Money::from_cents(10),
    Money::from_cents(20),
    Money::from_cents(50),
    Money::from_cents(100),
];

/// A vending machine: a fixed row of slots, a running coin balance, and
/// the operations that move stock and money between them.
///
/// Single-threaded by design. Callers that need shared access wrap the
/// machine in one lock, because `buy` must decrement stock and subtract
/// the price as a unit.
pub struct VendingMachine {
    manufacturer: String,
    slots: Vec<Slot>,
    balance: Money,
}

impl VendingMachine {
    /// Builds a machine with `slot_count` empty slots of `slot_capacity`
    /// units each. The slot layout is fixed for the machine's lifetime.
    pub fn new(manufacturer: impl Into<String>, slot_count: usize, slot_capacity: u32) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            slots: (0..slot_count).map(|_| Slot::new(slot_capacity)).collect(),
            balance: Money::zero(),
        }
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Stocks `count` units of `product` into the slot at `slot_index`.
    ///
    /// Beyond the slot's own checks, the price must be payable exactly
    /// with the accepted coins.
    pub fn add_product(&mut self, product: Product, count: u32, slot_index: usize) -> Result<()> {
        self.validate_slot_index(slot_index)?;

        if !product.price.is_representable_with(&ACCEPTED_COINS) {
            return Err(VendingError::UnrepresentablePrice {
                price: product.price,
            });
        }

        self.slots[slot_index].add_product(&product, count)?;
        debug!(slot = slot_index, count, product = %product, "stocked");
        Ok(())
    }

    /// Dispenses one unit from the slot at `slot_index`, subtracting its
    /// price from the balance. Stock and balance change together or not
    /// at all.
    pub fn buy(&mut self, slot_index: usize) -> Result<Product> {
        self.validate_slot_index(slot_index)?;

        let slot = &self.slots[slot_index];
        if slot.is_empty() {
            return Err(VendingError::OutOfStock);
        }
        let product = slot.product().cloned().ok_or(VendingError::OutOfStock)?;

        if self.balance < product.price {
            return Err(VendingError::InsufficientFunds {
                price: product.price,
                balance: self.balance,
            });
        }

        let remainder = self.balance.subtract(product.price)?;
        self.slots[slot_index].decrease_count();
        self.balance = remainder;
        debug!(slot = slot_index, product = %product, balance = %self.balance, "dispensed");
        Ok(product)
    }

    /// Accepts one coin, returning the new balance.
    pub fn insert_coin(&mut self, coin: Money) -> Result<Money> {
        if !Self::is_coin_valid(coin) {
            return Err(VendingError::InvalidCoin { coin });
        }
        self.balance += coin;
        debug!(coin = %coin, balance = %self.balance, "coin inserted");
        Ok(self.balance)
    }

    /// Pays out the whole balance and resets it to zero. Calling again
    /// without inserting more coins returns zero.
    pub fn return_money(&mut self) -> Money {
        let refund = std::mem::take(&mut self.balance);
        debug!(refund = %refund, "balance returned");
        refund
    }

    /// Units currently stocked in the slot at `slot_index`.
    pub fn product_amount(&self, slot_index: usize) -> Result<u32> {
        self.validate_slot_index(slot_index)?;
        Ok(self.slots[slot_index].count())
    }

    /// Whether the slot at `slot_index` currently stocks `product`.
    pub fn has_product(&self, slot_index: usize, product: &Product) -> Result<bool> {
        self.validate_slot_index(slot_index)?;
        Ok(self.slots[slot_index].contains_product(product))
    }

    /// Whether `coin` is one of the accepted denominations.
    pub fn is_coin_valid(coin: Money) -> bool {
        ACCEPTED_COINS.contains(&coin)
    }

    fn validate_slot_index(&self, index: usize) -> Result<()> {
        if index >= self.slots.len() {
            return Err(VendingError::InvalidSlotIndex {
                index,
                slot_count: self.slots.len(),
            });
        }
        Ok(())
    }
}
