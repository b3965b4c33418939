use crate::domain::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product on offer: a name and a price. Two products are the same
/// product exactly when both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Money,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_name_plus_price() {
        let snickers = Product::new("Snickers", Money::from_cents(120));
        assert_eq!(snickers, Product::new("Snickers", Money::from_cents(120)));
        assert_ne!(snickers, Product::new("Twix", Money::from_cents(120)));
        assert_ne!(snickers, Product::new("Snickers", Money::from_cents(100)));
    }

    #[test]
    fn test_display() {
        let snickers = Product::new("Snickers", Money::from_cents(120));
        assert_eq!(snickers.to_string(), "Snickers (1.20)");
    }
}
