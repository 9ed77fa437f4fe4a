use serde::{Deserialize, Serialize};

/// One generated sample row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Product label, e.g. "Rustic Steel Chair".
    pub name: String,
    /// A single lorem sentence.
    pub description: String,
    /// Decimal text with two fraction digits, no currency.
    pub price: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
        }
    }

    /// Price as displayed, e.g. `€ 12.50`.
    pub fn display_price(&self, currency_symbol: &str) -> String {
        format!("{} {}", currency_symbol, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price_prefixes_currency() {
        let record = Record::new("Small Wooden Chair", "Lorem ipsum dolor.", "12.50");
        assert_eq!(record.display_price("€"), "€ 12.50");
        assert_eq!(record.display_price("$"), "$ 12.50");
    }
}
